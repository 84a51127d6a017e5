use crate::domain::article::{Article, ArticleContent, CoverPictureRef, Keywords};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public representation of an article. The soft-delete marker stays
/// internal.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    pub slug: String,
    #[serde(default)]
    pub cover_picture_ref: Option<String>,
    #[schema(example = "draft")]
    pub status: String,
    #[serde(default)]
    pub publication_date: Option<DateTime<Utc>>,
    pub creation_date: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            author_id: article.author_id.into(),
            title: article.title.into_inner(),
            content: article.content.map(ArticleContent::into_inner),
            keywords: article.keywords.map(Keywords::into_inner),
            slug: article.slug.into_inner(),
            cover_picture_ref: article.cover_picture_ref.map(CoverPictureRef::into_inner),
            status: article.status.as_str().to_string(),
            publication_date: article.publication_date,
            creation_date: article.creation_date,
        }
    }
}
