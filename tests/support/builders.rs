// tests/support/builders.rs
use chrono::{DateTime, Utc};

use blogpress_core::domain::article::*;

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: i64,
    author_id: i64,
    title: String,
    slug: String,
    content: Option<String>,
    keywords: Option<Vec<String>>,
    cover: Option<String>,
    status: ArticleStatus,
    publication_date: Option<DateTime<Utc>>,
    creation_date: DateTime<Utc>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            author_id: 1,
            title: "Test Article".into(),
            slug: "article-test-article".into(),
            content: Some("test body".into()),
            keywords: Some(vec!["test".into(), "body".into()]),
            cover: None,
            status: ArticleStatus::Draft,
            publication_date: None,
            creation_date: fixed_now(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn cover(mut self, file_name: impl Into<String>) -> Self {
        self.cover = Some(file_name.into());
        self
    }

    pub fn published_at(mut self, at: DateTime<Utc>) -> Self {
        self.status = ArticleStatus::Published;
        self.publication_date = Some(at);
        self
    }

    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.creation_date = at;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            author_id: AuthorId::new(self.author_id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            content: self.content.map(|c| ArticleContent::new(c).unwrap()),
            keywords: self.keywords.map(Keywords::new),
            slug: ArticleSlug::new(self.slug).unwrap(),
            cover_picture_ref: self.cover.map(|c| CoverPictureRef::new(c).unwrap()),
            status: self.status,
            publication_date: self.publication_date,
            creation_date: self.creation_date,
            deleted_at: None,
        }
    }
}
