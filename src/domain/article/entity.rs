// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleSlug, ArticleStatus, ArticleTitle, AuthorId,
    CoverPictureRef, Keywords,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub author_id: AuthorId,
    pub title: ArticleTitle,
    pub content: Option<ArticleContent>,
    pub keywords: Option<Keywords>,
    pub slug: ArticleSlug,
    pub cover_picture_ref: Option<CoverPictureRef>,
    pub status: ArticleStatus,
    pub publication_date: Option<DateTime<Utc>>,
    pub creation_date: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Article {
    /// Moves the article to `status`, maintaining the publication date and
    /// the soft-delete marker. Returns `false` when nothing changed.
    pub fn transition_to(&mut self, status: ArticleStatus, now: DateTime<Utc>) -> bool {
        if self.status == status {
            return false;
        }

        match status {
            ArticleStatus::Published => {
                if self.publication_date.is_none() {
                    self.publication_date = Some(now);
                }
                self.deleted_at = None;
            }
            ArticleStatus::Deleted => {
                self.deleted_at = Some(now);
            }
            ArticleStatus::Draft => {
                self.deleted_at = None;
            }
        }
        self.status = status;
        true
    }

    /// Replaces the content; keywords always travel with it.
    pub fn replace_content(&mut self, content: Option<ArticleContent>, keywords: Option<Keywords>) {
        self.keywords = if content.is_some() { keywords } else { None };
        self.content = content;
    }

    pub fn retitle(&mut self, title: ArticleTitle, slug: ArticleSlug) {
        self.title = title;
        self.slug = slug;
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub author_id: AuthorId,
    pub title: ArticleTitle,
    pub content: Option<ArticleContent>,
    pub keywords: Option<Keywords>,
    pub slug: ArticleSlug,
    pub cover_picture_ref: Option<CoverPictureRef>,
    pub status: ArticleStatus,
    pub creation_date: DateTime<Utc>,
}

/// Partial update. `None` leaves a column untouched; for nullable columns
/// `Some(None)` writes NULL.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub author_id: Option<AuthorId>,
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub content: Option<Option<ArticleContent>>,
    pub keywords: Option<Option<Keywords>>,
    pub cover_picture_ref: Option<Option<CoverPictureRef>>,
    pub status: Option<ArticleStatus>,
    pub publication_date: Option<Option<DateTime<Utc>>>,
    pub deleted_at: Option<Option<DateTime<Utc>>>,
}

impl ArticleUpdate {
    #[must_use]
    pub const fn new(id: ArticleId) -> Self {
        Self {
            id,
            author_id: None,
            title: None,
            slug: None,
            content: None,
            keywords: None,
            cover_picture_ref: None,
            status: None,
            publication_date: None,
            deleted_at: None,
        }
    }

    #[must_use]
    pub const fn with_author(mut self, author_id: AuthorId) -> Self {
        self.author_id = Some(author_id);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: ArticleTitle, slug: ArticleSlug) -> Self {
        self.title = Some(title);
        self.slug = Some(slug);
        self
    }

    #[must_use]
    pub fn with_content(
        mut self,
        content: Option<ArticleContent>,
        keywords: Option<Keywords>,
    ) -> Self {
        self.content = Some(content);
        self.keywords = Some(keywords);
        self
    }

    #[must_use]
    pub fn with_cover_picture(mut self, cover: Option<CoverPictureRef>) -> Self {
        self.cover_picture_ref = Some(cover);
        self
    }

    /// Copies the status-derived columns from an article that has already
    /// been transitioned in memory.
    #[must_use]
    pub const fn with_status_of(mut self, article: &Article) -> Self {
        self.status = Some(article.status);
        self.publication_date = Some(article.publication_date);
        self.deleted_at = Some(article.deleted_at);
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.author_id.is_none()
            && self.title.is_none()
            && self.slug.is_none()
            && self.content.is_none()
            && self.keywords.is_none()
            && self.cover_picture_ref.is_none()
            && self.status.is_none()
            && self.publication_date.is_none()
            && self.deleted_at.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn sample_article() -> Article {
        Article {
            id: ArticleId::new(1).unwrap(),
            author_id: AuthorId::new(1).unwrap(),
            title: ArticleTitle::new("title").unwrap(),
            content: Some(ArticleContent::new("body body").unwrap()),
            keywords: Some(Keywords::new(vec!["body".into()])),
            slug: ArticleSlug::new("article-title").unwrap(),
            cover_picture_ref: None,
            status: ArticleStatus::Draft,
            publication_date: None,
            creation_date: Utc::now(),
            deleted_at: None,
        }
    }

    #[test]
    fn publishing_sets_publication_date_once() {
        let mut article = sample_article();
        let first = Utc::now();
        assert!(article.transition_to(ArticleStatus::Published, first));
        assert_eq!(article.publication_date, Some(first));

        let later = first + Duration::seconds(30);
        article.transition_to(ArticleStatus::Draft, later);
        article.transition_to(ArticleStatus::Published, later);
        assert_eq!(article.publication_date, Some(first));
    }

    #[test]
    fn deleting_marks_and_restoring_clears() {
        let mut article = sample_article();
        let now = Utc::now();
        article.transition_to(ArticleStatus::Deleted, now);
        assert_eq!(article.deleted_at, Some(now));
        assert_eq!(article.status, ArticleStatus::Deleted);

        article.transition_to(ArticleStatus::Draft, now);
        assert!(article.deleted_at.is_none());
    }

    #[test]
    fn same_status_is_a_no_op() {
        let mut article = sample_article();
        assert!(!article.transition_to(ArticleStatus::Draft, Utc::now()));
    }

    #[test]
    fn clearing_content_drops_keywords() {
        let mut article = sample_article();
        article.replace_content(None, Some(Keywords::new(vec!["stale".into()])));
        assert!(article.content.is_none());
        assert!(article.keywords.is_none());
    }

    #[test]
    fn update_builder_tracks_emptiness() {
        let id = ArticleId::new(3).unwrap();
        assert!(ArticleUpdate::new(id).is_empty());
        assert!(!ArticleUpdate::new(id).with_cover_picture(None).is_empty());
    }
}
