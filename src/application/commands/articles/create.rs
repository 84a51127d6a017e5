// src/application/commands/articles/create.rs
use super::{ArticleCommandService, service::validate_upload};
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        ports::media::MediaUpload,
        validation::FieldViolations,
    },
    domain::article::{ArticleContent, ArticleStatus, ArticleTitle, AuthorId, NewArticle},
};

/// Raw create input. Text fields arrive exactly as the client sent them and
/// are validated by the service.
#[derive(Debug, Default)]
pub struct CreateArticleCommand {
    pub author_id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub cover_picture: Option<MediaUpload>,
}

impl CreateArticleCommand {
    #[must_use]
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    author_id: Option<String>,
    title: Option<String>,
    content: Option<String>,
    cover_picture: Option<MediaUpload>,
}

impl CreateArticleCommandBuilder {
    #[must_use]
    pub fn author_id(mut self, author_id: impl ToString) -> Self {
        self.author_id = Some(author_id.to_string());
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn cover_picture(mut self, upload: MediaUpload) -> Self {
        self.cover_picture = Some(upload);
        self
    }

    #[must_use]
    pub fn build(self) -> CreateArticleCommand {
        CreateArticleCommand {
            author_id: self.author_id,
            title: self.title,
            content: self.content,
            cover_picture: self.cover_picture,
        }
    }
}

impl ArticleCommandService {
    /// Validates every field, stores the cover picture and inserts a draft.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::InvalidFields`] listing each invalid field,
    /// or the media store or repository failure.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let CreateArticleCommand {
            author_id,
            title,
            content,
            cover_picture,
        } = command;
        let now = self.clock.now();
        let mut violations = FieldViolations::new();

        let author_id = match author_id.as_deref() {
            Some(raw) => violations.check("authorId", AuthorId::parse(raw))?,
            None => {
                violations.push("authorId", "Author ID cannot be null");
                None
            }
        };

        let title = violations.check("title", ArticleTitle::new(title.unwrap_or_default()))?;
        let slug = match &title {
            Some(title) => violations.check("slug", self.slug_service.slug_for(title, now))?,
            None => None,
        };

        let content = content.and_then(ArticleContent::optional);
        let keywords = content
            .as_ref()
            .and_then(|content| self.extract_keywords(content, &mut violations));

        let upload = match cover_picture {
            Some(upload) => violations.check("coverPicture", validate_upload(upload))?,
            None => None,
        };

        violations.into_result()?;
        let (Some(author_id), Some(title), Some(slug)) = (author_id, title, slug) else {
            return Err(ApplicationError::validation("incomplete article input"));
        };

        let cover_picture_ref = match upload {
            Some(upload) => Some(self.store_cover(upload).await?),
            None => None,
        };

        let new_article = NewArticle {
            author_id,
            title,
            content,
            keywords,
            slug,
            cover_picture_ref: cover_picture_ref.clone(),
            status: ArticleStatus::Draft,
            creation_date: now,
        };

        let created = match self.write_repo.insert(new_article).await {
            Ok(created) => created,
            Err(err) => {
                if let Some(cover) = &cover_picture_ref {
                    self.discard_media(cover.as_str()).await;
                }
                return Err(err.into());
            }
        };

        tracing::info!(article_id = %created.id, slug = %created.slug, "article created");
        Ok(created.into())
    }
}
