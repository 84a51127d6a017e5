use super::{ArticleCommandService, service::validate_upload};
use crate::{
    application::{
        dto::ArticleDto,
        error::{ARTICLE_NOT_FOUND, ApplicationError, ApplicationResult},
        ports::media::MediaUpload,
        validation::FieldViolations,
    },
    domain::article::{
        Article, ArticleContent, ArticleId, ArticleStatus, ArticleTitle, ArticleUpdate, AuthorId,
        CoverPictureRef,
    },
};
use chrono::{DateTime, Utc};

/// Partial update; `None` fields are left untouched. `content: Some("")`
/// clears the content together with its keywords.
#[derive(Debug, Default)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub author_id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub status: Option<String>,
    pub cover_picture: Option<MediaUpload>,
}

impl ArticleCommandService {
    /// Applies the fields that were sent and leaves the others untouched.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown id, [`ApplicationError::InvalidFields`]
    /// for rejected input, or the media store or repository failure.
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)
            .map_err(|_| ApplicationError::not_found(ARTICLE_NOT_FOUND))?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(ARTICLE_NOT_FOUND))?;

        let UpdateArticleCommand {
            id: _,
            author_id,
            title,
            content,
            status,
            cover_picture,
        } = command;
        let now = self.clock.now();
        let mut violations = FieldViolations::new();
        let mut update = ArticleUpdate::new(id);

        let author_id = match author_id {
            Some(raw) => violations.check("authorId", AuthorId::parse(&raw))?,
            None => None,
        };
        if let Some(author_id) = author_id {
            article.author_id = author_id;
            update = update.with_author(author_id);
        }

        if let Some(raw) = title {
            update = self.apply_title(&mut article, raw, now, &mut violations, update)?;
        }

        if let Some(raw) = content {
            let content = ArticleContent::optional(raw);
            let keywords = content
                .as_ref()
                .and_then(|content| self.extract_keywords(content, &mut violations));
            article.replace_content(content.clone(), keywords.clone());
            update = update.with_content(content, keywords);
        }

        let status = match status {
            Some(raw) => violations.check("status", raw.parse::<ArticleStatus>())?,
            None => None,
        };
        if status.is_some_and(|status| article.transition_to(status, now)) {
            update = update.with_status_of(&article);
        }

        let upload = match cover_picture {
            Some(upload) => violations.check("coverPicture", validate_upload(upload))?,
            None => None,
        };

        violations.into_result()?;

        let mut replaced_cover: Option<CoverPictureRef> = None;
        let mut stored_cover: Option<CoverPictureRef> = None;
        if let Some(upload) = upload {
            let cover = self.store_cover(upload).await?;
            replaced_cover = article.cover_picture_ref.replace(cover.clone());
            update = update.with_cover_picture(Some(cover.clone()));
            stored_cover = Some(cover);
        }

        if update.is_empty() {
            return Ok(article.into());
        }

        let updated = match self.write_repo.update(update).await {
            Ok(updated) => updated,
            Err(err) => {
                if let Some(cover) = &stored_cover {
                    self.discard_media(cover.as_str()).await;
                }
                return Err(err.into());
            }
        };

        if let Some(previous) = replaced_cover
            .filter(|previous| Some(previous) != updated.cover_picture_ref.as_ref())
        {
            self.discard_media(previous.as_str()).await;
        }

        tracing::info!(article_id = %updated.id, status = %updated.status, "article updated");
        Ok(updated.into())
    }

    fn apply_title(
        &self,
        article: &mut Article,
        raw: String,
        now: DateTime<Utc>,
        violations: &mut FieldViolations,
        mut update: ArticleUpdate,
    ) -> ApplicationResult<ArticleUpdate> {
        let Some(title) = violations.check("title", ArticleTitle::new(raw))? else {
            return Ok(update);
        };
        let Some(slug) = violations.check("slug", self.slug_service.slug_for(&title, now))? else {
            return Ok(update);
        };

        article.retitle(title.clone(), slug.clone());
        update = update.with_title(title, slug);
        Ok(update)
    }
}
