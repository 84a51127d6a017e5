// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ARTICLE_NOT_FOUND, ApplicationError, ApplicationResult},
    domain::{article::ArticleId, errors::DomainError},
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// # Errors
    ///
    /// Returns a not-found error for an unknown id. A cover picture that cannot
    /// be removed is only logged.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)
            .map_err(|_| ApplicationError::not_found(ARTICLE_NOT_FOUND))?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(ARTICLE_NOT_FOUND))?;

        match self.write_repo.delete(id).await {
            Ok(()) => {}
            Err(DomainError::NotFound(_)) => {
                return Err(ApplicationError::not_found(ARTICLE_NOT_FOUND));
            }
            Err(err) => return Err(err.into()),
        }

        if let Some(cover) = &article.cover_picture_ref {
            self.discard_media(cover.as_str()).await;
        }

        tracing::info!(article_id = %id, "article deleted");
        Ok(())
    }
}
