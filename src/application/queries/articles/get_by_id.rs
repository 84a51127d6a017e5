use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ARTICLE_NOT_FOUND, ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// # Errors
    ///
    /// Returns a not-found error when no article has this id.
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)
            .map_err(|_| ApplicationError::not_found(ARTICLE_NOT_FOUND))?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(ARTICLE_NOT_FOUND))?;
        Ok(article.into())
    }
}
