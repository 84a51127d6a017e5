use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, OffsetPage},
        error::ApplicationResult,
    },
    domain::article::ArticlePage,
};

pub struct ListArticlesQuery {
    pub page: u32,
    pub limit: u32,
}

impl ArticleQueryService {
    /// # Errors
    ///
    /// Propagates repository failures.
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<OffsetPage<ArticleDto>> {
        let page = ArticlePage::new(query.page, query.limit);
        let (records, total) = self.read_repo.list_page(page).await?;

        let items = records.into_iter().map(Into::into).collect();
        Ok(OffsetPage::new(items, page, total))
    }
}
