// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{ClockPort, MediaStorePort, SlugGeneratorPort},
        queries::articles::ArticleQueryService,
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        content::ContentAnalyzer,
    },
};

/// Tunables for the article workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleSettings {
    /// How many keywords are extracted from article content.
    pub keyword_limit: usize,
}

impl Default for ArticleSettings {
    fn default() -> Self {
        Self { keyword_limit: 3 }
    }
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    analyzer: Arc<ContentAnalyzer>,
}

impl ApplicationServices {
    #[must_use]
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        media_store: Arc<MediaStorePort>,
        analyzer: Arc<ContentAnalyzer>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        settings: ArticleSettings,
    ) -> Self {
        let slug_service = Arc::new(ArticleSlugService::new(slugger));

        let article_commands = Arc::new(ArticleCommandService::new(
            article_write_repo,
            Arc::clone(&article_read_repo),
            media_store,
            slug_service,
            Arc::clone(&analyzer),
            clock,
            settings.keyword_limit,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(article_read_repo));

        Self {
            article_commands,
            article_queries,
            analyzer,
        }
    }

    #[must_use]
    pub fn content_analyzer(&self) -> Arc<ContentAnalyzer> {
        Arc::clone(&self.analyzer)
    }
}
