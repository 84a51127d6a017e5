// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::ApplicationResult,
        ports::{ClockPort, MediaStorePort, media::MediaUpload},
        validation::FieldViolations,
    },
    domain::{
        article::{
            ArticleContent, ArticleReadRepository, ArticleWriteRepository, CoverPictureRef,
            Keywords, services::ArticleSlugService,
        },
        content::ContentAnalyzer,
        errors::{DomainError, DomainResult},
    },
};

pub const BANNED_CONTENT_MESSAGE: &str = "the content contains banned words";

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) media_store: Arc<MediaStorePort>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) analyzer: Arc<ContentAnalyzer>,
    pub(super) clock: Arc<ClockPort>,
    pub(super) keyword_limit: usize,
}

impl ArticleCommandService {
    #[must_use]
    pub const fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        media_store: Arc<MediaStorePort>,
        slug_service: Arc<ArticleSlugService>,
        analyzer: Arc<ContentAnalyzer>,
        clock: Arc<ClockPort>,
        keyword_limit: usize,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            media_store,
            slug_service,
            analyzer,
            clock,
            keyword_limit,
        }
    }

    /// Runs the content analyzer. Banned content is recorded as a `content`
    /// violation and yields no keywords.
    pub(super) fn extract_keywords(
        &self,
        content: &ArticleContent,
        violations: &mut FieldViolations,
    ) -> Option<Keywords> {
        let analysis = self.analyzer.analyze(content.as_str(), self.keyword_limit);
        if analysis.is_banned {
            violations.push("content", BANNED_CONTENT_MESSAGE);
            None
        } else {
            Some(Keywords::new(analysis.keywords))
        }
    }

    pub(super) async fn store_cover(&self, upload: MediaUpload) -> ApplicationResult<CoverPictureRef> {
        let file_name = self.media_store.save(upload).await?;
        match CoverPictureRef::new(file_name.clone()) {
            Ok(cover) => Ok(cover),
            Err(err) => {
                self.discard_media(&file_name).await;
                Err(err.into())
            }
        }
    }

    /// Best-effort removal; a leftover file is not worth failing the request.
    pub(super) async fn discard_media(&self, file_name: &str) {
        if let Err(err) = self.media_store.delete(file_name).await {
            tracing::warn!(file_name, error = %err, "failed to delete media file");
        }
    }
}

pub(super) fn validate_upload(upload: MediaUpload) -> DomainResult<MediaUpload> {
    if upload.data.is_empty() {
        return Err(DomainError::Validation("Cover picture cannot be empty".into()));
    }
    if !upload.is_image() {
        return Err(DomainError::Validation("Cover picture must be an image".into()));
    }
    Ok(upload)
}
