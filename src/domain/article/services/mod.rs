// src/domain/article/services/mod.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::value_objects::{ArticleSlug, ArticleTitle, SLUG_MAX_CHARS};
use crate::domain::errors::DomainResult;

const SLUG_PREFIX: &str = "article-";

/// Domain service deriving article slugs from titles.
pub struct ArticleSlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    #[must_use]
    pub const fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// `article-<slugified title>`, or `article-<unix timestamp>` when the
    /// title has no sluggable characters.
    ///
    /// # Errors
    ///
    /// Fails only if the resulting slug is rejected by [`ArticleSlug::new`].
    pub fn slug_for(&self, title: &ArticleTitle, now: DateTime<Utc>) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title.as_str());
        let candidate = if base.is_empty() {
            format!("{SLUG_PREFIX}{}", now.timestamp())
        } else {
            format!("{SLUG_PREFIX}{base}")
        };

        let truncated: String = candidate.chars().take(SLUG_MAX_CHARS).collect();
        ArticleSlug::new(truncated.trim_end_matches('-'))
    }
}
