use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

pub const TITLE_MAX_CHARS: usize = 100;
pub const SLUG_MAX_CHARS: usize = 255;
pub const COVER_PICTURE_REF_MAX_CHARS: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    /// # Errors
    ///
    /// Rejects ids below 1.
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AuthorId(i64);

impl AuthorId {
    /// # Errors
    ///
    /// Rejects ids below 1.
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "Author ID must be a positive integer".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }

    /// Parses the raw form value sent by clients.
    ///
    /// # Errors
    ///
    /// Reports a missing value, a non-integer or an id below 1 with the
    /// message shown to clients.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("Author ID cannot be null".into()));
        }
        let id = trimmed
            .parse::<i64>()
            .map_err(|_| DomainError::Validation("Author ID must be an integer".into()))?;
        Self::new(id)
    }
}

impl From<AuthorId> for i64 {
    fn from(value: AuthorId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    /// # Errors
    ///
    /// Rejects a blank title or one over 100 characters.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("Title cannot be blank".into()));
        }
        if value.chars().count() > TITLE_MAX_CHARS {
            return Err(DomainError::Validation(
                "Title cannot exceed 100 characters".into(),
            ));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleTitle> for String {
    fn from(value: ArticleTitle) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    /// # Errors
    ///
    /// Rejects a blank slug or one over 255 characters.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("Slug cannot be blank".into()));
        }
        if value.chars().count() > SLUG_MAX_CHARS {
            return Err(DomainError::Validation(
                "Slug cannot exceed 255 characters".into(),
            ));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleSlug> for String {
    fn from(value: ArticleSlug) -> Self {
        value.0
    }
}

/// Article body text. Empty input means "no content" and is rejected here so
/// that callers represent it as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent(String);

impl ArticleContent {
    /// # Errors
    ///
    /// Rejects the empty string.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        Ok(Self(value))
    }

    /// `None` for the empty string, which clients use to clear the content.
    #[must_use]
    pub fn optional(value: impl Into<String>) -> Option<Self> {
        Self::new(value).ok()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<ArticleContent> for String {
    fn from(value: ArticleContent) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keywords(Vec<String>);

impl Keywords {
    #[must_use]
    pub const fn new(values: Vec<String>) -> Self {
        Self(values)
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverPictureRef(String);

impl CoverPictureRef {
    /// # Errors
    ///
    /// Rejects a blank reference or one over 255 characters.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "Cover picture reference cannot be blank".into(),
            ));
        }
        if value.chars().count() > COVER_PICTURE_REF_MAX_CHARS {
            return Err(DomainError::Validation(
                "Cover picture reference cannot exceed 255 characters".into(),
            ));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CoverPictureRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleStatus {
    Draft,
    Published,
    Deleted,
}

impl ArticleStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "deleted" => Ok(Self::Deleted),
            "" => Err(DomainError::Validation("Status cannot be null".into())),
            _ => Err(DomainError::Validation("Invalid status value".into())),
        }
    }
}

/// Offset-based page selection for article listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticlePage {
    page: u32,
    limit: u32,
}

impl ArticlePage {
    pub const DEFAULT_LIMIT: u32 = 10;
    pub const MAX_LIMIT: u32 = 100;

    /// Out-of-range values are clamped rather than rejected.
    #[must_use]
    pub fn new(page: u32, limit: u32) -> Self {
        let page = page.max(1);
        let limit = if limit == 0 {
            Self::DEFAULT_LIMIT
        } else {
            limit.min(Self::MAX_LIMIT)
        };
        Self { page, limit }
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for ArticlePage {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_LIMIT)
    }
}
