// src/application/error.rs
use crate::domain::errors::{DomainError, FieldViolation};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("invalid input: {} violation(s)", .0.len())]
    InvalidFields(Vec<FieldViolation>),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    #[must_use]
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    #[must_use]
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    #[must_use]
    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    #[must_use]
    pub fn field_violations(&self) -> Option<&[FieldViolation]> {
        match self {
            Self::InvalidFields(violations) => Some(violations),
            _ => None,
        }
    }
}

pub const ARTICLE_NOT_FOUND: &str = "No article found with that id.";
