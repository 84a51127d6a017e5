// src/application/validation.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::errors::{DomainError, DomainResult, FieldViolation};

/// Collects every field violation of a request so clients see all problems
/// at once instead of the first one only.
#[derive(Debug, Default)]
pub struct FieldViolations(Vec<FieldViolation>);

impl FieldViolations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, property: &str, message: impl Into<String>) {
        self.0.push(FieldViolation::new(property, message));
    }

    /// Records a validation failure against `property` and yields the value
    /// otherwise. Non-validation errors are propagated.
    ///
    /// # Errors
    ///
    /// Returns `result`'s error unchanged when it is not a validation error.
    pub fn check<T>(&mut self, property: &str, result: DomainResult<T>) -> ApplicationResult<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(DomainError::Validation(message)) => {
                self.push(property, message);
                Ok(None)
            }
            Err(other) => Err(other.into()),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// # Errors
    ///
    /// Returns [`ApplicationError::InvalidFields`] when any violation was recorded.
    pub fn into_result(self) -> ApplicationResult<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ApplicationError::InvalidFields(self.0))
        }
    }
}
