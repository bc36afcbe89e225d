//! Error types for Bookshelf Core

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Top-level error type for all store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid book: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

impl From<Vec<ValidationError>> for StoreError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Validation(errors)
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors raised by a key-value storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Backend error: {0}")]
    BackendError(String),
}

/// Errors raised by the catalog backend a command runs against
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    #[error("{0}")]
    Failed(String),
}

/// Problems found in a book draft before it reaches the store
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Author is required")]
    MissingAuthor,

    #[error("Genre is required")]
    MissingGenre,

    #[error("Year must be at least {min}, got {year}")]
    YearTooEarly { year: i32, min: i32 },

    #[error("Year cannot be after {max}, got {year}")]
    YearInFuture { year: i32, max: i32 },

    #[error("Pages must be at least 1")]
    NoPages,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_every_error() {
        let err = StoreError::from(vec![ValidationError::MissingTitle, ValidationError::NoPages]);
        assert_eq!(
            err.to_string(),
            "Invalid book: Title is required; Pages must be at least 1"
        );
    }

    #[test]
    fn test_year_message_names_the_inclusive_bound() {
        let err = ValidationError::YearTooEarly { year: 999, min: 1000 };
        assert_eq!(err.to_string(), "Year must be at least 1000, got 999");
    }

    #[test]
    fn test_backend_error_is_transparent() {
        let err = StoreError::from(BackendError::Failed("timeout".to_string()));
        assert_eq!(err.to_string(), "Backend error: timeout");
    }
}
