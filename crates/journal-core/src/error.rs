//! Error types for Journal core operations.
//!
//! Errors are descriptive at the core level; the web layer decides which
//! ones are recoverable (re-render a form) and which fail the request.

use thiserror::Error;

/// Result type alias for Journal operations.
pub type Result<T> = std::result::Result<T, JournalError>;

/// Core error type for Journal operations.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Data validation error (e.g. an empty title)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl JournalError {
    /// Whether this error is a validation failure the caller should recover from.
    pub fn is_validation(&self) -> bool {
        matches!(self, JournalError::Validation(_))
    }
}

impl From<std::io::Error> for JournalError {
    fn from(err: std::io::Error) -> Self {
        JournalError::Storage(err.to_string())
    }
}

impl From<rusqlite::Error> for JournalError {
    fn from(err: rusqlite::Error) -> Self {
        JournalError::Storage(err.to_string())
    }
}
