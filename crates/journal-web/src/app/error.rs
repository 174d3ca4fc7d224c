//! Request-level errors.
//!
//! Anything reaching `AppError` fails only the current request: it is
//! logged and answered with a bare 500.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use journal_core::JournalError;

#[derive(Debug)]
pub enum AppError {
    /// Store could not be opened or a query failed
    Storage(JournalError),

    /// Session store failure
    Session(tower_sessions::session::Error),

    /// Blocking task panicked or was cancelled
    Task(tokio::task::JoinError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Storage(err) => write!(f, "{}", err),
            AppError::Session(err) => write!(f, "Session error: {}", err),
            AppError::Task(err) => write!(f, "Background task failed: {}", err),
        }
    }
}

impl std::error::Error for AppError {}

impl From<JournalError> for AppError {
    fn from(err: JournalError) -> Self {
        AppError::Storage(err)
    }
}

impl From<tower_sessions::session::Error> for AppError {
    fn from(err: tower_sessions::session::Error) -> Self {
        AppError::Session(err)
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::Task(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
