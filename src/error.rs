//! Error types for the store and the HTTP layer.
//!
//! Only two failures are ever visible to clients as such: `401 Not authorized`
//! and `404 page not found`. Everything else is logged and reported as a bare
//! `500` so internal details never leak into responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures raised by the slug store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Every candidate drawn during allocation was already taken.
    ///
    /// Indicates the configured slug length is too small for the number of
    /// stored mappings.
    #[error("tried generating {attempts} slugs of length {length} without finding a free one")]
    SlugSpaceExhausted { attempts: usize, length: usize },

    /// Another writer (usually a running server) owns the storage file.
    #[error("storage file {} is locked by another process", path.display())]
    Locked { path: std::path::PathBuf },

    /// The storage file exists but could not be read.
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Request-level error returned by handlers and services.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not authorized")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Not authorized").into_response(),
            AppError::NotFound => (StatusCode::NOT_FOUND, "404 page not found").into_response(),
            AppError::Internal { message } => {
                tracing::error!(error = %message, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
