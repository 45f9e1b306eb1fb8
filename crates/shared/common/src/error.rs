//! Unified error handling for the HTTP layer.
//!
//! Every failure leaves the service as `{"message": "..."}` with one of three
//! status classes: 400 for rejected input, 404 for a missing target and 500
//! for anything the store or the server got wrong. Server-side details are
//! logged, never returned.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use thiserror::Error;

use crate::response::MessageResponse;

/// Message used for storage failures that were not given an operation context
pub const DEFAULT_DATABASE_MESSAGE: &str = "A database error occurred";

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Client errors
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    // Storage errors
    #[cfg(feature = "database")]
    #[error("{message}")]
    Database {
        /// Fixed client-facing text for the failed operation
        message: &'static str,
        #[source]
        source: sea_orm::DbErr,
    },
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            #[cfg(feature = "database")]
            AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg.clone(),

            #[cfg(feature = "database")]
            AppError::Database { message, source } => {
                tracing::error!(error = ?source, "{}", message);
                (*message).to_string()
            }
        }
    }

    /// Replace the client-facing text of a storage error with the message of
    /// the operation that failed. Client errors pass through untouched.
    pub fn context(self, message: &'static str) -> Self {
        match self {
            #[cfg(feature = "database")]
            AppError::Database { source, .. } => AppError::Database { message, source },
            other => other,
        }
    }
}

// =============================================================================
// HTTP Response (Axum)
// =============================================================================

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = MessageResponse::new(self.user_message());

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Conversions
// =============================================================================

#[cfg(feature = "database")]
impl From<sea_orm::DbErr> for AppError {
    fn from(source: sea_orm::DbErr) -> Self {
        AppError::Database {
            message: DEFAULT_DATABASE_MESSAGE,
            source,
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, message: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, message: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::not_found(message))
    }
}

/// Extension trait attaching an operation message to storage failures
pub trait ResultExt<T> {
    fn context(self, message: &'static str) -> AppResult<T>;
}

impl<T> ResultExt<T> for AppResult<T> {
    fn context(self, message: &'static str) -> AppResult<T> {
        self.map_err(|e| e.context(message))
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }
}
