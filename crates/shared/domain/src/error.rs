//! Domain-level errors.
//!
//! These errors represent rule violations detected before any storage call.
//! They are independent of infrastructure concerns (HTTP, database).

use thiserror::Error;

/// Domain-specific errors for request rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The request body carried no fields at all
    #[error("{0}")]
    MissingData(&'static str),

    /// The request body lacks the entity's mandatory field
    #[error("{0}")]
    MissingField(&'static str),
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
