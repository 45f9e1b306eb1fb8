//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified error handling with HTTP status mapping
//! - Configuration loaded from the environment
//! - The JSON message body used by every non-entity response

pub mod config;
pub mod error;
pub mod response;

pub use config::AppConfig;
pub use error::{AppError, AppResult, OptionExt, ResultExt};
pub use response::MessageResponse;
