//! Unified error types for Balance Core.

use balance_types::{ConfigError, TypedError};
use serde::Serialize;
use thiserror::Error;

/// Error type for operations that touch the filesystem.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// File system I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config was readable but invalid, or a selector rejected it.
    #[error("{0}")]
    Typed(#[from] TypedError),

    /// No platform config directory could be resolved.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Typed(e.into())
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

/// Result type alias for Balance Core operations.
pub type AppResult<T> = Result<T, AppError>;
