//! Typed error definitions for Balance.
//!
//! Errors are serializable via serde, displayable via `Display`, and matchable
//! by variant. Each domain lives in its own module.

mod balance;
mod config;

pub use balance::BalanceError;
pub use config::ConfigError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type that wraps all domain-specific errors.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum TypedError {
    /// Wraps a selector operation error
    #[error("Balance error: {0}")]
    Balance(#[from] BalanceError),

    /// Wraps a configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Standard Result type using TypedError.
pub type Result<T> = std::result::Result<T, TypedError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = TypedError::Balance(BalanceError::NotFound { id: "backend-7".to_string() });

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("Balance"));
        assert!(json.contains("backend-7"));

        let deserialized: TypedError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_error_display() {
        let err: TypedError = ConfigError::DuplicateId { id: "a".to_string() }.into();

        let msg = format!("{}", err);
        assert!(msg.starts_with("Config error"));
        assert!(msg.contains("'a'"));
    }
}
