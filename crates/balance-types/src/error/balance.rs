//! Selector operation errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Precondition violations reported by the selector.
///
/// Both leave the selector unchanged. Picking never fails: an empty
/// selector yields `None` instead of an error.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum BalanceError {
    /// An entry with this id is already present
    #[error("Entry '{id}' already added")]
    DuplicateId { id: String },

    /// No live entry has this id
    #[error("Entry '{id}' not found")]
    NotFound { id: String },
}

impl BalanceError {
    /// The id the failed operation referred to.
    pub fn id(&self) -> &str {
        match self {
            Self::DuplicateId { id } | Self::NotFound { id } => id,
        }
    }
}
