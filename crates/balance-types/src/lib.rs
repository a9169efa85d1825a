//! # Balance Types
//!
//! Error definitions and data models shared by the Balance workspace.
//!
//! - **`error`** - Typed error hierarchy for selector operations and configuration
//! - **`models`** - Config models (`BalanceConfig`, `EntryConfig`) and read-only
//!   views of selector state (`EntrySnapshot`, `BalanceStats`)
//!
//! ## Architecture Role
//!
//! ```text
//!            balance-types (this crate)
//!                    │
//!                    ▼
//!              balance-core
//!                    │
//!                    ▼
//!              balance-cli
//! ```
//!
//! All types are serializable via serde, `Clone`, and `PartialEq` for tests.

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{BalanceError, ConfigError, Result, TypedError};

// Re-export core model types
pub use models::{BalanceConfig, BalanceStats, EntryConfig, EntrySnapshot};
