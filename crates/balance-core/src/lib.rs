//! # Balance Core
//!
//! Smooth weighted round-robin selection for request and connection
//! distributors.
//!
//! ```text
//! balance-core/src/
//! ├── balance/        # Balance: entries, pick pass, locking
//! ├── modules/
//! │   ├── config.rs   # JSON config load/save
//! │   └── logger.rs   # tracing subscriber setup
//! ├── metrics.rs      # Prometheus counters and gauges
//! └── error.rs        # AppError for filesystem-facing operations
//! ```
//!
//! ```
//! use balance_core::Balance;
//!
//! let balance = Balance::new();
//! balance.add("a", 5).unwrap();
//! balance.add("b", 3).unwrap();
//! balance.add("c", 2).unwrap();
//!
//! let picks: Vec<String> = (0..10).filter_map(|_| balance.get()).collect();
//! assert_eq!(picks.join(" "), "a b c a a b a c b a");
//! ```

#![allow(
    clippy::significant_drop_tightening,
    reason = "Lock guards span the whole O(n) pick pass"
)]
// Test-only lints: allow panic!, unwrap, etc. in test code
#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::indexing_slicing))]

pub mod balance;
pub mod error;
pub mod metrics;
pub mod modules;

// Re-export commonly used types
pub use balance::Balance;
pub use balance_types::{BalanceConfig, BalanceError, BalanceStats, EntryConfig, EntrySnapshot};
pub use error::{AppError, AppResult};
