//! Domain models shared across the Balance workspace.

mod config;
mod stats;

pub use config::{BalanceConfig, EntryConfig};
pub use stats::{BalanceStats, EntrySnapshot};
