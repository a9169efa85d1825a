//! Read-only views of selector state.

use serde::{Deserialize, Serialize};

/// Point-in-time copy of one entry, accumulator included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntrySnapshot {
    pub id: String,
    pub weight: u32,
    /// Running accumulator at the time of the snapshot
    pub current: i64,
}

/// Selector summary for logging and the CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BalanceStats {
    /// Number of live entries
    pub entries: usize,
    /// Sum of live entry weights
    pub total_weight: u64,
    /// Picks served since construction, empty picks excluded
    pub total_picks: u64,
    /// Id returned by the most recent pick, if that entry is still live
    pub last_picked: Option<String>,
}
