use balance_types::EntrySnapshot;

/// One weighted participant in the selection pool.
///
/// `weight` is fixed at insertion; only the pick pass touches `current`.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) id: String,
    pub(crate) weight: u32,
    pub(crate) current: i64,
}

impl Entry {
    pub(crate) fn new(id: String, weight: u32) -> Self {
        Self { id, weight, current: 0 }
    }

    pub(crate) fn snapshot(&self) -> EntrySnapshot {
        EntrySnapshot { id: self.id.clone(), weight: self.weight, current: self.current }
    }
}

/// Position of `id` in `entries`, by linear scan.
pub(crate) fn position(entries: &[Entry], id: &str) -> Option<usize> {
    entries.iter().position(|e| e.id == id)
}

/// Sum of all weights, widened so large pools cannot overflow.
pub(crate) fn total_weight(entries: &[Entry]) -> u64 {
    entries.iter().map(|e| u64::from(e.weight)).sum()
}
