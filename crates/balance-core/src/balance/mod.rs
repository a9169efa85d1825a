//! Smooth weighted round-robin selector.
//!
//! [`Balance`] owns an ordered list of weighted entries and hands out their
//! ids in proportion to weight, interleaved rather than in bursts. Every
//! operation runs under one `parking_lot::RwLock`:
//!
//! - `add`, `remove`, `get`, `clear`, `reset` take the write side
//!   (`get` mutates every accumulator)
//! - `item_ids`, `snapshot`, `stats` and the other inspectors take the read side
//!
//! Share it across threads behind an `Arc`.

use balance_types::{BalanceConfig, BalanceError, BalanceStats, EntrySnapshot, TypedError};
use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use crate::metrics;

mod entry;
mod pick;

use entry::Entry;

#[derive(Debug, Default)]
struct Inner {
    entries: Vec<Entry>,
    /// Index of the entry returned by the last pick
    last_picked: Option<usize>,
    total_picks: u64,
}

impl Inner {
    fn forget(&mut self, removed: usize) {
        self.last_picked = match self.last_picked {
            Some(idx) if idx == removed => None,
            Some(idx) if idx > removed => Some(idx - 1),
            other => other,
        };
    }
}

/// A smooth weighted round-robin load balancer.
#[derive(Debug, Default)]
pub struct Balance {
    inner: RwLock<Inner>,
}

impl Balance {
    /// Create an empty balancer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a balancer from `(id, weight)` pairs, in order.
    ///
    /// Fails on the first repeated id.
    pub fn with_entries<I, S>(entries: I) -> Result<Self, BalanceError>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let balance = Self::new();
        for (id, weight) in entries {
            balance.add(id, weight)?;
        }
        Ok(balance)
    }

    /// Build a balancer from a validated config.
    pub fn from_config(config: &BalanceConfig) -> Result<Self, TypedError> {
        config.validate()?;
        let balance = Self::with_entries(config.entries.iter().map(|e| (e.id.clone(), e.weight)))?;
        debug!(
            entries = config.entries.len(),
            total_weight = config.total_weight(),
            "Balance built from config"
        );
        Ok(balance)
    }

    /// Add an entry at the end of the pool with a fresh accumulator.
    pub fn add(&self, id: impl Into<String>, weight: u32) -> Result<(), BalanceError> {
        let id = id.into();
        let mut inner = self.inner.write();

        if entry::position(&inner.entries, &id).is_some() {
            warn!(id = %id, "Rejected duplicate entry");
            return Err(BalanceError::DuplicateId { id });
        }

        debug!(id = %id, weight, entries = inner.entries.len() + 1, "Entry added");
        inner.entries.push(Entry::new(id, weight));
        metrics::update_pool_gauges(inner.entries.len(), entry::total_weight(&inner.entries));
        Ok(())
    }

    /// Remove an entry; the rest keep their order and accumulators.
    pub fn remove(&self, id: &str) -> Result<(), BalanceError> {
        let mut inner = self.inner.write();

        let Some(idx) = entry::position(&inner.entries, id) else {
            warn!(id = %id, "Cannot remove unknown entry");
            return Err(BalanceError::NotFound { id: id.to_string() });
        };

        inner.entries.remove(idx);
        inner.forget(idx);
        debug!(id = %id, entries = inner.entries.len(), "Entry removed");
        metrics::update_pool_gauges(inner.entries.len(), entry::total_weight(&inner.entries));
        Ok(())
    }

    /// Pick the next id. `None` when the pool is empty.
    pub fn get(&self) -> Option<String> {
        let picked = {
            let mut inner = self.inner.write();
            match pick::advance(&mut inner.entries) {
                Some(idx) => {
                    inner.last_picked = Some(idx);
                    inner.total_picks += 1;
                    Some(inner.entries[idx].id.clone())
                },
                None => None,
            }
        };

        match &picked {
            Some(id) => {
                trace!(id = %id, "Picked entry");
                metrics::record_pick(id);
            },
            None => metrics::record_empty_pick(),
        }
        picked
    }

    /// Ids of all live entries in pick order.
    pub fn item_ids(&self) -> Vec<String> {
        self.inner.read().entries.iter().map(|e| e.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        entry::position(&self.inner.read().entries, id).is_some()
    }

    /// Weight the entry was added with.
    pub fn weight_of(&self, id: &str) -> Option<u32> {
        let inner = self.inner.read();
        entry::position(&inner.entries, id).map(|idx| inner.entries[idx].weight)
    }

    /// Sum of the weights of all live entries.
    pub fn total_weight(&self) -> u64 {
        entry::total_weight(&self.inner.read().entries)
    }

    /// Id returned by the most recent pick, while that entry is still live.
    pub fn last_picked(&self) -> Option<String> {
        let inner = self.inner.read();
        inner.last_picked.map(|idx| inner.entries[idx].id.clone())
    }

    /// Copy of every entry including its accumulator.
    pub fn snapshot(&self) -> Vec<EntrySnapshot> {
        self.inner.read().entries.iter().map(Entry::snapshot).collect()
    }

    pub fn stats(&self) -> BalanceStats {
        let inner = self.inner.read();
        BalanceStats {
            entries: inner.entries.len(),
            total_weight: entry::total_weight(&inner.entries),
            total_picks: inner.total_picks,
            last_picked: inner.last_picked.map(|idx| inner.entries[idx].id.clone()),
        }
    }

    /// Zero every accumulator, keeping membership and order.
    pub fn reset(&self) {
        let mut inner = self.inner.write();
        for entry in &mut inner.entries {
            entry.current = 0;
        }
        inner.last_picked = None;
        debug!(entries = inner.entries.len(), "Accumulators reset");
    }

    /// Remove every entry.
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        let removed = inner.entries.len();
        inner.entries.clear();
        inner.last_picked = None;
        debug!(removed, "Balance cleared");
        metrics::update_pool_gauges(0, 0);
    }
}

#[cfg(test)]
mod tests;
