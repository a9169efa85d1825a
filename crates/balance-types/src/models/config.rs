//! Selector configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::ConfigError;

/// One weighted entry as it appears in a config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryConfig {
    /// Identifier handed back by picks
    pub id: String,
    /// Relative share of picks; zero keeps the entry listed but unpicked
    #[serde(default = "default_weight")]
    pub weight: u32,
}

fn default_weight() -> u32 {
    1
}

impl EntryConfig {
    pub fn new(id: impl Into<String>, weight: u32) -> Self {
        Self { id: id.into(), weight }
    }
}

/// Full selector configuration: the entries to insert, in order.
///
/// Order matters: earlier entries win ties during a pick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BalanceConfig {
    #[serde(default)]
    pub entries: Vec<EntryConfig>,
}

impl BalanceConfig {
    /// Sample configuration used by `balance config init`.
    pub fn sample() -> Self {
        Self {
            entries: vec![
                EntryConfig::new("a", 5),
                EntryConfig::new("b", 3),
                EntryConfig::new("c", 2),
            ],
        }
    }

    /// Check ids before a selector is built from this config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.id.trim().is_empty() {
                return Err(ConfigError::EmptyId { index });
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(ConfigError::DuplicateId { id: entry.id.clone() });
            }
        }
        Ok(())
    }

    /// Sum of all configured weights.
    pub fn total_weight(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.weight)).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_weight_defaults_to_one() {
        let config: BalanceConfig =
            serde_json::from_str(r#"{"entries":[{"id":"a"},{"id":"b","weight":0}]}"#).unwrap();
        assert_eq!(config.entries[0].weight, 1);
        assert_eq!(config.entries[1].weight, 0);
    }

    #[test]
    fn test_empty_document_is_empty_config() {
        let config: BalanceConfig = serde_json::from_str("{}").unwrap();
        assert!(config.entries.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let mut config = BalanceConfig::sample();
        config.entries.push(EntryConfig::new("b", 9));
        assert_eq!(config.validate(), Err(ConfigError::DuplicateId { id: "b".to_string() }));
    }

    #[test]
    fn test_validate_rejects_blank_id() {
        let config = BalanceConfig {
            entries: vec![EntryConfig::new("a", 1), EntryConfig::new("  ", 1)],
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyId { index: 1 }));
    }

    #[test]
    fn test_sample_total_weight() {
        assert_eq!(BalanceConfig::sample().total_weight(), 10);
    }
}
