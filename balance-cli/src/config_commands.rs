use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use balance_core::modules::config as core_config;
use balance_core::{BalanceConfig, EntryConfig};

pub fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    core_config::save_config(path, &BalanceConfig::sample())
        .with_context(|| format!("writing {}", path.display()))?;
    println!("{} Sample config written to {}", "✓".green(), path.display());
    Ok(())
}

pub fn show_config(path: &Path, json: bool) -> Result<()> {
    let config = core_config::load_config(path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{} {}", "Config:".cyan().bold(), path.display());
    if config.entries.is_empty() {
        println!("  {}", "No entries.".yellow());
        return Ok(());
    }
    for entry in &config.entries {
        println!("  {:<20} weight {}", entry.id, entry.weight);
    }
    println!("  Total weight: {}", config.total_weight());
    Ok(())
}

pub fn add_entry(path: &Path, id: &str, weight: u32) -> Result<()> {
    let config = core_config::load_config(path)?;
    if config.entries.iter().any(|e| e.id == id) {
        anyhow::bail!("Entry '{}' already exists in {}", id, path.display());
    }

    core_config::update_config(path, |config| {
        config.entries.push(EntryConfig::new(id, weight));
    })?;

    println!("{} Added {} (weight {})", "✓".green(), id, weight);
    Ok(())
}

pub fn remove_entry(path: &Path, id: &str) -> Result<()> {
    let config = core_config::load_config(path)?;
    if !config.entries.iter().any(|e| e.id == id) {
        anyhow::bail!("Entry '{}' not found in {}", id, path.display());
    }

    core_config::update_config(path, |config| {
        config.entries.retain(|e| e.id != id);
    })?;

    println!("{} Removed {}", "✓".green(), id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("balance.json");

        init_config(&path, false).unwrap();
        assert!(init_config(&path, false).is_err());
        init_config(&path, true).unwrap();
    }

    #[test]
    fn test_add_and_remove_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("balance.json");

        add_entry(&path, "x", 3).unwrap();
        add_entry(&path, "y", 2).unwrap();
        assert!(add_entry(&path, "x", 9).is_err());

        remove_entry(&path, "x").unwrap();
        assert!(remove_entry(&path, "x").is_err());

        let config = core_config::load_config(&path).unwrap();
        assert_eq!(config.entries, vec![EntryConfig::new("y", 2)]);
    }
}
