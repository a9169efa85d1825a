use balance_types::{BalanceConfig, ConfigError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

const CONFIG_DIR: &str = "balance";
const CONFIG_FILE: &str = "balance.json";

/// Default location: `<platform config dir>/balance/balance.json`.
pub fn default_config_path() -> AppResult<PathBuf> {
    let base = dirs::config_dir()
        .ok_or_else(|| AppError::Config("Failed to resolve config directory".to_string()))?;
    Ok(base.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load and validate a config file.
///
/// A missing file is not an error and yields an empty config.
pub fn load_config(path: &Path) -> AppResult<BalanceConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "Config file missing, using empty config");
        return Ok(BalanceConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: BalanceConfig =
        serde_json::from_str(&content).map_err(|e| ConfigError::from_json_error(&e))?;
    config.validate()?;

    info!(path = %path.display(), entries = config.entries.len(), "Loaded config");
    Ok(config)
}

/// Validate, then write the config atomically (temp file + rename).
pub fn save_config(path: &Path, config: &BalanceConfig) -> AppResult<()> {
    config.validate()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::from_io_error(&e))?;
    }

    let temp_path = path.with_extension("json.tmp");
    let content = serde_json::to_string_pretty(config)?;

    fs::write(&temp_path, content).map_err(|e| ConfigError::from_io_error(&e))?;
    fs::rename(&temp_path, path).map_err(|e| ConfigError::from_io_error(&e))?;

    info!(path = %path.display(), entries = config.entries.len(), "Saved config");
    Ok(())
}

/// Load, mutate, save.
pub fn update_config<F>(path: &Path, updater: F) -> AppResult<BalanceConfig>
where
    F: FnOnce(&mut BalanceConfig),
{
    let mut config = load_config(path)?;
    updater(&mut config);
    save_config(path, &config)?;
    Ok(config)
}
