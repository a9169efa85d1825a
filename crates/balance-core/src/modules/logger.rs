//! Tracing subscriber setup.

use std::sync::OnceLock;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGER_INSTALLED: OnceLock<()> = OnceLock::new();

/// Install a `fmt` subscriber filtered at `level`.
///
/// `RUST_LOG`, when set, overrides `level`. Only the first call installs
/// anything; later calls (or a subscriber set elsewhere) are left alone.
pub fn init_logger(level: &str) {
    LOGGER_INSTALLED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let installed = fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok();

        if installed {
            info!(level, "Logger initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_is_idempotent() {
        init_logger("debug");
        init_logger("not a valid directive ===");
        tracing::debug!("still logging");
    }
}
