//! Prometheus metrics for the selector.
//!
//! - `balance_picks_total{id}` - Counter of picks per entry
//! - `balance_empty_picks_total` - Counter of picks against an empty pool
//! - `balance_entries` - Gauge of live entries
//! - `balance_total_weight` - Gauge of the summed weight of live entries
//!
//! Recording goes through the `metrics` facade and is a no-op until
//! [`init_metrics`] installs the Prometheus recorder.

use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

/// Global Prometheus handle for rendering metrics
static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder once and return its handle.
///
/// Later calls return the handle from the first successful call. Fails if
/// another global recorder is already installed.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    if let Some(handle) = PROMETHEUS_HANDLE.get() {
        return Ok(handle.clone());
    }

    let handle = PrometheusBuilder::new().install_recorder()?;

    describe_counter!("balance_picks_total", "Total picks served, by entry id");
    describe_counter!("balance_empty_picks_total", "Total picks against an empty pool");
    describe_gauge!("balance_entries", "Number of live entries");
    describe_gauge!("balance_total_weight", "Sum of live entry weights");

    Ok(PROMETHEUS_HANDLE.get_or_init(|| handle).clone())
}

/// Get the Prometheus handle for rendering metrics.
/// Returns None if metrics have not been initialized.
pub fn get_prometheus_handle() -> Option<&'static PrometheusHandle> {
    PROMETHEUS_HANDLE.get()
}

pub fn record_pick(id: &str) {
    counter!("balance_picks_total", "id" => id.to_string()).increment(1);
}

pub fn record_empty_pick() {
    counter!("balance_empty_picks_total").increment(1);
}

pub fn update_pool_gauges(entries: usize, total_weight: u64) {
    gauge!("balance_entries").set(entries as f64);
    gauge!("balance_total_weight").set(total_weight as f64);
}

/// Render all metrics in Prometheus text format.
pub fn render_metrics() -> String {
    if let Some(handle) = get_prometheus_handle() {
        handle.render()
    } else {
        String::from("# Metrics not initialized\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_pick("a");
        record_empty_pick();
        update_pool_gauges(3, 10);
    }

    #[test]
    fn test_render_before_init() {
        if get_prometheus_handle().is_none() {
            assert_eq!(render_metrics(), "# Metrics not initialized\n");
        }
    }
}
