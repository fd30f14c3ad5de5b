//! Telemetry module
//!
//! Structured logging and valuation metrics

mod logging;
mod metrics;

pub use logging::{init_logging, LogFormat};
pub use metrics::{
    increment, is_enabled as metrics_enabled, record_evaluation, set_enabled as set_metrics_enabled,
    set_gauge, CounterMetric, GaugeMetric,
};

use crate::config::TelemetryConfig;

/// Returned by [`init_telemetry`]; hold it for the life of the process
pub struct TelemetryGuard {
    _priv: (),
}

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<TelemetryGuard> {
    init_logging(&config.log_level, config.log_format)?;
    set_metrics_enabled(config.metrics_enabled);
    tracing::debug!(metrics_enabled = config.metrics_enabled, "Telemetry initialized");

    Ok(TelemetryGuard { _priv: () })
}
