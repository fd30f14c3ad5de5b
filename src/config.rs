//! Configuration types for deal-valuator

use serde::Deserialize;

use crate::telemetry::LogFormat;
use crate::valuation::InputParameters;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    /// Starting deal terms; missing keys fall back to the built-in defaults
    #[serde(default)]
    pub deal: InputParameters,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Record valuation counters and gauges through the `metrics` facade
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
            metrics_enabled: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::valuation::{PaymentSchedule, ViewershipRange};
    use std::io::Write;

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            [telemetry]
            log_level = "debug"
            log_format = "json"

            [deal]
            license_per_episode = 60000.0
            contract_length_years = 3
            include_add_on = true
            add_on_price_per_episode = 12000.0
            viewership_range = "60-70"
            revenue_per_ten_million_viewers = 1200000.0

            [deal.payment_schedule]
            upfront = 70.0
            six_month = 30.0
            twelve_month = 0.0
            eighteen_month = 0.0
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.telemetry.log_level, "debug");
        assert_eq!(config.telemetry.log_format, LogFormat::Json);
        assert_eq!(config.deal.license_per_episode, 60_000.0);
        assert_eq!(config.deal.contract_length_years, 3);
        assert!(config.deal.include_add_on);
        assert_eq!(config.deal.viewership_range, ViewershipRange::From60To70);
        assert_eq!(
            config.deal.payment_schedule,
            PaymentSchedule::new(70.0, 30.0, 0.0, 0.0)
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
        assert!(config.telemetry.metrics_enabled);
        assert_eq!(config.deal, InputParameters::default());
    }

    #[test]
    fn test_metrics_disabled() {
        let toml = r#"
            [telemetry]
            metrics_enabled = false
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.telemetry.metrics_enabled);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn test_partial_deal_section() {
        let toml = r#"
            [deal]
            license_per_episode = 38000.0
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.deal.license_per_episode, 38_000.0);
        assert_eq!(config.deal.num_episodes, 100);
        assert_eq!(config.deal.batna_value, 2_500_000.0);
    }

    #[test]
    fn test_unknown_viewership_in_config() {
        let toml = r#"
            [deal]
            viewership_range = "70-80"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.deal.viewership_range, ViewershipRange::From50To60);
    }

    #[test]
    fn test_invalid_log_format() {
        let toml = r#"
            [telemetry]
            log_format = "xml"
        "#;

        assert!(toml::from_str::<Config>(toml).is_err());
    }

    #[test]
    fn test_config_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[deal]\ncontract_length_years = 1").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.deal.contract_length_years, 1);
    }

    #[test]
    fn test_config_load_nonexistent() {
        let result = Config::load("/nonexistent/path/config.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_bundled_example_parses() {
        let config: Config = toml::from_str(include_str!("../config.toml.example")).unwrap();
        assert!(config.telemetry.metrics_enabled);
        assert_eq!(config.deal, InputParameters::default());
    }
}
