//! Application configuration
//!
//! This module provides centralized configuration management using the `config` crate.
//! Configuration can be loaded from environment variables and config files.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use validator::Validate;

use crate::models::{ExportFormat, RateTable};
use crate::AppResult;

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub export: ExportConfig,

    /// Rate table override; the standard rates apply when absent
    #[serde(default)]
    pub rates: Option<RateTable>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Default log level when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON log lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Export configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    /// Directory export files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Format used when none is requested
    #[serde(default)]
    pub default_format: ExportFormat,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            default_format: ExportFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional config file
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = Self::builder_with_defaults()?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables with MSP_ prefix
            .add_source(
                Environment::with_prefix("MSP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let config = Self::builder_with_defaults()?
            .add_source(File::with_name(path))
            .add_source(
                Environment::with_prefix("MSP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    fn builder_with_defaults(
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .set_default("export.output_dir", ".")?
            .set_default("export.default_format", "csv")
    }

    /// Validate configured values
    pub fn validate(&self) -> AppResult<()> {
        if let Some(rates) = &self.rates {
            rates.validate()?;
        }
        Ok(())
    }

    /// Rate table in effect: the configured override or the standard rates
    pub fn rate_table(&self) -> RateTable {
        self.rates.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceTier;
    use rust_decimal_macros::dec;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert_eq!(config.export.default_format, ExportFormat::Csv);
        assert_eq!(config.rate_table(), RateTable::standard());
    }

    #[test]
    fn test_from_file_with_sections() {
        let file = write_config(
            r#"
[logging]
level = "debug"
json = true

[export]
output_dir = "/tmp/exports"
default_format = "report"
"#,
        );

        let config = AppConfig::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert_eq!(config.export.output_dir, PathBuf::from("/tmp/exports"));
        assert_eq!(config.export.default_format, ExportFormat::Report);
        assert!(config.rates.is_none());
    }

    #[test]
    fn test_rate_override_from_file() {
        let file = write_config(
            r#"
[rates.basic]
per_user = 80
workstation = 40
server = 150
size_multiplier = 0.75

[rates.comprehensive]
per_user = 150
workstation = 65
server = 210
size_multiplier = 1.0

[rates.premium]
per_user = 220
workstation = 85
server = 275
size_multiplier = 1.4

[rates.business_size]
small = 2500
medium = 6000
large = 16250
"#,
        );

        let config = AppConfig::from_file(file.path().to_str().unwrap()).unwrap();
        assert!(config.validate().is_ok());
        let rates = config.rate_table();
        assert_eq!(rates.tier(ServiceTier::Basic).per_user, dec!(80));
        assert_eq!(rates.tier(ServiceTier::Basic).size_multiplier, dec!(0.75));
        assert_eq!(rates.tier(ServiceTier::Premium).per_user, dec!(220));
    }

    #[test]
    fn test_negative_rate_override_fails_validation() {
        let mut rates = RateTable::standard();
        rates.basic.per_user = dec!(-10);
        let config = AppConfig {
            rates: Some(rates),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "validation_error");
    }

    #[test]
    fn test_oversized_rate_override_fails_validation() {
        let file = write_config(
            r#"
[rates.basic]
per_user = 75
workstation = 40
server = 150
size_multiplier = 0.7

[rates.comprehensive]
per_user = 1e20
workstation = 65
server = 210
size_multiplier = 1.0

[rates.premium]
per_user = 200
workstation = 85
server = 275
size_multiplier = 1.4

[rates.business_size]
small = 2500
medium = 6000
large = 16250
"#,
        );

        let config = AppConfig::from_file(file.path().to_str().unwrap()).unwrap();
        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "validation_error");
    }
}
