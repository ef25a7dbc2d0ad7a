//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `RISKEVAL_` prefix and nested values use double
//! underscores as separators.
//!
//! Only ambient concerns are configurable: logging and terminal UI
//! behavior. The question catalog is compiled into the binary and takes
//! no external configuration.
//!
//! # Example
//!
//! ```no_run
//! use riskeval::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod logging;
mod ui;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use ui::UiConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment
/// variables; every field has a working default, so an empty environment
/// is valid.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Logging configuration (level, format)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Terminal UI configuration (color, welcome screen)
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `RISKEVAL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `RISKEVAL__LOGGING__LEVEL=debug` -> `logging.level = "debug"`
    /// - `RISKEVAL__UI__SHOW_WELCOME=false` -> `ui.show_welcome = false`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("RISKEVAL")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = AppConfig::default();
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert!(config.ui.color);
        assert!(config.ui.show_welcome);
    }

    #[test]
    fn deserializes_from_nested_document() {
        let json = r#"{
            "logging": { "level": "debug", "json": true },
            "ui": { "color": false, "show_welcome": false }
        }"#;

        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert!(!config.ui.color);
        assert!(!config.ui.show_welcome);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_level_fails_validation() {
        let json = r#"{ "logging": { "level": "shout" } }"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }
}
