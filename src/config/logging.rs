//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log filter directive (e.g. "info", "riskeval=debug")
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit log lines as JSON instead of human-readable text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Validate the logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.level.is_empty() {
            return Err(ValidationError::EmptyLogLevel);
        }
        // Bare level names must be recognized; richer filter directives
        // (with `=` or `,`) are passed through to the env-filter parser.
        if !self.level.contains('=') && !self.level.contains(',') {
            let known = ["trace", "debug", "info", "warn", "error", "off"];
            if !known.contains(&self.level.to_lowercase().as_str()) {
                return Err(ValidationError::UnknownLogLevel(self.level.clone()));
            }
        }
        Ok(())
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_info() {
        let cfg = LoggingConfig::default();
        assert_eq!(cfg.level, "info");
        assert!(!cfg.json);
    }

    #[test]
    fn validate_accepts_known_levels() {
        for level in ["trace", "debug", "info", "warn", "error", "off"] {
            let cfg = LoggingConfig {
                level: level.to_string(),
                json: false,
            };
            assert!(cfg.validate().is_ok(), "level {} should validate", level);
        }
    }

    #[test]
    fn validate_accepts_filter_directives() {
        let cfg = LoggingConfig {
            level: "riskeval=debug,info".to_string(),
            json: false,
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_level() {
        let cfg = LoggingConfig {
            level: String::new(),
            json: false,
        };
        assert!(matches!(cfg.validate(), Err(ValidationError::EmptyLogLevel)));
    }

    #[test]
    fn validate_rejects_unknown_bare_level() {
        let cfg = LoggingConfig {
            level: "loud".to_string(),
            json: false,
        };
        assert!(matches!(
            cfg.validate(),
            Err(ValidationError::UnknownLogLevel(_))
        ));
    }
}
