//! Logging configuration and subscriber setup

use std::str::FromStr;

use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use super::error::{ConfigError, ValidationError};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Level (`info`) or filter directive (`demand_tracker=debug,info`).
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
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

fn default_level() -> String {
    "info".to_string()
}

impl LoggingConfig {
    /// Validate the level or directive
    pub fn validate(&self) -> Result<(), ValidationError> {
        let level = self.level.trim();
        let valid = if level.contains('=') || level.contains(',') {
            EnvFilter::try_new(level).is_ok()
        } else {
            LevelFilter::from_str(level).is_ok()
        };

        if valid {
            Ok(())
        } else {
            Err(ValidationError::InvalidLogLevel(self.level.clone()))
        }
    }
}

/// Install the global tracing subscriber.
///
/// Only the first call in a process succeeds; later calls return
/// `ConfigError::TracingInit`.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };
    result.map_err(|e| ConfigError::TracingInit(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_level(level: &str) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            json: false,
        }
    }

    #[test]
    fn test_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert!(!config.json);
    }

    #[test]
    fn test_accepts_plain_levels() {
        for level in ["trace", "debug", "info", "warn", "error", "off", "WARN"] {
            assert!(with_level(level).validate().is_ok(), "{level}");
        }
    }

    #[test]
    fn test_accepts_directives() {
        assert!(with_level("demand_tracker=debug,info").validate().is_ok());
    }

    #[test]
    fn test_rejects_unknown_level() {
        assert_eq!(
            with_level("loud").validate(),
            Err(ValidationError::InvalidLogLevel("loud".to_string()))
        );
    }

    #[test]
    fn test_second_init_reports_error() {
        let config = LoggingConfig::default();
        // Another test may already have installed a subscriber.
        let _ = init_tracing(&config);
        assert!(matches!(
            init_tracing(&config),
            Err(ConfigError::TracingInit(_))
        ));
    }
}
