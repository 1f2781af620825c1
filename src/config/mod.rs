//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `DEMAND_TRACKER` prefix
//! and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use demand_tracker::config::{init_tracing, AppConfig};
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! init_tracing(&config.logging).expect("Failed to install subscriber");
//! ```

mod error;
mod features;
mod logging;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use logging::{init_tracing, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment loads successfully.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log level and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DEMAND_TRACKER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `DEMAND_TRACKER__LOGGING__LEVEL=debug` -> `logging.level = "debug"`
    /// - `DEMAND_TRACKER__FEATURES__ENFORCE_RECORD_FINALIZATION=false`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DEMAND_TRACKER")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("DEMAND_TRACKER__LOGGING__LEVEL");
        env::remove_var("DEMAND_TRACKER__LOGGING__JSON");
        env::remove_var("DEMAND_TRACKER__FEATURES__ENFORCE_RECORD_FINALIZATION");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.logging, LoggingConfig::default());
        assert!(config.features.enforce_record_finalization);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DEMAND_TRACKER__LOGGING__LEVEL", "debug");
        env::set_var("DEMAND_TRACKER__LOGGING__JSON", "true");
        env::set_var("DEMAND_TRACKER__FEATURES__ENFORCE_RECORD_FINALIZATION", "false");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert!(!config.features.enforce_record_finalization);
    }

    #[test]
    fn test_validate_rejects_bad_level() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("DEMAND_TRACKER__LOGGING__LEVEL", "chatty");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidLogLevel("chatty".to_string()))
        );
    }
}
