//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the `config`
//! and `dotenvy` crates. Variables use the `KENNEL_LEDGER` prefix and `__` to
//! separate nested values.
//!
//! # Example
//!
//! ```no_run
//! use kennel_ledger::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Labels rendered in {}", config.domain.locale);
//! ```

mod database;
mod domain;
mod error;
mod logging;

pub use database::DatabaseConfig;
pub use domain::DomainConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults except `database`, which is only needed when
/// the PostgreSQL store is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// PostgreSQL connection; absent when running on the in-memory store
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub domain: DomainConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `KENNEL_LEDGER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `KENNEL_LEDGER__DATABASE__URL=...` -> `database.url = ...`
    /// - `KENNEL_LEDGER__LOGGING__FORMAT=json` -> `logging.format = json`
    /// - `KENNEL_LEDGER__DOMAIN__LOCALE=es` -> `domain.locale = es`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("KENNEL_LEDGER")
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
        if let Some(database) = &self.database {
            database.validate()?;
        }
        self.logging.validate()?;
        self.domain.validate()?;
        Ok(())
    }
}
