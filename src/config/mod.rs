//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `QUICKCART` prefix and nested values use `__` as the separator.
//!
//! # Example
//!
//! ```no_run
//! use quickcart::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod payment;
mod server;

pub use database::{DatabaseConfig, StorageBackend};
pub use error::{ConfigError, ValidationError};
pub use payment::{PaymentConfig, PaymentMode};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment
/// variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Storage configuration (backend selector, PostgreSQL connection)
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Payment configuration (gateway keys, settlement currency)
    #[serde(default)]
    pub payment: PaymentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `QUICKCART` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `QUICKCART__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `QUICKCART__DATABASE__URL=...` -> `database.url = ...`
    /// - `QUICKCART__PAYMENT__MODE=sandbox` -> `payment.mode = sandbox`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("QUICKCART")
                    .prefix_separator("__")
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
        self.database.validate()?;
        self.payment.validate()?;
        Ok(())
    }
}
