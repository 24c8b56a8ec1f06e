//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `TABLETAP_DATA_DIR` - Data directory for the key-value store
//!   (default: `./tabletap-data`)
//! - `TABLETAP_TABLE` - Default serving table for `order place`

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the persisted store files
    pub data_dir: PathBuf,
    /// Default serving table for the customer flow
    pub default_table: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a blank value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = get_env_or_default("TABLETAP_DATA_DIR", "./tabletap-data")?;
        let default_table = get_optional_env("TABLETAP_TABLE");

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            default_table,
        })
    }
}

/// Get an optional environment variable, treating blank as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value. A variable that is set
/// but blank is an error rather than a silent fallback.
fn get_env_or_default(key: &str, default: &str) -> Result<String, ConfigError> {
    match std::env::var(key) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
            key.to_owned(),
            "value is blank".to_owned(),
        )),
        Ok(value) => Ok(value),
        Err(_) => Ok(default.to_owned()),
    }
}
