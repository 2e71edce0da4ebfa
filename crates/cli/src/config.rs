//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOPEASE_CURRENCY` - Currency used to render prices (default: USD)
//! - `SHOPEASE_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `RUST_LOG` - Standard `tracing` filter directives

use std::str::FromStr;

use shopease_core::CurrencyCode;
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `pretty` or `json`, got `{other}`")),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Currency used when rendering prices.
    pub currency: CurrencyCode,
    /// Log output format.
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unsupported value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            currency: parse_or_default(&lookup, "SHOPEASE_CURRENCY")?,
            log_format: parse_or_default(&lookup, "SHOPEASE_LOG_FORMAT")?,
        })
    }
}

fn parse_or_default<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Result<T, ConfigError>
where
    T: FromStr<Err = String> + Default,
{
    match lookup(name).filter(|value| !value.trim().is_empty()) {
        Some(value) => value
            .parse()
            .map_err(|e| ConfigError::InvalidEnvVar(name.to_string(), e)),
        None => Ok(T::default()),
    }
}
