//! Runtime configuration.
//!
//! Read from the process environment after an optional `.env` file has been
//! loaded. Every value has a default so the app starts with no setup.

use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/";
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(30);
/// Seconds the service waits between certificates in a batch.
pub const DEFAULT_BATCH_DELAY_SECS: f64 = 1.0;

const ENV_API_URL: &str = "SLAB_SCOUT_API_URL";
const ENV_LOOKUP_TIMEOUT: &str = "SLAB_SCOUT_LOOKUP_TIMEOUT_SECS";
const ENV_BATCH_DELAY: &str = "SLAB_SCOUT_BATCH_DELAY_SECS";
const ENV_LOG_LEVEL: &str = "SLAB_SCOUT_LOG_LEVEL";
const ENV_LOG_FORMAT: &str = "SLAB_SCOUT_LOG_FORMAT";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} is not a valid URL: {value}")]
    InvalidUrl { key: &'static str, value: String },
    #[error("{key} must be a non-negative number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} must be \"pretty\" or \"json\", got {value:?}")]
    InvalidLogFormat { key: &'static str, value: String },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Base URL of the lookup service; always ends with `/` so paths join.
    pub api_url: String,
    pub lookup_timeout: Duration,
    pub batch_delay_secs: f64,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            batch_delay_secs: DEFAULT_BATCH_DELAY_SECS,
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup. Unset or blank
    /// variables keep their defaults.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        if let Some(value) = var(ENV_API_URL) {
            config.api_url = parse_base_url(&value).ok_or(ConfigError::InvalidUrl {
                key: ENV_API_URL,
                value,
            })?;
        }
        if let Some(value) = var(ENV_LOOKUP_TIMEOUT) {
            let secs = parse_non_negative(ENV_LOOKUP_TIMEOUT, &value)?;
            config.lookup_timeout =
                Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidNumber {
                    key: ENV_LOOKUP_TIMEOUT,
                    value,
                })?;
        }
        if let Some(value) = var(ENV_BATCH_DELAY) {
            config.batch_delay_secs = parse_non_negative(ENV_BATCH_DELAY, &value)?;
        }
        if let Some(value) = var(ENV_LOG_LEVEL) {
            config.logging.level = value;
        }
        if let Some(value) = var(ENV_LOG_FORMAT) {
            config.logging.format = match value.to_ascii_lowercase().as_str() {
                "pretty" | "text" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidLogFormat {
                        key: ENV_LOG_FORMAT,
                        value,
                    })
                }
            };
        }

        Ok(config)
    }
}

fn parse_base_url(raw: &str) -> Option<String> {
    let with_slash = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    let url = Url::parse(&with_slash).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| url.to_string())
}

fn parse_non_negative(key: &'static str, raw: &str) -> Result<f64, ConfigError> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .ok_or_else(|| ConfigError::InvalidNumber {
            key,
            value: raw.to_string(),
        })
}
