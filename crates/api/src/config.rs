//! Runtime configuration, read from environment variables.

use std::net::SocketAddr;

use shopcart_observability::LogFormat;
use thiserror::Error;

const DEFAULT_BIND: &str = "0.0.0.0:4000";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: invalid socket address '{value}'")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var}: {message}")]
    InvalidLogFormat { var: &'static str, message: String },

    #[error("{var}: expected true or false, got '{value}'")]
    InvalidBool { var: &'static str, value: String },
}

/// API process configuration.
///
/// | Variable | Default |
/// |---|---|
/// | `SHOPCART_BIND` | `0.0.0.0:4000` |
/// | `SHOPCART_LOG_FORMAT` | `json` |
/// | `SHOPCART_PLAYGROUND` | `true` |
/// | `SHOPCART_SEED` | `true` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind: SocketAddr,
    pub log_format: LogFormat,
    /// Serve GraphiQL on `GET /graphql`.
    pub playground: bool,
    /// Load the demo catalog and cart at startup.
    pub seed: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 4000)),
            log_format: LogFormat::Json,
            playground: true,
            seed: true,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let bind = match lookup("SHOPCART_BIND") {
            Some(value) => value.trim().parse::<SocketAddr>().map_err(|_| ConfigError::InvalidAddr {
                var: "SHOPCART_BIND",
                value,
            })?,
            None => {
                tracing::debug!("SHOPCART_BIND not set; using {DEFAULT_BIND}");
                defaults.bind
            }
        };

        let log_format = match lookup("SHOPCART_LOG_FORMAT") {
            Some(value) => {
                value
                    .parse::<LogFormat>()
                    .map_err(|message| ConfigError::InvalidLogFormat {
                        var: "SHOPCART_LOG_FORMAT",
                        message,
                    })?
            }
            None => defaults.log_format,
        };

        Ok(Self {
            bind,
            log_format,
            playground: parse_bool(&lookup, "SHOPCART_PLAYGROUND", defaults.playground)?,
            seed: parse_bool(&lookup, "SHOPCART_SEED", defaults.seed)?,
        })
    }
}

fn parse_bool(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(value) = lookup(var) else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value }),
    }
}
