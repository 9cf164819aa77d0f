//! Page-server configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_UPSTREAM: &str = "http://127.0.0.1:8000";
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 12 * 1024 * 1024;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL of the transformation backend, without a trailing slash.
    pub api_upstream: String,
    pub body_limit_bytes: usize,
    pub upstream_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_upstream: DEFAULT_API_UPSTREAM.to_owned(),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `REFRAME_API_UPSTREAM`: default `http://127.0.0.1:8000`
    /// - `REFRAME_BODY_LIMIT_BYTES`: default 12 MiB, must be positive
    /// - `REFRAME_UPSTREAM_TIMEOUT_SECS`: default 120
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a value that does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a value that does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let api_upstream = lookup("REFRAME_API_UPSTREAM")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_UPSTREAM.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let body_limit_bytes =
            parse_or("REFRAME_BODY_LIMIT_BYTES", lookup("REFRAME_BODY_LIMIT_BYTES"), DEFAULT_BODY_LIMIT_BYTES)?;
        if body_limit_bytes == 0 {
            return Err(ConfigError::Invalid { var: "REFRAME_BODY_LIMIT_BYTES", value: "0".to_owned() });
        }
        let timeout_secs = parse_or(
            "REFRAME_UPSTREAM_TIMEOUT_SECS",
            lookup("REFRAME_UPSTREAM_TIMEOUT_SECS"),
            DEFAULT_UPSTREAM_TIMEOUT_SECS,
        )?;

        Ok(Self { port, api_upstream, body_limit_bytes, upstream_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
