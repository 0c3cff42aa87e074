//! Host configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_UPSTREAM_URL: &str = "http://localhost:8000";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    /// `API_UPSTREAM_URL` is not an absolute http(s) URL.
    #[error("invalid API_UPSTREAM_URL '{0}': expected http:// or https://")]
    InvalidUpstreamUrl(String),

    /// `API_TIMEOUT_SECS` is set but is not a positive integer.
    #[error("invalid API_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend origin without trailing slash; `/api/...` is appended per request.
    pub api_upstream_url: String,
    pub api_timeout: Duration,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_UPSTREAM_URL`: default `http://localhost:8000`
    /// - `API_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set to an unparseable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let api_upstream_url =
            parse_upstream_url(lookup("API_UPSTREAM_URL").as_deref().unwrap_or(DEFAULT_API_UPSTREAM_URL))?;

        let timeout_secs = match lookup("API_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_API_TIMEOUT_SECS,
        };

        Ok(Self { port, api_upstream_url, api_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn parse_upstream_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_host = ["http://", "https://"]
        .iter()
        .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
    if !has_host {
        return Err(ConfigError::InvalidUpstreamUrl(raw.to_owned()));
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
