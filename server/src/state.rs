//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and one pooled `reqwest::Client` used to forward
//! `/api/*` requests to the directory backend. Nothing in it is mutable.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::routes::proxy::ProxyError;

const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Clone is required by Axum; the config is behind an `Arc` and the client is
/// internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state and the upstream HTTP client from parsed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ServerConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(config.api_timeout)
            .connect_timeout(std::time::Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ProxyError::HttpClientBuild(e.to_string()))?;
        Ok(Self { config: Arc::new(config), http })
    }
}
