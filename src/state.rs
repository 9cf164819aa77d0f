//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the outbound HTTP client used by the API proxy and the parsed
//! configuration. Both are cheap to clone.

use std::sync::Arc;

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build state with an HTTP client honoring the configured upstream
    /// timeout.
    ///
    /// # Errors
    ///
    /// Fails when the TLS backend cannot be initialized.
    pub fn new(config: ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.upstream_timeout).build()?;
        Ok(Self { http, config: Arc::new(config) })
    }
}
