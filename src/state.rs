//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed host configuration and one pooled HTTP client used for
//! every upstream JSON-RPC call.

use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// Build state around `config`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the HTTP client cannot be built (TLS
    /// backend initialization).
    pub fn new(config: AppConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.rpc_timeout_secs))
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
