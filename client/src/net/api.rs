//! REST helpers for the host's JSON endpoints.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a missing or broken
//! config endpoint degrades to an error banner without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use chain::contracts::ChainConfig;

pub const CONFIG_ENDPOINT: &str = "/api/config";

#[cfg(any(test, feature = "hydrate"))]
fn config_request_failed_message(status: u16) -> String {
    format!("config request failed: {status}")
}

/// Fetch contract addresses and RPC settings from `GET /api/config`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body does not parse.
pub async fn fetch_config() -> Result<ChainConfig, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CONFIG_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(config_request_failed_message(resp.status()));
        }
        resp.json::<ChainConfig>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
