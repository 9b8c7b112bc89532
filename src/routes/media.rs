//! NFT artwork redirect.
//!
//! `GET /api/media?uri=...` resolves a token's image URI (rewriting
//! `ipfs://` onto the configured gateway) and redirects to it, but only when
//! the target is https on an allowlisted host under `/ipfs/`. The gallery never embeds
//! arbitrary URLs from contract metadata.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use client::util::media::ipfs_to_gateway;
use reqwest::Url;
use serde::Deserialize;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MediaQuery {
    pub uri: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MediaError {
    #[error("media uri is not a valid url")]
    Invalid,

    #[error("media must be served over https")]
    Insecure,

    #[error("media host {0} is not allowed")]
    HostNotAllowed(String),

    #[error("media path {0} is not allowed")]
    PathNotAllowed(String),
}

/// Resolve `uri` to a redirect target.
///
/// # Errors
///
/// Returns [`MediaError`] when the URI does not parse, is not https, its
/// host is not in `hosts` (compared case-insensitively), or its path is
/// outside `/ipfs/`.
pub fn resolve_media(uri: &str, gateway: &str, hosts: &[String]) -> Result<Url, MediaError> {
    let resolved = ipfs_to_gateway(uri.trim(), gateway);
    let url = Url::parse(&resolved).map_err(|_| MediaError::Invalid)?;
    if url.scheme() != "https" {
        return Err(MediaError::Insecure);
    }
    let host = url.host_str().ok_or(MediaError::Invalid)?.to_ascii_lowercase();
    if !hosts.iter().any(|allowed| *allowed == host) {
        return Err(MediaError::HostNotAllowed(host));
    }
    if !url.path().starts_with("/ipfs/") {
        return Err(MediaError::PathNotAllowed(url.path().to_owned()));
    }
    Ok(url)
}

/// `GET /api/media`.
pub async fn redirect(State(state): State<AppState>, Query(query): Query<MediaQuery>) -> Response {
    match resolve_media(&query.uri, &state.config.ipfs_gateway, &state.config.image_hosts) {
        Ok(url) => Redirect::temporary(url.as_str()).into_response(),
        Err(e) => {
            tracing::debug!(uri = %query.uri, error = %e, "media redirect refused");
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

#[cfg(test)]
#[path = "media_test.rs"]
mod tests;
