//! Media URL helpers for NFT artwork.
//!
//! Artwork URIs may use the `ipfs://` scheme, which browsers cannot load.
//! They are rewritten onto an HTTP gateway; the gallery loads them through
//! the host's `/api/media` redirect so only allowlisted hosts are fetched.

#[cfg(test)]
#[path = "media_test.rs"]
mod media_test;

use std::fmt::Write;

pub const DEFAULT_IPFS_GATEWAY: &str = "https://ipfs.io";
pub const MEDIA_ENDPOINT: &str = "/api/media";

/// Rewrite `ipfs://<rest>` to `<gateway>/ipfs/<rest>`; other URIs pass through.
#[must_use]
pub fn ipfs_to_gateway(uri: &str, gateway: &str) -> String {
    match uri.strip_prefix("ipfs://") {
        Some(rest) => format!("{}/ipfs/{rest}", gateway.trim_end_matches('/')),
        None => uri.to_owned(),
    }
}

/// Image `src` routed through the host's media redirect.
#[must_use]
pub fn media_src(uri: &str) -> String {
    format!("{MEDIA_ENDPOINT}?uri={}", encode_component(uri))
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            let _ = write!(out, "%{byte:02X}");
        }
    }
    out
}
