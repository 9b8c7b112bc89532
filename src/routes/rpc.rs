//! Read-only JSON-RPC proxy.
//!
//! The browser reads chain state through `POST /api/rpc` so the upstream
//! node URL (and any key embedded in it) never reaches the page. Only
//! [`chain::rpc::READ_ONLY_METHODS`] are forwarded; anything else is answered here with
//! `METHOD_NOT_FOUND` and never touches the upstream.
//!
//! Every outcome is a JSON-RPC envelope with HTTP 200, so the client's
//! transport parses one shape.

use axum::extract::State;
use axum::response::Json;
use chain::rpc::{INVALID_REQUEST, JSONRPC_VERSION, METHOD_NOT_FOUND, RpcRequest, RpcResponse};
use serde_json::Value;

use crate::state::AppState;

/// JSON-RPC internal error, used when the upstream cannot be reached.
pub const INTERNAL_ERROR: i64 = -32603;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Validate a request body. `Err` carries the response to send back as is.
pub fn admit(body: Value) -> Result<RpcRequest, RpcResponse> {
    if !body.is_object() {
        return Err(RpcResponse::failure(Value::Null, INVALID_REQUEST, "expected a single request object"));
    }
    let id = body.get("id").cloned().unwrap_or(Value::Null);
    let request: RpcRequest = serde_json::from_value(body)
        .map_err(|e| RpcResponse::failure(id.clone(), INVALID_REQUEST, format!("invalid request: {e}")))?;
    if request.jsonrpc != JSONRPC_VERSION {
        return Err(RpcResponse::failure(id, INVALID_REQUEST, "unsupported jsonrpc version"));
    }
    if !request.is_read_only() {
        return Err(RpcResponse::failure(
            id,
            METHOD_NOT_FOUND,
            format!("method {} is not available through this proxy", request.method),
        ));
    }
    Ok(request)
}

/// Send `request` upstream and return its response with the caller's id.
///
/// # Errors
///
/// Returns [`ProxyError`] on connection failure, a non-2xx status, or a body
/// that is not a JSON-RPC response.
pub async fn forward(http: &reqwest::Client, url: &str, request: &RpcRequest) -> Result<RpcResponse, ProxyError> {
    let mut response: RpcResponse = http
        .post(url)
        .json(request)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;
    response.id = request.id.clone();
    Ok(response)
}

/// `POST /api/rpc`.
pub async fn proxy(State(state): State<AppState>, Json(body): Json<Value>) -> Json<RpcResponse> {
    let request = match admit(body) {
        Ok(request) => request,
        Err(refusal) => return Json(refusal),
    };

    match forward(&state.http, &state.config.rpc_url, &request).await {
        Ok(response) => Json(response),
        Err(e) => {
            tracing::warn!(method = %request.method, error = %e, "rpc proxy upstream failed");
            Json(RpcResponse::failure(request.id, INTERNAL_ERROR, "upstream node unavailable"))
        }
    }
}

#[cfg(test)]
#[path = "rpc_test.rs"]
mod tests;
