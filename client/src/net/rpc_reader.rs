//! Chain reads over the host's read-only JSON-RPC proxy (`POST /api/rpc`).
//!
//! The browser never talks to the node directly: the host forwards only
//! read methods, so the node URL and its credentials stay server-side.

#[cfg(test)]
#[path = "rpc_reader_test.rs"]
mod rpc_reader_test;

use async_trait::async_trait;
use chain::ChainError;
use chain::client::{RpcClient, RpcTransport};
use chain::rpc::{RpcRequest, RpcResponse};

/// Reader used by every panel.
pub type ProxyReader = RpcClient<HttpTransport>;

/// JSON-RPC over HTTP POST to a same-origin path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTransport {
    path: String,
}

impl HttpTransport {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn rpc_status_message(status: u16) -> String {
    format!("rpc proxy answered {status}")
}

#[async_trait(?Send)]
impl RpcTransport for HttpTransport {
    async fn request(&self, request: RpcRequest) -> Result<RpcResponse, ChainError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.path)
                .json(&request)
                .map_err(|e| ChainError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ChainError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ChainError::Transport(rpc_status_message(resp.status())));
            }
            resp.json::<RpcResponse>().await.map_err(|e| ChainError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ChainError::Transport("not available on server".to_owned()))
        }
    }
}
