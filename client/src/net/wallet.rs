//! Injected browser wallet (EIP-1193 `window.ethereum`).
//!
//! SYSTEM CONTEXT
//! ==============
//! The wallet signs and submits transactions and reports the connected
//! accounts and chain. Requests go through the provider's `request({method,
//! params})` promise; a rejected promise carries an EIP-1193 error object
//! (`code`, `message`) that is turned into a JSON-RPC failure so
//! [`chain::ChainError::is_user_rejection`] can recognise code 4001.
//!
//! TRADE-OFFS
//! ==========
//! Provider notifications are wired once per page load and their closures are
//! leaked; the provider outlives the page anyway.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use async_trait::async_trait;
use chain::client::{RpcClient, RpcTransport};
use chain::rpc::{RpcRequest, RpcResponse};
use chain::{Address, ChainError};

/// Wallet client used for account discovery and transaction submission.
pub type WalletClient = RpcClient<InjectedProvider>;

pub const NO_PROVIDER_MESSAGE: &str = "No browser wallet found. Install a wallet extension to continue.";

/// Handle on `window.ethereum`.
#[derive(Clone, Copy, Debug, Default)]
pub struct InjectedProvider;

impl InjectedProvider {
    /// Whether the page has an injected provider.
    #[must_use]
    pub fn is_available() -> bool {
        #[cfg(feature = "hydrate")]
        {
            provider().is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

#[cfg(feature = "hydrate")]
fn provider() -> Option<wasm_bindgen::JsValue> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &"ethereum".into())
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

/// Convert a JS value to JSON through `JSON.stringify`.
#[cfg(feature = "hydrate")]
fn to_json(value: &wasm_bindgen::JsValue) -> Result<serde_json::Value, ChainError> {
    if value.is_undefined() || value.is_null() {
        return Ok(serde_json::Value::Null);
    }
    let text: String = js_sys::JSON::stringify(value)
        .map_err(|_| ChainError::Decode("wallet returned an unserializable value".to_owned()))?
        .into();
    serde_json::from_str(&text).map_err(|e| ChainError::Decode(e.to_string()))
}

/// Pull `code` and `message` out of a rejected provider promise.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation)]
fn provider_error(error: &wasm_bindgen::JsValue) -> (i64, String) {
    let code = js_sys::Reflect::get(error, &"code".into())
        .ok()
        .and_then(|v| v.as_f64())
        .map_or(UNKNOWN_PROVIDER_ERROR, |c| c as i64);
    let message = js_sys::Reflect::get(error, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| "wallet request failed".to_owned());
    (code, message)
}

/// JSON-RPC "internal error", used when the provider rejects without a code.
pub const UNKNOWN_PROVIDER_ERROR: i64 = -32603;

#[async_trait(?Send)]
impl RpcTransport for InjectedProvider {
    async fn request(&self, request: RpcRequest) -> Result<RpcResponse, ChainError> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let provider = provider().ok_or(ChainError::NotConnected)?;
            let args = js_sys::Object::new();
            let params = js_sys::JSON::parse(&request.params.to_string())
                .map_err(|_| ChainError::Decode("unencodable params".to_owned()))?;
            let _ = js_sys::Reflect::set(&args, &"method".into(), &request.method.as_str().into());
            let _ = js_sys::Reflect::set(&args, &"params".into(), &params);

            let request_fn: js_sys::Function = js_sys::Reflect::get(&provider, &"request".into())
                .and_then(|f| f.dyn_into())
                .map_err(|_| ChainError::Transport("provider has no request method".to_owned()))?;
            let promise: js_sys::Promise = request_fn
                .call1(&provider, &args)
                .and_then(|p| p.dyn_into())
                .map_err(|_| ChainError::Transport("provider request did not return a promise".to_owned()))?;

            match wasm_bindgen_futures::JsFuture::from(promise).await {
                Ok(value) => Ok(RpcResponse::success(request.id, to_json(&value)?)),
                Err(error) => {
                    let (code, message) = provider_error(&error);
                    Ok(RpcResponse::failure(request.id, code, message))
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ChainError::NotConnected)
        }
    }
}

/// Parse a `chainChanged` payload (hex quantity).
#[must_use]
pub fn parse_chain_id(value: &serde_json::Value) -> Option<u64> {
    chain::rpc::parse_quantity(value).ok()
}

/// Forward `accountsChanged` and `chainChanged` notifications.
pub fn watch_provider(
    on_accounts: impl Fn(Vec<Address>) + 'static,
    on_chain: impl Fn(Option<u64>) + 'static,
) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;

        let Some(provider) = provider() else {
            return;
        };
        let Ok(on) = js_sys::Reflect::get(&provider, &"on".into()).and_then(|f| f.dyn_into::<js_sys::Function>())
        else {
            return;
        };

        let accounts_cb = Closure::<dyn Fn(wasm_bindgen::JsValue)>::new(move |value: wasm_bindgen::JsValue| {
            let accounts = to_json(&value)
                .and_then(|json| chain::rpc::parse_accounts(&json))
                .unwrap_or_default();
            on_accounts(accounts);
        });
        let chain_cb = Closure::<dyn Fn(wasm_bindgen::JsValue)>::new(move |value: wasm_bindgen::JsValue| {
            on_chain(to_json(&value).ok().and_then(|json| parse_chain_id(&json)));
        });
        let _ = on.call2(&provider, &"accountsChanged".into(), accounts_cb.as_ref().unchecked_ref());
        let _ = on.call2(&provider, &"chainChanged".into(), chain_cb.as_ref().unchecked_ref());
        accounts_cb.forget();
        chain_cb.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (on_accounts, on_chain);
    }
}
