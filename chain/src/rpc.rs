//! JSON-RPC 2.0 envelopes and result parsers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The same envelopes travel three ways: from the browser to the host's
//! read-only proxy, from the proxy to the upstream node, and from the page to
//! the injected wallet provider. Keeping them here means the host and the
//! client agree on the method allowlist and on how results are parsed.

#[cfg(test)]
#[path = "rpc_test.rs"]
mod rpc_test;

use alloy_primitives::hex;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::address::{Address, lower_hex, parse_address};
use crate::error::ChainError;
use crate::receipt::{Receipt, ReceiptStatus, TxHash};

pub const JSONRPC_VERSION: &str = "2.0";

/// Standard JSON-RPC error code for an unknown or refused method.
pub const METHOD_NOT_FOUND: i64 = -32601;

/// Standard JSON-RPC error code for a malformed request object.
pub const INVALID_REQUEST: i64 = -32600;

/// Methods the host forwards to the upstream node. Everything else is
/// answered locally with [`METHOD_NOT_FOUND`].
pub const READ_ONLY_METHODS: &[&str] = &["eth_call", "eth_getTransactionReceipt", "eth_chainId", "eth_blockNumber"];

/// A JSON-RPC request object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

/// The `error` member of a failed JSON-RPC response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// A JSON-RPC response object.
///
/// `result: null` (a pending receipt) and a missing `result` both
/// deserialize to `None`; [`RpcResponse::into_result`] maps either to
/// `Value::Null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcErrorObject>,
}

impl RpcRequest {
    #[must_use]
    pub fn new(id: u64, method: &str, params: Value) -> Self {
        Self { jsonrpc: JSONRPC_VERSION.to_owned(), id: Value::from(id), method: method.to_owned(), params }
    }

    /// `eth_call` against the latest block.
    #[must_use]
    pub fn eth_call(id: u64, to: Address, data: &[u8]) -> Self {
        Self::new(id, "eth_call", json!([{ "to": lower_hex(&to), "data": to_hex_data(data) }, "latest"]))
    }

    #[must_use]
    pub fn transaction_receipt(id: u64, hash: TxHash) -> Self {
        Self::new(id, "eth_getTransactionReceipt", json!([hash.to_string()]))
    }

    /// `eth_sendTransaction`; the wallet fills in gas and nonce.
    #[must_use]
    pub fn send_transaction(id: u64, from: Address, to: Address, data: &[u8]) -> Self {
        Self::new(
            id,
            "eth_sendTransaction",
            json!([{ "from": lower_hex(&from), "to": lower_hex(&to), "data": to_hex_data(data) }]),
        )
    }

    #[must_use]
    pub fn request_accounts(id: u64) -> Self {
        Self::new(id, "eth_requestAccounts", json!([]))
    }

    #[must_use]
    pub fn accounts(id: u64) -> Self {
        Self::new(id, "eth_accounts", json!([]))
    }

    #[must_use]
    pub fn chain_id(id: u64) -> Self {
        Self::new(id, "eth_chainId", json!([]))
    }

    /// Whether the host proxy may forward this request upstream.
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        READ_ONLY_METHODS.contains(&self.method.as_str())
    }
}

impl RpcResponse {
    #[must_use]
    pub fn success(id: Value, result: Value) -> Self {
        Self { jsonrpc: JSONRPC_VERSION.to_owned(), id, result: Some(result), error: None }
    }

    #[must_use]
    pub fn failure(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            id,
            result: None,
            error: Some(RpcErrorObject { code, message: message.into(), data: None }),
        }
    }

    /// Unwrap the result, turning an error object into [`ChainError::Rpc`].
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Rpc`] when the response carries an error.
    pub fn into_result(self) -> Result<Value, ChainError> {
        match self.error {
            Some(err) => Err(ChainError::Rpc { code: err.code, message: err.message }),
            None => Ok(self.result.unwrap_or(Value::Null)),
        }
    }
}

/// `0x`-prefixed lowercase hex of raw bytes.
#[must_use]
pub fn to_hex_data(bytes: &[u8]) -> String {
    hex::encode_prefixed(bytes)
}

fn expect_str<'a>(value: &'a Value, what: &str) -> Result<&'a str, ChainError> {
    value
        .as_str()
        .ok_or_else(|| ChainError::Decode(format!("expected {what} string, got {value}")))
}

/// Parse `0x`-prefixed hex data (`"0x"` is empty).
///
/// # Errors
///
/// Returns [`ChainError::Decode`] for non-strings and invalid hex.
pub fn parse_hex_data(value: &Value) -> Result<Vec<u8>, ChainError> {
    let raw = expect_str(value, "hex data")?;
    let digits = raw.strip_prefix("0x").unwrap_or(raw);
    Ok(hex::decode(digits)?)
}

/// Parse a hex quantity such as `"0x1b4"`.
///
/// # Errors
///
/// Returns [`ChainError::Decode`] for non-strings and out-of-range values.
pub fn parse_quantity(value: &Value) -> Result<u64, ChainError> {
    let raw = expect_str(value, "quantity")?;
    let digits = raw.strip_prefix("0x").unwrap_or(raw);
    u64::from_str_radix(digits, 16).map_err(|e| ChainError::Decode(format!("quantity {raw}: {e}")))
}

/// Parse a transaction hash result.
///
/// # Errors
///
/// Returns [`ChainError::Decode`] if the value is not a 32-byte hash.
pub fn parse_tx_hash(value: &Value) -> Result<TxHash, ChainError> {
    expect_str(value, "transaction hash")?
        .parse()
        .map_err(|e| ChainError::Decode(format!("transaction hash: {e}")))
}

/// Parse an `eth_accounts` / `eth_requestAccounts` result.
///
/// # Errors
///
/// Returns [`ChainError::Decode`] if the value is not an array of addresses.
pub fn parse_accounts(value: &Value) -> Result<Vec<Address>, ChainError> {
    let items = value
        .as_array()
        .ok_or_else(|| ChainError::Decode(format!("expected account array, got {value}")))?;
    items
        .iter()
        .map(|item| {
            parse_address(expect_str(item, "account")?).map_err(|e| ChainError::Decode(format!("account: {e}")))
        })
        .collect()
}

/// Parse an `eth_getTransactionReceipt` result; `null` means not yet mined.
///
/// # Errors
///
/// Returns [`ChainError::Decode`] for a malformed receipt object.
pub fn parse_receipt(value: &Value) -> Result<Option<Receipt>, ChainError> {
    if value.is_null() {
        return Ok(None);
    }
    let transaction_hash = parse_tx_hash(&value["transactionHash"])?;
    let block_number = match &value["blockNumber"] {
        Value::Null => None,
        other => Some(parse_quantity(other)?),
    };
    // Receipts from before the status field existed carry a state root instead.
    let status = match &value["status"] {
        Value::Null => ReceiptStatus::Success,
        other if parse_quantity(other)? == 0 => ReceiptStatus::Reverted,
        _ => ReceiptStatus::Success,
    };
    Ok(Some(Receipt { transaction_hash, block_number, status }))
}
