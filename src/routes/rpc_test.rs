use serde_json::json;

use super::*;
use crate::config::AppConfig;

fn state_with_upstream(rpc_url: &str) -> AppState {
    let vars = [
        ("RPC_URL", rpc_url),
        ("TOKEN_CONTRACT_ADDRESS", "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
        ("COLLATERAL_TOKEN_CONTRACT_ADDRESS", "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"),
        ("NFT_COLLECTION_CONTRACT_ADDRESS", "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB"),
        ("RPC_TIMEOUT_SECS", "2"),
    ];
    let config = AppConfig::from_lookup(|key| {
        vars.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_owned())
    })
    .unwrap();
    AppState::new(config).unwrap()
}

fn error_code(response: &RpcResponse) -> Option<i64> {
    response.error.as_ref().map(|e| e.code)
}

#[test]
fn admit_accepts_read_only_call() {
    let body = json!({"jsonrpc": "2.0", "id": 7, "method": "eth_call", "params": [{"to": "0x00"}, "latest"]});
    let request = admit(body).unwrap();
    assert_eq!(request.method, "eth_call");
    assert_eq!(request.id, json!(7));
}

#[test]
fn admit_accepts_missing_params() {
    let body = json!({"jsonrpc": "2.0", "id": 1, "method": "eth_chainId"});
    assert!(admit(body).is_ok());
}

#[test]
fn admit_refuses_write_methods_with_caller_id() {
    for method in ["eth_sendTransaction", "eth_sendRawTransaction", "eth_requestAccounts", "personal_sign"] {
        let body = json!({"jsonrpc": "2.0", "id": "abc", "method": method, "params": []});
        let refusal = admit(body).unwrap_err();
        assert_eq!(error_code(&refusal), Some(METHOD_NOT_FOUND), "{method}");
        assert_eq!(refusal.id, json!("abc"));
    }
}

#[test]
fn admit_refuses_batches() {
    let body = json!([{"jsonrpc": "2.0", "id": 1, "method": "eth_chainId"}]);
    let refusal = admit(body).unwrap_err();
    assert_eq!(error_code(&refusal), Some(INVALID_REQUEST));
    assert_eq!(refusal.id, Value::Null);
}

#[test]
fn admit_refuses_missing_method() {
    let refusal = admit(json!({"jsonrpc": "2.0", "id": 3})).unwrap_err();
    assert_eq!(error_code(&refusal), Some(INVALID_REQUEST));
    assert_eq!(refusal.id, json!(3));
}

#[test]
fn admit_refuses_wrong_version() {
    let refusal = admit(json!({"jsonrpc": "1.0", "id": 3, "method": "eth_call"})).unwrap_err();
    assert_eq!(error_code(&refusal), Some(INVALID_REQUEST));
}

#[tokio::test]
async fn proxy_answers_write_method_without_upstream() {
    // Nothing listens on the discard port; a forwarded call would fail with INTERNAL_ERROR.
    let state = state_with_upstream("http://127.0.0.1:9");
    let body = json!({"jsonrpc": "2.0", "id": 1, "method": "eth_sendTransaction", "params": []});
    let Json(response) = proxy(State(state), Json(body)).await;
    assert_eq!(error_code(&response), Some(METHOD_NOT_FOUND));
}

#[tokio::test]
async fn proxy_reports_unreachable_upstream() {
    let state = state_with_upstream("http://127.0.0.1:9");
    let body = json!({"jsonrpc": "2.0", "id": 42, "method": "eth_blockNumber", "params": []});
    let Json(response) = proxy(State(state), Json(body)).await;
    assert_eq!(error_code(&response), Some(INTERNAL_ERROR));
    assert_eq!(response.id, json!(42));
}
