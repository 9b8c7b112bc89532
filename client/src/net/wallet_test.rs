use serde_json::json;

use super::*;

#[test]
fn parse_chain_id_reads_hex_quantity() {
    assert_eq!(parse_chain_id(&json!("0x1")), Some(1));
    assert_eq!(parse_chain_id(&json!("0xaa36a7")), Some(11_155_111));
}

#[test]
fn parse_chain_id_rejects_garbage() {
    assert_eq!(parse_chain_id(&json!("mainnet")), None);
    assert_eq!(parse_chain_id(&json!(null)), None);
}

#[test]
#[cfg(not(feature = "hydrate"))]
fn provider_is_absent_outside_browser() {
    assert!(!InjectedProvider::is_available());
}

#[test]
#[cfg(not(feature = "hydrate"))]
fn wallet_requests_fail_as_not_connected_outside_browser() {
    let wallet: WalletClient = RpcClient::new(InjectedProvider);
    let err = futures::executor::block_on(wallet.request_accounts()).unwrap_err();
    assert_eq!(err, ChainError::NotConnected);
}
