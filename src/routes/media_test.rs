use axum::http::header::LOCATION;

use super::*;
use crate::config::AppConfig;

const GATEWAY: &str = "https://ipfs.io";

fn hosts() -> Vec<String> {
    vec!["ipfs.io".to_owned(), "gateway.pinata.cloud".to_owned()]
}

#[test]
fn ipfs_uri_resolves_through_gateway() {
    let url = resolve_media("ipfs://QmHash/1.png", GATEWAY, &hosts()).unwrap();
    assert_eq!(url.as_str(), "https://ipfs.io/ipfs/QmHash/1.png");
}

#[test]
fn allowlisted_https_passes_through() {
    let url = resolve_media("https://Gateway.Pinata.Cloud/ipfs/QmHash", GATEWAY, &hosts()).unwrap();
    assert_eq!(url.host_str(), Some("gateway.pinata.cloud"));
}

#[test]
fn plain_http_is_refused() {
    let err = resolve_media("http://ipfs.io/ipfs/QmHash", GATEWAY, &hosts()).unwrap_err();
    assert_eq!(err, MediaError::Insecure);
}

#[test]
fn unknown_host_is_refused() {
    let err = resolve_media("https://evil.example/x.png", GATEWAY, &hosts()).unwrap_err();
    assert_eq!(err, MediaError::HostNotAllowed("evil.example".to_owned()));
}

#[test]
fn allowlisted_host_outside_ipfs_path_is_refused() {
    let err = resolve_media("https://ipfs.io/other/x.png", GATEWAY, &hosts()).unwrap_err();
    assert_eq!(err, MediaError::PathNotAllowed("/other/x.png".to_owned()));

    let err = resolve_media("https://gateway.pinata.cloud/", GATEWAY, &hosts()).unwrap_err();
    assert_eq!(err, MediaError::PathNotAllowed("/".to_owned()));
}

#[test]
fn garbage_is_invalid() {
    assert_eq!(resolve_media("not a url", GATEWAY, &hosts()).unwrap_err(), MediaError::Invalid);
    assert_eq!(resolve_media("", GATEWAY, &hosts()).unwrap_err(), MediaError::Invalid);
}

#[test]
fn javascript_scheme_is_refused() {
    let err = resolve_media("javascript:alert(1)", GATEWAY, &hosts()).unwrap_err();
    assert_eq!(err, MediaError::Insecure);
}

fn state() -> AppState {
    let vars = [
        ("RPC_URL", "http://127.0.0.1:9"),
        ("TOKEN_CONTRACT_ADDRESS", "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
        ("COLLATERAL_TOKEN_CONTRACT_ADDRESS", "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"),
        ("NFT_COLLECTION_CONTRACT_ADDRESS", "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB"),
    ];
    let config = AppConfig::from_lookup(|key| {
        vars.iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_owned())
    })
    .unwrap();
    AppState::new(config).unwrap()
}

#[tokio::test]
async fn redirect_sets_location() {
    let query = MediaQuery { uri: "ipfs://QmHash/7.json".to_owned() };
    let response = redirect(State(state()), Query(query)).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "https://ipfs.io/ipfs/QmHash/7.json");
}

#[tokio::test]
async fn redirect_refuses_with_bad_request() {
    let query = MediaQuery { uri: "https://evil.example/x.png".to_owned() };
    let response = redirect(State(state()), Query(query)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().get(LOCATION).is_none());
}
