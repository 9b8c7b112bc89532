use super::*;
use chain::testing;

#[test]
fn default_is_disconnected() {
    let state = WalletState::default();
    assert!(!state.is_connected());
    assert_eq!(state.status, ConnectionStatus::Disconnected);
}

#[test]
fn apply_accounts_uses_first_entry() {
    let mut state = WalletState::default();
    state.apply_accounts(&[testing::address(1), testing::address(2)]);
    assert_eq!(state.account, Some(testing::address(1)));
    assert_eq!(state.status, ConnectionStatus::Connected);
}

#[test]
fn empty_account_list_disconnects() {
    let mut state = WalletState::default();
    state.apply_accounts(&[testing::address(1)]);
    state.apply_accounts(&[]);
    assert!(!state.is_connected());
    assert_eq!(state.status, ConnectionStatus::Disconnected);
}

#[test]
fn wrong_network_only_when_chain_known() {
    let mut state = WalletState::default();
    assert!(!state.wrong_network(1));
    state.chain_id = Some(5);
    assert!(state.wrong_network(1));
    assert!(!state.wrong_network(5));
}
