use super::*;

fn units(n: u64, exp: usize) -> U256 {
    U256::from(n) * U256::from(10u64).pow(U256::from(exp))
}

// =============================================================
// Defaults and labels
// =============================================================

#[test]
fn default_amount_and_not_approved() {
    let state = TokenPanelState::default();
    assert_eq!(state.amount_input, "0.01");
    assert!(!state.approved);
    assert_eq!(state.balance_text(), "0");
}

#[test]
fn zero_allowance_shows_approve_collateral() {
    let mut state = TokenPanelState::default();
    state.apply_allowance(Ok(U256::ZERO), "0.01");
    assert!(!state.approved);
    assert_eq!(state.primary_action(), PrimaryAction::Approve);
    assert_eq!(state.primary_action_label(), "Approve Collateral");
}

#[test]
fn approve_in_flight_label() {
    let mut state = TokenPanelState::default();
    state.approve_phase = TxPhase::AwaitingWallet;
    assert_eq!(state.primary_action_label(), "Approving...");
    state.approve_phase = TxPhase::Confirming;
    assert_eq!(state.primary_action_label(), "Approving...");
}

#[test]
fn mint_labels_follow_phase() {
    let mut state = TokenPanelState::default();
    state.apply_allowance(Ok(units(1, 18)), "0.01");
    assert_eq!(state.primary_action_label(), "Mint Tokens");
    state.mint_phase = TxPhase::AwaitingWallet;
    assert_eq!(state.primary_action_label(), "Confirm in Wallet...");
    state.mint_phase = TxPhase::Confirming;
    assert_eq!(state.primary_action_label(), "Minting...");
    assert!(state.is_busy());
}

// =============================================================
// Allowance
// =============================================================

#[test]
fn allowance_equal_to_request_is_approved() {
    let mut state = TokenPanelState::default();
    state.apply_allowance(Ok(units(1, 16)), "0.01");
    assert!(state.approved);
    assert_eq!(state.last_allowance, Some(units(1, 16)));
}

#[test]
fn allowance_below_request_is_not_approved() {
    let mut state = TokenPanelState::default();
    state.apply_allowance(Ok(units(1, 16) - U256::from(1u8)), "0.01");
    assert!(!state.approved);
}

#[test]
fn failed_allowance_read_defaults_to_not_approved() {
    let mut state = TokenPanelState::default();
    state.apply_allowance(Ok(units(1, 18)), "0.01");
    state.apply_allowance(Err(ChainError::Transport("down".to_owned())), "0.01");
    assert!(!state.approved);
}

#[test]
fn unparseable_request_is_not_approved() {
    let mut state = TokenPanelState::default();
    state.apply_allowance(Ok(units(1, 18)), "abc");
    assert!(!state.approved);
}

#[test]
fn editing_amount_waits_for_next_check() {
    let mut state = TokenPanelState::default();
    state.apply_allowance(Ok(units(1, 16)), "0.01");
    assert!(state.approved);
    state.set_amount("0.02".to_owned());
    assert!(state.approved);
    assert_eq!(state.allowance_text().as_deref(), Some("0.01"));
    state.apply_allowance(Ok(units(1, 16)), "0.02");
    assert!(!state.approved);
}

// =============================================================
// Balance
// =============================================================

#[test]
fn balance_read_formats_human_units() {
    let mut state = TokenPanelState::default();
    state.balance_loading = true;
    state.apply_balance(Ok(units(15, 17)));
    assert_eq!(state.balance_text(), "1.5");
    assert!(!state.balance_loading);
}

#[test]
fn balance_read_failure_shows_zero() {
    let mut state = TokenPanelState::default();
    state.balance_loading = true;
    state.apply_balance(Err(ChainError::Transport("down".to_owned())));
    assert_eq!(state.balance_text(), "0");
    assert!(!state.balance_loading);
}

#[test]
fn amount_text_defaults_to_zero_when_blank() {
    let mut state = TokenPanelState::default();
    state.set_amount("  ".to_owned());
    assert_eq!(state.amount_text(), "0");
}
