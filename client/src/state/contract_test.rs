use super::*;

#[test]
fn defaults_show_placeholders() {
    let state = ContractPanelState::default();
    assert_eq!(state.balance, "0");
    assert_eq!(state.price_text(), PLACEHOLDER);
    assert_eq!(state.updated_text(), PLACEHOLDER);
    assert_eq!(state.last_tx_text(), PLACEHOLDER);
    assert!(!state.tx_pending);
}

#[test]
fn apply_price_formats_value_and_timestamp() {
    let mut state = ContractPanelState::default();
    state.apply_price(PriceRecord {
        price: U256::from(2_345u64) * U256::from(10u64).pow(U256::from(16u64)),
        updated_at: 1_700_000_000,
    });
    assert_eq!(state.price_text(), "23.45");
    assert_eq!(state.updated_text(), "2023-11-14 22:13:20 UTC");
}

#[test]
fn zero_timestamp_renders_as_zero() {
    let mut state = ContractPanelState::default();
    state.apply_price(PriceRecord { price: U256::ZERO, updated_at: 0 });
    assert_eq!(state.price_text(), "0");
    assert_eq!(state.updated_text(), "0");
}

#[test]
fn apply_balance_uses_human_units() {
    let mut state = ContractPanelState::default();
    state.apply_balance(U256::from(10u64).pow(U256::from(18u64)) * U256::from(3u64));
    assert_eq!(state.balance, "3");
}

#[test]
fn last_tx_text_is_full_hash() {
    let mut state = ContractPanelState::default();
    state.last_tx = Some(TxHash::repeat_byte(0xab));
    assert_eq!(state.last_tx_text(), format!("0x{}", "ab".repeat(32)));
}
