use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chain::testing;
use chain::{ChainError, U256};
use futures::executor::block_on;

use super::*;
use crate::actions::test_support::{Fixture, account, contracts, shared};
use crate::state::contract::PLACEHOLDER;

const PRICE: &str = "getGoldPrice()";
const BALANCE: &str = "balanceOf(address)";

fn counted_refresh(events: &TxEvents) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let inner = count.clone();
    subscribe_refreshes(
        events,
        Arc::new(move || {
            inner.fetch_add(1, Ordering::SeqCst);
        }),
    );
    count
}

fn panel_with_mint(input: &str) -> Arc<std::sync::Mutex<ContractPanelState>> {
    let panel = shared::<ContractPanelState>();
    panel.lock().unwrap().mint_input = input.to_owned();
    panel
}

// =============================================================
// refresh_data
// =============================================================

#[test]
fn refresh_reads_price_and_balance() {
    let fx = Fixture::connected();
    fx.reader.set_uint_pair(PRICE, U256::from(10u64).pow(U256::from(18u64)) * U256::from(2_000u64), U256::from(1_700_000_000u64));
    fx.reader.set_uint(BALANCE, U256::from(10u64).pow(U256::from(17u64)) * U256::from(5u64));
    let panel = shared::<ContractPanelState>();

    block_on(refresh_data(&fx.cx, &panel));

    let state = panel.lock().unwrap();
    assert_eq!(state.price_text(), "2000");
    assert_eq!(state.updated_text(), "2023-11-14 22:13:20 UTC");
    assert_eq!(state.balance, "0.5");
    assert!(!state.price_loading);
    assert_eq!(fx.reader.targets_of(BALANCE), vec![contracts().token]);
}

#[test]
fn refresh_skips_balance_while_disconnected() {
    let fx = Fixture::disconnected();
    fx.reader.set_uint_pair(PRICE, U256::from(1u8), U256::ZERO);
    let panel = shared::<ContractPanelState>();

    block_on(refresh_data(&fx.cx, &panel));

    assert_eq!(fx.reader.calls_to(BALANCE), 0);
    assert_eq!(panel.lock().unwrap().updated_text(), "0");
}

#[test]
fn price_failure_still_reads_balance() {
    let fx = Fixture::connected();
    fx.reader.fail_call(PRICE, ChainError::Transport("offline".to_owned()));
    fx.reader.set_uint(BALANCE, U256::from(10u64).pow(U256::from(18u64)));
    let panel = shared::<ContractPanelState>();

    block_on(refresh_data(&fx.cx, &panel));

    let state = panel.lock().unwrap();
    assert_eq!(state.price_text(), PLACEHOLDER);
    assert_eq!(state.balance, "1");
    assert!(!state.price_loading);
}

#[test]
fn failed_reads_keep_defaults() {
    let fx = Fixture::connected();
    let panel = shared::<ContractPanelState>();

    block_on(refresh_data(&fx.cx, &panel));

    let state = panel.lock().unwrap();
    assert_eq!(state.balance, "0");
    assert_eq!(state.price_text(), PLACEHOLDER);
    assert!(!state.price_loading);
}

// =============================================================
// handle_mint / handle_redeem
// =============================================================

#[test]
fn mint_polls_then_refreshes_exactly_once() {
    let fx = Fixture::connected();
    fx.reader.push_receipt(Ok(None));
    fx.reader.push_receipt(Ok(None));
    fx.reader.push_receipt(Ok(Some(testing::success_receipt(testing::hash(1)))));
    let refreshes = counted_refresh(&fx.events);
    let panel = panel_with_mint("1.5");
    let notices = shared::<NoticeState>();

    block_on(handle_mint(&fx.cx, &panel, &notices)).unwrap();

    assert_eq!(fx.sleeper.count(), 2);
    assert_eq!(refreshes.load(Ordering::SeqCst), 1);
    let sent = fx.writer.sent();
    assert_eq!(sent[0].from, account());
    let amount = U256::from(10u64).pow(U256::from(17u64)) * U256::from(15u64);
    assert_eq!(sent[0].data, GoldToken::new(contracts().token).mint_with_collateral(amount).data);
    let state = panel.lock().unwrap();
    assert_eq!(state.last_tx, Some(testing::hash(1)));
    assert!(!state.tx_pending);
}

#[test]
fn reverted_mint_still_refreshes_and_reports() {
    let fx = Fixture::connected();
    fx.reader.push_receipt(Ok(Some(testing::reverted_receipt(testing::hash(1)))));
    let refreshes = counted_refresh(&fx.events);
    let panel = panel_with_mint("1");
    let notices = shared::<NoticeState>();

    block_on(handle_mint(&fx.cx, &panel, &notices)).unwrap();

    assert_eq!(refreshes.load(Ordering::SeqCst), 1);
    assert_eq!(panel.lock().unwrap().last_tx, Some(testing::hash(1)));
    assert!(notices.lock().unwrap().has_errors(NoticeSource::ContractPanel));
}

#[test]
fn redeem_uses_redeem_field() {
    let fx = Fixture::connected();
    fx.reader.push_receipt(Ok(Some(testing::success_receipt(testing::hash(1)))));
    let refreshes = counted_refresh(&fx.events);
    let panel = shared::<ContractPanelState>();
    panel.lock().unwrap().redeem_input = "2".to_owned();
    let notices = shared::<NoticeState>();

    block_on(handle_redeem(&fx.cx, &panel, &notices)).unwrap();

    let amount = U256::from(10u64).pow(U256::from(18u64)) * U256::from(2u64);
    assert_eq!(fx.writer.sent()[0].data, GoldToken::new(contracts().token).redeem(amount).data);
    assert_eq!(refreshes.load(Ordering::SeqCst), 1);
}

#[test]
fn empty_input_does_nothing() {
    let fx = Fixture::connected();
    let panel = panel_with_mint("   ");
    let notices = shared::<NoticeState>();

    block_on(handle_mint(&fx.cx, &panel, &notices)).unwrap();

    assert!(fx.writer.sent().is_empty());
    assert!(notices.lock().unwrap().items.is_empty());
}

#[test]
fn too_precise_amount_is_reported() {
    let fx = Fixture::connected();
    let panel = panel_with_mint("0.0000000000000000001");
    let notices = shared::<NoticeState>();

    block_on(handle_mint(&fx.cx, &panel, &notices)).unwrap();

    assert!(fx.writer.sent().is_empty());
    assert!(notices.lock().unwrap().has_errors(NoticeSource::ContractPanel));
}

#[test]
fn submission_failure_clears_hash_and_reports() {
    let fx = Fixture::connected();
    fx.writer.push_result(Err(ChainError::Rpc { code: -32000, message: "insufficient funds".to_owned() }));
    let panel = panel_with_mint("1");
    panel.lock().unwrap().last_tx = Some(testing::hash(9));
    let notices = shared::<NoticeState>();

    block_on(handle_mint(&fx.cx, &panel, &notices)).unwrap();

    let state = panel.lock().unwrap();
    assert_eq!(state.last_tx, None);
    assert!(!state.tx_pending);
    let notices = notices.lock().unwrap();
    assert_eq!(notices.items[0].message, "Mint failed. (rpc error -32000: insufficient funds)");
}

#[test]
fn receipt_timeout_keeps_hash_and_reports() {
    let fx = Fixture::connected();
    let refreshes = counted_refresh(&fx.events);
    let panel = panel_with_mint("1");
    let notices = shared::<NoticeState>();

    block_on(handle_mint(&fx.cx, &panel, &notices)).unwrap();

    assert_eq!(fx.reader.receipt_fetches(), 5);
    assert_eq!(refreshes.load(Ordering::SeqCst), 0);
    assert_eq!(panel.lock().unwrap().last_tx, Some(testing::hash(1)));
    assert!(notices.lock().unwrap().has_errors(NoticeSource::ContractPanel));
}

#[test]
fn mint_requires_wallet() {
    let fx = Fixture::disconnected();
    let panel = panel_with_mint("1");
    let notices = shared::<NoticeState>();

    assert_eq!(block_on(handle_mint(&fx.cx, &panel, &notices)), Err(ActionError::NotConnected));
}

#[test]
fn pending_transaction_blocks_another() {
    let fx = Fixture::connected();
    let panel = panel_with_mint("1");
    panel.lock().unwrap().tx_pending = true;
    let notices = shared::<NoticeState>();

    assert_eq!(block_on(handle_mint(&fx.cx, &panel, &notices)), Err(ActionError::Busy));
    assert!(fx.writer.sent().is_empty());
}
