//! Contract Interaction Panel operations: price/balance refresh, mint and
//! redeem by amount.

#[cfg(test)]
#[path = "contract_test.rs"]
mod contract_test;

use chain::contracts::GoldToken;
use chain::events::{SubscriptionId, TxEvents, TxKind};
use chain::units::parse_token_amount;

use super::{ActionContext, ActionError, Refresh, report_failure, report_invalid_amount};
use crate::state::Store;
use crate::state::contract::ContractPanelState;
use crate::state::notice::{NoticeSource, NoticeState};

/// Read the oracle price and, when connected, the account balance.
///
/// The reads are independent: a failure in one is logged and the other
/// still updates the panel.
pub async fn refresh_data(cx: &ActionContext, panel: &impl Store<ContractPanelState>) {
    panel.modify(|s| s.price_loading = true);
    let token = GoldToken::new(cx.contracts.token);
    let reader = cx.session.reader.as_ref();

    match token.gold_price(reader).await {
        Ok(record) => panel.modify(|s| s.apply_price(record)),
        Err(e) => leptos::logging::warn!("price read failed: {e}"),
    }
    if let Some(account) = cx.session.account {
        match token.balance_of(reader, account).await {
            Ok(balance) => panel.modify(|s| s.apply_balance(balance)),
            Err(e) => leptos::logging::warn!("balance read failed: {e}"),
        }
    }

    panel.modify(|s| s.price_loading = false);
}

/// Mint the amount in the mint field.
///
/// # Errors
///
/// [`ActionError::NotConnected`] without a wallet, [`ActionError::Busy`]
/// while a previous transaction is pending.
pub async fn handle_mint(
    cx: &ActionContext,
    panel: &impl Store<ContractPanelState>,
    notices: &impl Store<NoticeState>,
) -> Result<(), ActionError> {
    submit_amount(cx, panel, notices, TxKind::Mint).await
}

/// Redeem the amount in the redeem field.
///
/// # Errors
///
/// Same as [`handle_mint`].
pub async fn handle_redeem(
    cx: &ActionContext,
    panel: &impl Store<ContractPanelState>,
    notices: &impl Store<NoticeState>,
) -> Result<(), ActionError> {
    submit_amount(cx, panel, notices, TxKind::Redeem).await
}

async fn submit_amount(
    cx: &ActionContext,
    panel: &impl Store<ContractPanelState>,
    notices: &impl Store<NoticeState>,
    kind: TxKind,
) -> Result<(), ActionError> {
    cx.require_wallet()?;
    if panel.peek(|s| s.tx_pending) {
        return Err(ActionError::Busy);
    }
    let input = panel.peek(|s| if kind == TxKind::Redeem { s.redeem_input.clone() } else { s.mint_input.clone() });
    if input.trim().is_empty() {
        return Ok(());
    }
    notices.modify(|n| n.clear_source(NoticeSource::ContractPanel));
    let amount = match parse_token_amount(&input) {
        Ok(amount) => amount,
        Err(e) => {
            report_invalid_amount(notices, NoticeSource::ContractPanel, &e);
            return Ok(());
        }
    };

    let token = GoldToken::new(cx.contracts.token);
    let tx = if kind == TxKind::Redeem { token.redeem(amount) } else { token.mint_with_collateral(amount) };
    panel.modify(|s| {
        s.tx_pending = true;
        s.last_tx = None;
    });
    let outcome = cx.submit_and_confirm(kind, tx, |hash| panel.modify(|s| s.last_tx = Some(hash))).await;
    panel.modify(|s| s.tx_pending = false);

    if let Err(e) = outcome {
        report_failure(notices, NoticeSource::ContractPanel, &format!("{} failed.", kind.label()), &e);
    }
    Ok(())
}

/// Any mint or redeem receipt refreshes price and balance, reverted ones
/// included.
pub fn subscribe_refreshes(events: &TxEvents, refresh: Refresh) -> Vec<SubscriptionId> {
    let after_mint = refresh.clone();
    vec![
        events.on_mined(TxKind::Mint, move || after_mint()),
        events.on_mined(TxKind::Redeem, move || refresh()),
    ]
}
