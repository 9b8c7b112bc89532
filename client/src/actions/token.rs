//! Token Panel operations: allowance and balance reads, approve, mint.
//!
//! Approve and mint only update the panel's phases. Refreshing allowance
//! and balance afterwards is driven by confirmation events through
//! [`subscribe_refreshes`].

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use chain::contracts::{Erc20, GoldToken};
use chain::events::{SubscriptionId, TxEvents, TxKind};
use chain::units::parse_token_amount;

use super::{ActionContext, ActionError, Refresh, report_failure, report_invalid_amount};
use crate::state::Store;
use crate::state::notice::{NoticeSource, NoticeState};
use crate::state::token::{TokenPanelState, TxPhase};

const APPROVE_FAILED: &str = "Approval failed. Please try again.";
const MINT_FAILED: &str = "Minting failed. Please try again.";

/// Read the collateral allowance granted to the token contract and compare it
/// with the amount entered right now. Skipped while disconnected.
pub async fn fetch_allowance(cx: &ActionContext, panel: &impl Store<TokenPanelState>) {
    let Some(owner) = cx.session.account else {
        return;
    };
    let requested = panel.peek(|s| s.amount_input.clone());
    let result = Erc20::new(cx.contracts.collateral)
        .allowance(cx.session.reader.as_ref(), owner, cx.contracts.token)
        .await;
    if let Err(e) = &result {
        leptos::logging::warn!("allowance read failed: {e}");
    }
    panel.modify(|s| s.apply_allowance(result, &requested));
}

/// Read the connected account's token balance; failures display `"0"`.
pub async fn fetch_balance(cx: &ActionContext, panel: &impl Store<TokenPanelState>) {
    let Some(account) = cx.session.account else {
        return;
    };
    panel.modify(|s| s.balance_loading = true);
    let result = GoldToken::new(cx.contracts.token).balance_of(cx.session.reader.as_ref(), account).await;
    if let Err(e) = &result {
        leptos::logging::warn!("balance read failed: {e}");
    }
    panel.modify(|s| s.apply_balance(result));
}

/// Approve the token contract to pull the entered amount of collateral.
///
/// # Errors
///
/// [`ActionError::NotConnected`] without a wallet, [`ActionError::Busy`]
/// while another panel transaction is outstanding.
pub async fn handle_approve(
    cx: &ActionContext,
    panel: &impl Store<TokenPanelState>,
    notices: &impl Store<NoticeState>,
) -> Result<(), ActionError> {
    cx.require_wallet()?;
    if panel.peek(TokenPanelState::is_busy) {
        return Err(ActionError::Busy);
    }
    notices.modify(|n| n.clear_source(NoticeSource::TokenPanel));
    let input = panel.peek(|s| s.amount_input.clone());
    let amount = match parse_token_amount(&input) {
        Ok(amount) => amount,
        Err(e) => {
            report_invalid_amount(notices, NoticeSource::TokenPanel, &e);
            return Ok(());
        }
    };

    panel.modify(|s| {
        s.approve_phase = TxPhase::AwaitingWallet;
        s.approve_hash = None;
    });
    let tx = Erc20::new(cx.contracts.collateral).approve(cx.contracts.token, amount);
    let outcome = cx
        .submit_and_confirm(TxKind::Approve, tx, |hash| {
            panel.modify(|s| {
                s.approve_phase = TxPhase::Confirming;
                s.approve_hash = Some(hash);
            });
        })
        .await;
    panel.modify(|s| s.approve_phase = TxPhase::Idle);

    if let Err(e) = outcome {
        report_failure(notices, NoticeSource::TokenPanel, APPROVE_FAILED, &e);
    }
    Ok(())
}

/// Mint tokens against the approved collateral.
///
/// # Errors
///
/// Same as [`handle_approve`].
pub async fn handle_mint(
    cx: &ActionContext,
    panel: &impl Store<TokenPanelState>,
    notices: &impl Store<NoticeState>,
) -> Result<(), ActionError> {
    cx.require_wallet()?;
    if panel.peek(TokenPanelState::is_busy) {
        return Err(ActionError::Busy);
    }
    notices.modify(|n| n.clear_source(NoticeSource::TokenPanel));
    let input = panel.peek(|s| s.amount_input.clone());
    let amount = match parse_token_amount(&input) {
        Ok(amount) => amount,
        Err(e) => {
            report_invalid_amount(notices, NoticeSource::TokenPanel, &e);
            return Ok(());
        }
    };

    panel.modify(|s| {
        s.mint_phase = TxPhase::AwaitingWallet;
        s.mint_hash = None;
        s.mint_succeeded = false;
    });
    let tx = GoldToken::new(cx.contracts.token).mint_with_collateral(amount);
    let outcome = cx
        .submit_and_confirm(TxKind::Mint, tx, |hash| {
            panel.modify(|s| {
                s.mint_phase = TxPhase::Confirming;
                s.mint_hash = Some(hash);
            });
        })
        .await;
    panel.modify(|s| {
        s.mint_phase = TxPhase::Idle;
        s.mint_succeeded = outcome.is_ok();
    });

    if let Err(e) = outcome {
        report_failure(notices, NoticeSource::TokenPanel, MINT_FAILED, &e);
    }
    Ok(())
}

/// Approve confirmations re-check the allowance; mint confirmations refresh
/// the balance and the (now reduced) allowance.
pub fn subscribe_refreshes(
    events: &TxEvents,
    refresh_allowance: Refresh,
    refresh_balance: Refresh,
) -> Vec<SubscriptionId> {
    let after_approve = refresh_allowance.clone();
    vec![
        events.on_confirmed(TxKind::Approve, move |_| after_approve()),
        events.on_confirmed(TxKind::Mint, move |_| {
            refresh_balance();
            refresh_allowance();
        }),
    ]
}
