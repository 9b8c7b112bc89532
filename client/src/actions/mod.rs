//! Async panel operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components gather an [`ActionContext`] (session, contract addresses, event
//! bus, polling policy, cancellation) and hand it to these functions together
//! with the panel's state [`Store`]. Nothing here touches the DOM, so every
//! operation is exercised in tests against mock readers and writers.
//!
//! ERROR HANDLING
//! ==============
//! Missing wallet and busy panels come back as [`ActionError`] for the caller
//! to prompt on. Every other failure is logged and reported on the notice
//! channel; cancellation is silent.

pub mod contract;
pub mod nft;
pub mod token;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use chain::contracts::{ContractAddresses, PreparedTx};
use chain::events::{TxEvent, TxEvents, TxKind};
use chain::poll::{CancelToken, PollPolicy, Sleeper, confirm_transaction};
use chain::{AmountError, ChainError, Receipt, Session, TxHash};

use crate::state::Store;
use crate::state::notice::{NoticeSource, NoticeState};

/// Refresh callback registered on the event bus.
pub type Refresh = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("Please connect your wallet first.")]
    NotConnected,
    #[error("another transaction is still pending")]
    Busy,
}

/// Everything a panel operation needs besides its own state.
#[derive(Clone)]
pub struct ActionContext {
    pub session: Session,
    pub contracts: ContractAddresses,
    pub events: TxEvents,
    pub policy: PollPolicy,
    pub sleeper: Arc<dyn Sleeper>,
    pub cancel: CancelToken,
}

impl ActionContext {
    pub(crate) fn require_wallet(&self) -> Result<(), ActionError> {
        self.session.require_writer().map(|_| ()).map_err(|_| ActionError::NotConnected)
    }

    /// Submit `tx`, announce it, then wait for its receipt.
    ///
    /// `on_submitted` runs once the wallet returns a hash. Submission
    /// failures are published as [`TxEvent::Failed`] without a hash.
    pub(crate) async fn submit_and_confirm(
        &self,
        kind: TxKind,
        tx: PreparedTx,
        on_submitted: impl FnOnce(TxHash),
    ) -> Result<Receipt, ChainError> {
        let hash = match self.session.submit(tx).await {
            Ok(hash) => hash,
            Err(error) => {
                self.events.publish(&TxEvent::Failed { kind, hash: None, error: error.clone() });
                return Err(error);
            }
        };
        self.events.publish(&TxEvent::Submitted { kind, hash });
        on_submitted(hash);
        confirm_transaction(
            &self.events,
            kind,
            self.session.reader.as_ref(),
            hash,
            self.policy,
            self.sleeper.as_ref(),
            &self.cancel,
        )
        .await
    }
}

/// Log a failed operation and surface it, unless its owner went away.
pub(crate) fn report_failure(
    notices: &impl Store<NoticeState>,
    source: NoticeSource,
    summary: &str,
    error: &ChainError,
) {
    if *error == ChainError::Cancelled {
        return;
    }
    leptos::logging::warn!("{summary} {error}");
    notices.modify(|n| {
        n.chain_failure(source, summary, error);
    });
}

pub(crate) fn report_invalid_amount(notices: &impl Store<NoticeState>, source: NoticeSource, error: &AmountError) {
    notices.modify(|n| {
        n.error(source, "Invalid Amount", &format!("Enter a valid amount: {error}."));
    });
}
