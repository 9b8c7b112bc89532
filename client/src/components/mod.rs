//! Page components and the shared wiring they use to run panel operations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Panels read their state from context signals and run async operations from
//! `crate::actions` through a [`PanelHandle`]. The handle owns the panel's
//! cancellation token and event subscriptions; both end when the panel
//! unmounts, so no receipt poll or refresh outlives its view.

pub mod contract_panel;
pub mod nft_gallery;
pub mod notice_banner;
pub mod token_panel;
pub mod wallet_bar;

use std::future::Future;

use chain::events::{SubscriptionId, TxEvents};
use chain::poll::CancelToken;
use leptos::prelude::*;

use crate::actions::{ActionContext, ActionError};
use crate::net::context::ChainContext;
use crate::state::wallet::WalletState;
use crate::util::prompt;

/// Everything a mounted panel needs to start operations.
#[derive(Clone, Copy)]
pub struct PanelHandle {
    chain: RwSignal<Option<ChainContext>>,
    wallet: RwSignal<WalletState>,
    deps: StoredValue<(TxEvents, CancelToken)>,
}

impl PanelHandle {
    /// Create a handle scoped to the current component.
    pub fn mount() -> Self {
        let chain = expect_context::<RwSignal<Option<ChainContext>>>();
        let wallet = expect_context::<RwSignal<WalletState>>();
        let events = expect_context::<TxEvents>();
        let cancel = CancelToken::new();
        let on_unmount = cancel.clone();
        on_cleanup(move || on_unmount.cancel());
        Self { chain, wallet, deps: StoredValue::new((events, cancel)) }
    }

    pub fn events(&self) -> TxEvents {
        self.deps.with_value(|(events, _)| events.clone())
    }

    /// Tracked read: re-runs the calling effect when the account or the
    /// loaded configuration changes.
    pub fn track_session(&self) -> (Option<chain::Address>, bool) {
        (self.wallet.with(|w| w.account), self.chain.with(Option::is_some))
    }

    /// Context for one operation, or `None` before configuration loads.
    pub fn action_context(&self) -> Option<ActionContext> {
        let chain = self.chain.get_untracked()?;
        let account = self.wallet.with_untracked(|w| w.account);
        let (events, cancel) = self.deps.get_value();
        Some(chain.action_context(account, events, cancel))
    }

    /// Run `task` on the browser task queue with a fresh action context.
    pub fn spawn<F, Fut>(self, task: F)
    where
        F: FnOnce(ActionContext) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let Some(cx) = self.action_context() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(task(cx));
        #[cfg(not(feature = "hydrate"))]
        let _ = (cx, task);
    }

    /// Drop `ids` from the event bus when the panel unmounts.
    pub fn unsubscribe_on_cleanup(&self, ids: Vec<SubscriptionId>) {
        let events = self.events();
        on_cleanup(move || {
            for id in ids {
                events.unsubscribe(id);
            }
        });
    }
}

/// Missing wallets block with a prompt; a busy panel ignores the click.
pub fn prompt_on_error(result: Result<(), ActionError>) {
    if let Err(ActionError::NotConnected) = result {
        prompt::alert(&ActionError::NotConnected.to_string());
    }
}
