//! Transaction lifecycle events.
//!
//! DESIGN
//! ======
//! Panels refresh in response to explicit events ("approve confirmed →
//! re-check allowance") instead of re-running whenever some reactive
//! dependency happens to change. Publishers emit a [`TxEvent`]; subscribers
//! register per [`TxKind`] and are called synchronously, in subscription
//! order.
//!
//! Handlers are cloned out of the registry before they run, so a handler may
//! subscribe, unsubscribe or publish without deadlocking.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::error::ChainError;
use crate::receipt::{Receipt, TxHash};

/// Which user action a transaction belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TxKind {
    Approve,
    Mint,
    Redeem,
    NftMint,
}

impl TxKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Approve => "Approval",
            Self::Mint => "Mint",
            Self::Redeem => "Redeem",
            Self::NftMint => "NFT mint",
        }
    }
}

/// A step in a transaction's life.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TxEvent {
    /// The wallet accepted the transaction and returned its hash.
    Submitted { kind: TxKind, hash: TxHash },
    /// A successful receipt was observed.
    Confirmed { kind: TxKind, receipt: Receipt },
    /// Submission failed, the transaction reverted, or the receipt never came.
    Failed { kind: TxKind, hash: Option<TxHash>, error: ChainError },
}

impl TxEvent {
    #[must_use]
    pub fn kind(&self) -> TxKind {
        match self {
            Self::Submitted { kind, .. } | Self::Confirmed { kind, .. } | Self::Failed { kind, .. } => *kind,
        }
    }
}

/// Handle returned by [`TxEvents::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Handler = Arc<dyn Fn(&TxEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    handlers: Vec<(SubscriptionId, TxKind, Handler)>,
}

/// Shared transaction event bus. Cloning shares the same registry.
#[derive(Clone, Default)]
pub struct TxEvents {
    inner: Arc<Mutex<Registry>>,
}

impl TxEvents {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for every event of `kind`.
    pub fn subscribe(&self, kind: TxKind, handler: impl Fn(&TxEvent) + Send + Sync + 'static) -> SubscriptionId {
        let mut registry = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        registry.next_id += 1;
        let id = SubscriptionId(registry.next_id);
        registry.handlers.push((id, kind, Arc::new(handler)));
        id
    }

    /// Register `handler` for confirmations of `kind` only.
    pub fn on_confirmed(&self, kind: TxKind, handler: impl Fn(&Receipt) + Send + Sync + 'static) -> SubscriptionId {
        self.subscribe(kind, move |event| {
            if let TxEvent::Confirmed { receipt, .. } = event {
                handler(receipt);
            }
        })
    }

    /// Register `handler` for every receipt of `kind`, successful or reverted.
    ///
    /// Timeouts and submission failures carry no receipt and are skipped.
    pub fn on_mined(&self, kind: TxKind, handler: impl Fn() + Send + Sync + 'static) -> SubscriptionId {
        self.subscribe(kind, move |event| match event {
            TxEvent::Confirmed { .. } | TxEvent::Failed { hash: Some(_), error: ChainError::Reverted(_), .. } => handler(),
            _ => {}
        })
    }

    /// Remove a subscription. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let mut registry = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        registry.handlers.retain(|(sid, _, _)| *sid != id);
    }

    /// Deliver `event` to every subscriber of its kind. Returns how many ran.
    pub fn publish(&self, event: &TxEvent) -> usize {
        let matching: Vec<Handler> = {
            let registry = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            registry
                .handlers
                .iter()
                .filter(|(_, kind, _)| *kind == event.kind())
                .map(|(_, _, handler)| Arc::clone(handler))
                .collect()
        };
        for handler in &matching {
            handler(event);
        }
        matching.len()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).handlers.len()
    }
}

impl std::fmt::Debug for TxEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TxEvents").field("subscribers", &self.subscriber_count()).finish()
    }
}
