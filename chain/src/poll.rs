//! Bounded receipt polling with cancellation.
//!
//! A submitted transaction is confirmed by asking for its receipt until one
//! appears. The wait is bounded by [`PollPolicy::max_attempts`] and can be
//! abandoned through a [`CancelToken`] when the owning view goes away, so no
//! loop outlives the page that started it.
//!
//! Fetch errors count as "not yet": nodes routinely fail receipt lookups for
//! transactions they have not seen propagate.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::client::ChainReader;
use crate::error::ChainError;
use crate::events::{TxEvent, TxEvents, TxKind};
use crate::receipt::{Receipt, TxHash};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_MAX_ATTEMPTS: u32 = 120;

/// How often and how long to look for a receipt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    /// Total receipt fetches before giving up; at least one is always made.
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self { interval: DEFAULT_POLL_INTERVAL, max_attempts: DEFAULT_MAX_ATTEMPTS }
    }
}

/// Waits between attempts. Browser builds use a timer; tests count calls.
#[async_trait(?Send)]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Shared cancellation flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Fetch the receipt now, then once per interval until it appears.
///
/// # Errors
///
/// Returns [`ChainError::Cancelled`] once `cancel` is set (checked before
/// every fetch) and [`ChainError::ReceiptTimeout`] after
/// `policy.max_attempts` fetches without a receipt.
pub async fn wait_for_receipt(
    reader: &dyn ChainReader,
    hash: TxHash,
    policy: PollPolicy,
    sleeper: &dyn Sleeper,
    cancel: &CancelToken,
) -> Result<Receipt, ChainError> {
    let max_attempts = policy.max_attempts.max(1);
    let mut attempts = 0;
    loop {
        if cancel.is_cancelled() {
            return Err(ChainError::Cancelled);
        }
        attempts += 1;
        if let Ok(Some(receipt)) = reader.transaction_receipt(hash).await {
            return Ok(receipt);
        }
        if attempts >= max_attempts {
            return Err(ChainError::ReceiptTimeout { attempts });
        }
        sleeper.sleep(policy.interval).await;
    }
}

/// Wait for `hash` and publish the outcome on `events`.
///
/// A successful receipt publishes [`TxEvent::Confirmed`]; a reverted receipt
/// or a timeout publishes [`TxEvent::Failed`]. Cancellation publishes
/// nothing since nobody is left to react.
///
/// # Errors
///
/// Returns [`ChainError::Reverted`], [`ChainError::ReceiptTimeout`] or
/// [`ChainError::Cancelled`].
pub async fn confirm_transaction(
    events: &TxEvents,
    kind: TxKind,
    reader: &dyn ChainReader,
    hash: TxHash,
    policy: PollPolicy,
    sleeper: &dyn Sleeper,
    cancel: &CancelToken,
) -> Result<Receipt, ChainError> {
    match wait_for_receipt(reader, hash, policy, sleeper, cancel).await {
        Ok(receipt) if receipt.succeeded() => {
            events.publish(&TxEvent::Confirmed { kind, receipt: receipt.clone() });
            Ok(receipt)
        }
        Ok(_) => {
            let error = ChainError::Reverted(hash.to_string());
            events.publish(&TxEvent::Failed { kind, hash: Some(hash), error: error.clone() });
            Err(error)
        }
        Err(ChainError::Cancelled) => Err(ChainError::Cancelled),
        Err(error) => {
            events.publish(&TxEvent::Failed { kind, hash: Some(hash), error: error.clone() });
            Err(error)
        }
    }
}
