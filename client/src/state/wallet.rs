//! Connected-wallet state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by every panel to decide whether it can act and by the wallet bar to
//! render connect/disconnect controls. Updated from wallet responses and the
//! provider's `accountsChanged`/`chainChanged` notifications.

#[cfg(test)]
#[path = "wallet_test.rs"]
mod wallet_test;

use chain::Address;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

#[derive(Clone, Debug, Default)]
pub struct WalletState {
    pub account: Option<Address>,
    pub status: ConnectionStatus,
    /// Chain the wallet is currently on, when known.
    pub chain_id: Option<u64>,
    /// No injected provider was found in this browser.
    pub provider_missing: bool,
}

impl WalletState {
    /// Apply the account list reported by the wallet; the first entry is active.
    pub fn apply_accounts(&mut self, accounts: &[Address]) {
        match accounts.first() {
            Some(account) => {
                self.account = Some(*account);
                self.status = ConnectionStatus::Connected;
            }
            None => self.disconnect(),
        }
    }

    pub fn disconnect(&mut self) {
        self.account = None;
        self.status = ConnectionStatus::Disconnected;
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    /// True when the wallet reports a chain other than `expected`.
    #[must_use]
    pub fn wrong_network(&self, expected: u64) -> bool {
        self.chain_id.is_some_and(|id| id != expected)
    }
}
