//! Token Panel state: approve collateral, then mint.
//!
//! DESIGN
//! ======
//! `approved` is derived from the last allowance read compared with the
//! amount entered at the time of that read; it is never set optimistically
//! from a transaction hash. Phases are per-operation so the button label can
//! tell a wallet prompt apart from a pending confirmation.

#[cfg(test)]
#[path = "token_test.rs"]
mod token_test;

use chain::units::{format_token_amount, parse_token_amount};
use chain::{ChainError, TxHash, U256};

pub const DEFAULT_MINT_AMOUNT: &str = "0.01";

/// Progress of one write operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TxPhase {
    #[default]
    Idle,
    /// Waiting for the user to sign in the wallet.
    AwaitingWallet,
    /// Submitted; waiting for the receipt.
    Confirming,
}

impl TxPhase {
    #[must_use]
    pub fn is_busy(self) -> bool {
        self != Self::Idle
    }
}

/// What the primary button does right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimaryAction {
    Approve,
    Mint,
}

#[derive(Clone, Debug)]
pub struct TokenPanelState {
    pub amount_input: String,
    pub approved: bool,
    pub last_allowance: Option<U256>,
    /// Formatted balance of the connected account; `None` until read.
    pub balance: Option<String>,
    pub balance_loading: bool,
    pub approve_phase: TxPhase,
    pub mint_phase: TxPhase,
    pub approve_hash: Option<TxHash>,
    pub mint_hash: Option<TxHash>,
    pub mint_succeeded: bool,
}

impl Default for TokenPanelState {
    fn default() -> Self {
        Self {
            amount_input: DEFAULT_MINT_AMOUNT.to_owned(),
            approved: false,
            last_allowance: None,
            balance: None,
            balance_loading: false,
            approve_phase: TxPhase::Idle,
            mint_phase: TxPhase::Idle,
            approve_hash: None,
            mint_hash: None,
            mint_succeeded: false,
        }
    }
}

impl TokenPanelState {
    /// Record an allowance read made while `requested_input` was entered.
    ///
    /// Approved only when the read succeeded, the input parses, and the
    /// allowance covers it. A failed read leaves `last_allowance` untouched.
    pub fn apply_allowance(&mut self, result: Result<U256, ChainError>, requested_input: &str) {
        match result {
            Ok(allowance) => {
                self.last_allowance = Some(allowance);
                self.approved = parse_token_amount(requested_input).is_ok_and(|requested| allowance >= requested);
            }
            Err(_) => self.approved = false,
        }
    }

    /// Last allowance read, in human units.
    #[must_use]
    pub fn allowance_text(&self) -> Option<String> {
        self.last_allowance.map(format_token_amount)
    }

    /// Record a balance read and end the loading state.
    pub fn apply_balance(&mut self, result: Result<U256, ChainError>) {
        self.balance = Some(result.map_or_else(|_| "0".to_owned(), format_token_amount));
        self.balance_loading = false;
    }

    /// `approved` keeps its value until the next allowance check.
    pub fn set_amount(&mut self, input: String) {
        self.amount_input = input;
        self.mint_succeeded = false;
    }

    #[must_use]
    pub fn primary_action(&self) -> PrimaryAction {
        if self.approved { PrimaryAction::Mint } else { PrimaryAction::Approve }
    }

    #[must_use]
    pub fn primary_action_label(&self) -> &'static str {
        match self.primary_action() {
            PrimaryAction::Approve if self.approve_phase.is_busy() => "Approving...",
            PrimaryAction::Approve => "Approve Collateral",
            PrimaryAction::Mint => match self.mint_phase {
                TxPhase::AwaitingWallet => "Confirm in Wallet...",
                TxPhase::Confirming => "Minting...",
                TxPhase::Idle => "Mint Tokens",
            },
        }
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.approve_phase.is_busy() || self.mint_phase.is_busy()
    }

    #[must_use]
    pub fn balance_text(&self) -> String {
        self.balance.clone().unwrap_or_else(|| "0".to_owned())
    }

    /// The entered amount as shown in the collateral / receive summary.
    #[must_use]
    pub fn amount_text(&self) -> &str {
        let trimmed = self.amount_input.trim();
        if trimmed.is_empty() { "0" } else { trimmed }
    }
}
