//! Contract Interaction Panel state: mint/redeem inputs, oracle price, last
//! transaction.

#[cfg(test)]
#[path = "contract_test.rs"]
mod contract_test;

use chain::contracts::PriceRecord;
use chain::units::format_token_amount;
use chain::{TxHash, U256};

use crate::util::display::format_timestamp;

/// Placeholder for values not read yet.
pub const PLACEHOLDER: &str = "\u{2014}";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceDisplay {
    pub price: String,
    pub updated_at: String,
}

#[derive(Clone, Debug)]
pub struct ContractPanelState {
    pub mint_input: String,
    pub redeem_input: String,
    pub balance: String,
    pub price: Option<PriceDisplay>,
    pub last_tx: Option<TxHash>,
    pub tx_pending: bool,
    pub price_loading: bool,
}

impl Default for ContractPanelState {
    fn default() -> Self {
        Self {
            mint_input: String::new(),
            redeem_input: String::new(),
            balance: "0".to_owned(),
            price: None,
            last_tx: None,
            tx_pending: false,
            price_loading: false,
        }
    }
}

impl ContractPanelState {
    pub fn apply_price(&mut self, record: PriceRecord) {
        self.price = Some(PriceDisplay {
            price: format_token_amount(record.price),
            updated_at: format_timestamp(record.updated_at),
        });
    }

    pub fn apply_balance(&mut self, balance: U256) {
        self.balance = format_token_amount(balance);
    }

    #[must_use]
    pub fn price_text(&self) -> String {
        self.price.as_ref().map_or_else(|| PLACEHOLDER.to_owned(), |p| p.price.clone())
    }

    #[must_use]
    pub fn updated_text(&self) -> String {
        self.price.as_ref().map_or_else(|| PLACEHOLDER.to_owned(), |p| p.updated_at.clone())
    }

    #[must_use]
    pub fn last_tx_text(&self) -> String {
        self.last_tx.map_or_else(|| PLACEHOLDER.to_owned(), |hash| hash.to_string())
    }
}
