//! Transaction hashes and receipts.

#[cfg(test)]
#[path = "receipt_test.rs"]
mod receipt_test;

pub use alloy_primitives::TxHash;
use alloy_primitives::hex;
use serde::{Deserialize, Serialize};

/// `0x1234…cdef` form for compact display.
#[must_use]
pub fn short_hash(hash: &TxHash) -> String {
    let full = hex::encode_prefixed(hash);
    format!("{}…{}", &full[..6], &full[full.len() - 4..])
}

/// Execution outcome recorded in a receipt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptStatus {
    Success,
    Reverted,
}

/// Confirmation record for a transaction included in the canonical chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub transaction_hash: TxHash,
    pub block_number: Option<u64>,
    pub status: ReceiptStatus,
}

impl Receipt {
    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.status == ReceiptStatus::Success
    }
}
