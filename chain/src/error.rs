//! Error types for amount parsing and chain access.

/// Failure converting a human-entered decimal string to fixed-point.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,
    #[error("amount contains an invalid character: {0:?}")]
    InvalidCharacter(char),
    #[error("amount has more than one decimal point")]
    MultipleDecimalPoints,
    #[error("amount has more than {max} fractional digits")]
    TooPrecise { max: usize },
    #[error("amount does not fit in 256 bits")]
    Overflow,
}

/// Errors produced while reading from or writing to the chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    /// No account (or no signing wallet) is connected.
    #[error("wallet not connected")]
    NotConnected,

    /// The node or wallet answered with a JSON-RPC error object.
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The request never produced a JSON-RPC answer.
    #[error("transport failed: {0}")]
    Transport(String),

    /// Returned data did not have the expected shape.
    #[error("decode failed: {0}")]
    Decode(String),

    /// The receipt did not appear within the polling budget.
    #[error("no receipt after {attempts} attempts")]
    ReceiptTimeout { attempts: u32 },

    /// The wait was abandoned by its owner.
    #[error("cancelled")]
    Cancelled,

    /// The transaction was included but reverted.
    #[error("transaction {0} reverted")]
    Reverted(String),
}

impl ChainError {
    /// EIP-1193 code 4001: the user rejected the request in their wallet.
    #[must_use]
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, Self::Rpc { code: 4001, .. })
    }
}

impl From<alloy_primitives::hex::FromHexError> for ChainError {
    fn from(e: alloy_primitives::hex::FromHexError) -> Self {
        Self::Decode(e.to_string())
    }
}

/// Failure parsing a `0x`-prefixed hex identifier (address or hash).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("missing 0x prefix")]
    MissingPrefix,
    #[error("expected {expected} hex digits, found {found}")]
    Length { expected: usize, found: usize },
    #[error("invalid hex: {0}")]
    Hex(String),
    #[error("mixed-case address does not match its checksum")]
    Checksum,
}
