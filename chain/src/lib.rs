//! Chain primitives shared by the `goldstable` host and the Leptos client.
//!
//! This crate owns everything that talks about the chain without depending on
//! a browser or a server: fixed-point token amounts, addresses and hashes,
//! ABI call encoding, JSON-RPC envelopes, typed contract bindings, and the
//! reader/writer capabilities panels use to reach a node or a wallet.
//!
//! The capabilities are traits so the same panel logic runs against a browser
//! wallet in production and against hand-written mocks in tests.

pub mod abi;
pub mod address;
pub mod client;
pub mod contracts;
pub mod error;
pub mod events;
pub mod poll;
pub mod receipt;
pub mod rpc;
#[cfg(any(test, feature = "test-utils"))]
pub mod testing;
pub mod units;

pub use alloy_primitives::U256;
pub use address::Address;
pub use client::{ChainReader, ChainWriter, Session};
pub use error::{AmountError, ChainError};
pub use receipt::{Receipt, ReceiptStatus, TxHash};
