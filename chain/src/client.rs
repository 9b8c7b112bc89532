//! Reader/writer capabilities and the per-panel session context.
//!
//! DESIGN
//! ======
//! Panels never reach for a global wallet. Each operation receives a
//! [`Session`]: the connected account (if any), a [`ChainReader`] for
//! read-only calls and receipts, and an optional [`ChainWriter`] able to sign
//! and submit. Production wires both to JSON-RPC transports through
//! [`RpcClient`]; tests substitute in-memory mocks.
//!
//! Futures are not required to be `Send` because browser transports hold
//! JS promises, but the capability objects themselves are `Send + Sync` so
//! they can live in UI context.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::address::Address;
use crate::error::ChainError;
use crate::receipt::{Receipt, TxHash};
use crate::rpc::{self, RpcRequest, RpcResponse};

/// Carries one JSON-RPC request to a node or wallet and returns its response.
#[async_trait(?Send)]
pub trait RpcTransport: Send + Sync {
    async fn request(&self, request: RpcRequest) -> Result<RpcResponse, ChainError>;
}

/// Read-only chain access.
#[async_trait(?Send)]
pub trait ChainReader: Send + Sync {
    /// Execute a read-only contract call and return the raw return data.
    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, ChainError>;

    /// Fetch a receipt; `None` while the transaction is still pending.
    async fn transaction_receipt(&self, hash: TxHash) -> Result<Option<Receipt>, ChainError>;
}

/// Transaction submission through a signing wallet.
#[async_trait(?Send)]
pub trait ChainWriter: Send + Sync {
    async fn send_transaction(&self, from: Address, to: Address, data: Vec<u8>) -> Result<TxHash, ChainError>;
}

/// JSON-RPC client over any [`RpcTransport`].
pub struct RpcClient<T> {
    transport: T,
    next_id: AtomicU64,
}

impl<T: RpcTransport> RpcClient<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport, next_id: AtomicU64::new(1) }
    }

    async fn send(&self, build: impl FnOnce(u64) -> RpcRequest) -> Result<serde_json::Value, ChainError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.transport.request(build(id)).await?.into_result()
    }

    /// Accounts the wallet has already exposed to this origin.
    ///
    /// # Errors
    ///
    /// Returns transport, RPC or decode failures.
    pub async fn accounts(&self) -> Result<Vec<Address>, ChainError> {
        rpc::parse_accounts(&self.send(RpcRequest::accounts).await?)
    }

    /// Ask the wallet to connect; the wallet may prompt the user.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Rpc`] with code 4001 when the user declines.
    pub async fn request_accounts(&self) -> Result<Vec<Address>, ChainError> {
        rpc::parse_accounts(&self.send(RpcRequest::request_accounts).await?)
    }

    /// # Errors
    ///
    /// Returns transport, RPC or decode failures.
    pub async fn chain_id(&self) -> Result<u64, ChainError> {
        rpc::parse_quantity(&self.send(RpcRequest::chain_id).await?)
    }
}

#[async_trait(?Send)]
impl<T: RpcTransport> ChainReader for RpcClient<T> {
    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, ChainError> {
        rpc::parse_hex_data(&self.send(|id| RpcRequest::eth_call(id, to, &data)).await?)
    }

    async fn transaction_receipt(&self, hash: TxHash) -> Result<Option<Receipt>, ChainError> {
        rpc::parse_receipt(&self.send(|id| RpcRequest::transaction_receipt(id, hash)).await?)
    }
}

#[async_trait(?Send)]
impl<T: RpcTransport> ChainWriter for RpcClient<T> {
    async fn send_transaction(&self, from: Address, to: Address, data: Vec<u8>) -> Result<TxHash, ChainError> {
        rpc::parse_tx_hash(&self.send(|id| RpcRequest::send_transaction(id, from, to, &data)).await?)
    }
}

/// Explicit context handed to every panel operation.
#[derive(Clone)]
pub struct Session {
    pub account: Option<Address>,
    pub reader: Arc<dyn ChainReader>,
    pub writer: Option<Arc<dyn ChainWriter>>,
}

impl Session {
    /// A session with no connected account.
    #[must_use]
    pub fn disconnected(reader: Arc<dyn ChainReader>) -> Self {
        Self { account: None, reader, writer: None }
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    /// # Errors
    ///
    /// Returns [`ChainError::NotConnected`] when no account is connected.
    pub fn require_account(&self) -> Result<Address, ChainError> {
        self.account.ok_or(ChainError::NotConnected)
    }

    /// The connected account together with a writer able to sign for it.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::NotConnected`] when either is missing.
    pub fn require_writer(&self) -> Result<(Address, &dyn ChainWriter), ChainError> {
        let account = self.require_account()?;
        let writer = self.writer.as_deref().ok_or(ChainError::NotConnected)?;
        Ok((account, writer))
    }

    /// Submit a prepared call from the connected account.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::NotConnected`] without a wallet, otherwise the
    /// writer's failure (including user rejection).
    pub async fn submit(&self, tx: crate::contracts::PreparedTx) -> Result<TxHash, ChainError> {
        let (from, writer) = self.require_writer()?;
        writer.send_transaction(from, tx.to, tx.data).await
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("account", &self.account)
            .field("writer", &self.writer.is_some())
            .finish_non_exhaustive()
    }
}
