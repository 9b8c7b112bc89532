//! Typed bindings for the three contracts the UI talks to.
//!
//! - [`GoldToken`]: the collateral-backed stablecoin (balance, oracle price,
//!   mint with collateral, redeem).
//! - [`Erc20`]: the collateral token; the stablecoin pulls collateral from
//!   the holder, so it must be approved as spender first.
//! - [`NftCollection`]: sequential-id NFT collection minted by token URI.
//!
//! Reads go through a [`ChainReader`]; writes return a [`PreparedTx`] the
//! caller submits through its [`crate::Session`].

#[cfg(test)]
#[path = "contracts_test.rs"]
mod contracts_test;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::abi::{self, Token};
use crate::address::Address;
use crate::client::ChainReader;
use crate::error::ChainError;

/// Addresses of the deployed contracts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractAddresses {
    /// Stablecoin token contract (also the collateral spender).
    pub token: Address,
    /// Collateral ERC-20 contract.
    pub collateral: Address,
    /// NFT collection contract.
    pub nft: Address,
}

/// Client configuration served by the host at `GET /api/config`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    pub chain_id: u64,
    /// Path of the host's read-only JSON-RPC proxy.
    pub rpc_path: String,
    pub contracts: ContractAddresses,
    /// HTTP gateway used to display `ipfs://` media.
    pub ipfs_gateway: String,
}

/// Unsigned call data addressed to a contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedTx {
    pub to: Address,
    pub data: Vec<u8>,
}

/// Oracle price as returned by `getGoldPrice()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceRecord {
    /// Price scaled by 10^18.
    pub price: U256,
    /// Unix seconds of the last oracle update.
    pub updated_at: u64,
}

/// Saturating conversion for counters and timestamps that fit a `u64` in practice.
#[must_use]
pub fn saturating_u64(value: U256) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

async fn read(reader: &dyn ChainReader, to: Address, signature: &str, args: &[Token<'_>]) -> Result<Vec<u8>, ChainError> {
    reader.call(to, abi::encode_call(signature, args)).await
}

/// The collateral-backed stablecoin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoldToken {
    pub address: Address,
}

impl GoldToken {
    #[must_use]
    pub const fn new(address: Address) -> Self {
        Self { address }
    }

    /// # Errors
    ///
    /// Returns the reader's failure or a decode error.
    pub async fn balance_of(&self, reader: &dyn ChainReader, account: Address) -> Result<U256, ChainError> {
        let data = read(reader, self.address, "balanceOf(address)", &[Token::Address(account)]).await?;
        abi::decode_uint(&data)
    }

    /// # Errors
    ///
    /// Returns the reader's failure or a decode error.
    pub async fn gold_price(&self, reader: &dyn ChainReader) -> Result<PriceRecord, ChainError> {
        let data = read(reader, self.address, "getGoldPrice()", &[]).await?;
        let (price, updated_at) = abi::decode_uint_pair(&data)?;
        Ok(PriceRecord { price, updated_at: saturating_u64(updated_at) })
    }

    #[must_use]
    pub fn mint_with_collateral(&self, amount: U256) -> PreparedTx {
        PreparedTx { to: self.address, data: abi::encode_call("mintWithCollateral(uint256)", &[Token::Uint(amount)]) }
    }

    #[must_use]
    pub fn redeem(&self, amount: U256) -> PreparedTx {
        PreparedTx { to: self.address, data: abi::encode_call("redeem(uint256)", &[Token::Uint(amount)]) }
    }
}

/// The collateral ERC-20; only allowance and approve are needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Erc20 {
    pub address: Address,
}

impl Erc20 {
    #[must_use]
    pub const fn new(address: Address) -> Self {
        Self { address }
    }

    /// # Errors
    ///
    /// Returns the reader's failure or a decode error.
    pub async fn allowance(&self, reader: &dyn ChainReader, owner: Address, spender: Address) -> Result<U256, ChainError> {
        let data = read(
            reader,
            self.address,
            "allowance(address,address)",
            &[Token::Address(owner), Token::Address(spender)],
        )
        .await?;
        abi::decode_uint(&data)
    }

    #[must_use]
    pub fn approve(&self, spender: Address, amount: U256) -> PreparedTx {
        PreparedTx {
            to: self.address,
            data: abi::encode_call("approve(address,uint256)", &[Token::Address(spender), Token::Uint(amount)]),
        }
    }
}

/// Sequential-id NFT collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NftCollection {
    pub address: Address,
}

impl NftCollection {
    #[must_use]
    pub const fn new(address: Address) -> Self {
        Self { address }
    }

    /// # Errors
    ///
    /// Returns the reader's failure or a decode error.
    pub async fn total_minted(&self, reader: &dyn ChainReader) -> Result<U256, ChainError> {
        abi::decode_uint(&read(reader, self.address, "totalMinted()", &[]).await?)
    }

    /// # Errors
    ///
    /// Returns the reader's failure or a decode error.
    pub async fn remaining_supply(&self, reader: &dyn ChainReader) -> Result<U256, ChainError> {
        abi::decode_uint(&read(reader, self.address, "remainingSupply()", &[]).await?)
    }

    /// The collection's `_baseURI()` accessor.
    ///
    /// # Errors
    ///
    /// Returns the reader's failure or a decode error.
    pub async fn base_uri(&self, reader: &dyn ChainReader) -> Result<String, ChainError> {
        abi::decode_string(&read(reader, self.address, "_baseURI()", &[]).await?)
    }

    #[must_use]
    pub fn mint(&self, token_uri: &str) -> PreparedTx {
        PreparedTx { to: self.address, data: abi::encode_call("mint(string)", &[Token::String(token_uri)]) }
    }
}
