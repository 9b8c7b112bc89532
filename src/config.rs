//! Host configuration parsed from environment variables.

use chain::Address;
use chain::contracts::{ChainConfig, ContractAddresses};
use client::util::media::DEFAULT_IPFS_GATEWAY;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CHAIN_ID: u64 = 1;
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_IMAGE_HOSTS: &str = "ipfs.io,gateway.pinata.cloud";
pub const RPC_PROXY_PATH: &str = "/api/rpc";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),

    #[error("invalid {var}: {message}")]
    Invalid { var: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub rpc_url: String,
    pub chain_id: u64,
    pub contracts: ContractAddresses,
    pub ipfs_gateway: String,
    /// Hosts `/api/media` may redirect to (lowercase).
    pub image_hosts: Vec<String>,
    pub rpc_timeout_secs: u64,
}

impl AppConfig {
    /// Build typed host config from environment variables.
    ///
    /// Required:
    /// - `RPC_URL`: upstream JSON-RPC endpoint for reads
    /// - `TOKEN_CONTRACT_ADDRESS`, `COLLATERAL_TOKEN_CONTRACT_ADDRESS`,
    ///   `NFT_COLLECTION_CONTRACT_ADDRESS`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CHAIN_ID`: default 1
    /// - `IPFS_GATEWAY`: default `https://ipfs.io`
    /// - `IMAGE_HOSTS`: comma list, default `ipfs.io,gateway.pinata.cloud`
    /// - `RPC_TIMEOUT_SECS`: default 15
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for missing required values or unparseable ones.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] over an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let rpc_url = required(&lookup, "RPC_URL")?;
        let contracts = ContractAddresses {
            token: address(&lookup, "TOKEN_CONTRACT_ADDRESS")?,
            collateral: address(&lookup, "COLLATERAL_TOKEN_CONTRACT_ADDRESS")?,
            nft: address(&lookup, "NFT_COLLECTION_CONTRACT_ADDRESS")?,
        };
        let ipfs_gateway = lookup("IPFS_GATEWAY")
            .unwrap_or_else(|| DEFAULT_IPFS_GATEWAY.to_owned())
            .trim_end_matches('/')
            .to_owned();

        let mut image_hosts = parse_hosts(&lookup("IMAGE_HOSTS").unwrap_or_else(|| DEFAULT_IMAGE_HOSTS.to_owned()));
        if let Some(host) = reqwest::Url::parse(&ipfs_gateway).ok().and_then(|u| u.host_str().map(str::to_ascii_lowercase)) {
            if !image_hosts.contains(&host) {
                image_hosts.push(host);
            }
        }

        Ok(Self {
            port: env_parse(&lookup, "PORT", DEFAULT_PORT)?,
            rpc_url,
            chain_id: env_parse(&lookup, "CHAIN_ID", DEFAULT_CHAIN_ID)?,
            contracts,
            ipfs_gateway,
            image_hosts,
            rpc_timeout_secs: env_parse(&lookup, "RPC_TIMEOUT_SECS", DEFAULT_RPC_TIMEOUT_SECS)?,
        })
    }

    /// Configuration served to the browser at `/api/config`.
    #[must_use]
    pub fn client_config(&self) -> ChainConfig {
        ChainConfig {
            chain_id: self.chain_id,
            rpc_path: RPC_PROXY_PATH.to_owned(),
            contracts: self.contracts,
            ipfs_gateway: self.ipfs_gateway.clone(),
        }
    }
}

fn required(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> Result<String, ConfigError> {
    lookup(var)
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(var))
}

fn address(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> Result<Address, ConfigError> {
    chain::address::parse_address(&required(lookup, var)?)
        .map_err(|e| ConfigError::Invalid { var, message: e.to_string() })
}

fn env_parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid { var, message: e.to_string() }),
    }
}

fn parse_hosts(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|h| h.trim().to_ascii_lowercase())
        .filter(|h| !h.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
