//! Chain access shared by every panel.
//!
//! Built once the host configuration has loaded. Cloning is cheap: clients
//! are behind `Arc`.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::sync::Arc;

use chain::client::{ChainWriter, RpcClient};
use chain::contracts::ChainConfig;
use chain::events::TxEvents;
use chain::poll::{CancelToken, PollPolicy};
use chain::{Address, Session};

use super::rpc_reader::{HttpTransport, ProxyReader};
use super::timer::BrowserSleeper;
use super::wallet::{InjectedProvider, WalletClient};
use crate::actions::ActionContext;

#[derive(Clone)]
pub struct ChainContext {
    pub config: ChainConfig,
    pub reader: Arc<ProxyReader>,
    pub wallet: Arc<WalletClient>,
    pub policy: PollPolicy,
}

impl ChainContext {
    #[must_use]
    pub fn new(config: ChainConfig) -> Self {
        let reader = Arc::new(RpcClient::new(HttpTransport::new(config.rpc_path.clone())));
        Self { config, reader, wallet: Arc::new(RpcClient::new(InjectedProvider)), policy: PollPolicy::default() }
    }

    /// Reads always go through the proxy; a writer is attached only for a
    /// connected account.
    #[must_use]
    pub fn session(&self, account: Option<Address>) -> Session {
        let writer = account.map(|_| {
            let writer: Arc<dyn ChainWriter> = self.wallet.clone();
            writer
        });
        Session { account, reader: self.reader.clone(), writer }
    }

    #[must_use]
    pub fn action_context(&self, account: Option<Address>, events: TxEvents, cancel: CancelToken) -> ActionContext {
        ActionContext {
            session: self.session(account),
            contracts: self.config.contracts,
            events,
            policy: self.policy,
            sleeper: Arc::new(BrowserSleeper),
            cancel,
        }
    }
}

impl std::fmt::Debug for ChainContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainContext").field("config", &self.config).finish_non_exhaustive()
    }
}
