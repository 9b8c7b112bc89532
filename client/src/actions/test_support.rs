use std::sync::{Arc, Mutex};

use chain::contracts::ContractAddresses;
use chain::events::TxEvents;
use chain::poll::{CancelToken, PollPolicy};
use chain::testing::{self, CountingSleeper, MockReader, MockWriter};
use chain::{Address, Session};

use super::ActionContext;

pub fn account() -> Address {
    testing::address(1)
}

pub fn contracts() -> ContractAddresses {
    ContractAddresses { token: testing::address(10), collateral: testing::address(11), nft: testing::address(12) }
}

pub fn shared<T: Default>() -> Arc<Mutex<T>> {
    Arc::new(Mutex::new(T::default()))
}

pub struct Fixture {
    pub reader: Arc<MockReader>,
    pub writer: Arc<MockWriter>,
    pub sleeper: Arc<CountingSleeper>,
    pub events: TxEvents,
    pub cx: ActionContext,
}

impl Fixture {
    pub fn connected() -> Self {
        Self::build(true)
    }

    pub fn disconnected() -> Self {
        Self::build(false)
    }

    fn build(connected: bool) -> Self {
        let reader = Arc::new(MockReader::new());
        let writer = Arc::new(MockWriter::new());
        let sleeper = Arc::new(CountingSleeper::new());
        let events = TxEvents::new();
        let session = if connected {
            Session { account: Some(account()), reader: reader.clone(), writer: Some(writer.clone()) }
        } else {
            Session::disconnected(reader.clone())
        };
        let cx = ActionContext {
            session,
            contracts: contracts(),
            events: events.clone(),
            policy: PollPolicy { interval: std::time::Duration::from_millis(1), max_attempts: 5 },
            sleeper: sleeper.clone(),
            cancel: CancelToken::new(),
        };
        Self { reader, writer, sleeper, events, cx }
    }
}
