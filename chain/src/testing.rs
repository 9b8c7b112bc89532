//! In-memory capabilities for tests in this crate and in dependents
//! (enabled there through the `test-utils` feature).

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use alloy_primitives::U256;

use crate::abi::{self, Token};
use crate::address::Address;
use crate::client::{ChainReader, ChainWriter};
use crate::error::ChainError;
use crate::poll::Sleeper;
use crate::receipt::{Receipt, ReceiptStatus, TxHash};

/// Address whose 20 bytes are all `n`.
#[must_use]
pub fn address(n: u8) -> Address {
    Address::repeat_byte(n)
}

/// Hash whose 32 bytes are all `n`.
#[must_use]
pub fn hash(n: u8) -> TxHash {
    TxHash::repeat_byte(n)
}

#[must_use]
pub fn success_receipt(hash: TxHash) -> Receipt {
    Receipt { transaction_hash: hash, block_number: Some(1), status: ReceiptStatus::Success }
}

#[must_use]
pub fn reverted_receipt(hash: TxHash) -> Receipt {
    Receipt { transaction_hash: hash, block_number: Some(1), status: ReceiptStatus::Reverted }
}

/// Reader answering calls by function selector and receipts from a queue.
///
/// Unknown selectors fail like a reverted call; an empty receipt queue
/// answers "pending".
#[derive(Default)]
pub struct MockReader {
    calls: Mutex<HashMap<[u8; 4], Result<Vec<u8>, ChainError>>>,
    receipts: Mutex<VecDeque<Result<Option<Receipt>, ChainError>>>,
    call_log: Mutex<Vec<(Address, [u8; 4])>>,
    receipt_fetches: AtomicUsize,
}

impl MockReader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_call(&self, signature: &str, result: Result<Vec<u8>, ChainError>) {
        self.calls.lock().unwrap().insert(abi::selector(signature), result);
    }

    pub fn set_uint(&self, signature: &str, value: U256) {
        self.set_call(signature, Ok(abi::uint_word(value).to_vec()));
    }

    pub fn set_uint_pair(&self, signature: &str, first: U256, second: U256) {
        let mut data = abi::uint_word(first).to_vec();
        data.extend_from_slice(&abi::uint_word(second));
        self.set_call(signature, Ok(data));
    }

    pub fn set_string(&self, signature: &str, value: &str) {
        // A single encoded string argument has the same layout as a string return.
        let encoded = abi::encode_call("_(string)", &[Token::String(value)]);
        self.set_call(signature, Ok(encoded[4..].to_vec()));
    }

    pub fn fail_call(&self, signature: &str, error: ChainError) {
        self.set_call(signature, Err(error));
    }

    #[must_use]
    pub fn with_uint(self, signature: &str, value: U256) -> Self {
        self.set_uint(signature, value);
        self
    }

    #[must_use]
    pub fn with_uint_pair(self, signature: &str, first: U256, second: U256) -> Self {
        self.set_uint_pair(signature, first, second);
        self
    }

    #[must_use]
    pub fn with_string(self, signature: &str, value: &str) -> Self {
        self.set_string(signature, value);
        self
    }

    pub fn push_receipt(&self, result: Result<Option<Receipt>, ChainError>) {
        self.receipts.lock().unwrap().push_back(result);
    }

    /// Number of `call`s made with `signature`'s selector.
    #[must_use]
    pub fn calls_to(&self, signature: &str) -> usize {
        let wanted = abi::selector(signature);
        self.call_log.lock().unwrap().iter().filter(|(_, sel)| *sel == wanted).count()
    }

    /// Contract addresses called with `signature`'s selector, in order.
    #[must_use]
    pub fn targets_of(&self, signature: &str) -> Vec<Address> {
        let wanted = abi::selector(signature);
        self.call_log
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, sel)| *sel == wanted)
            .map(|(to, _)| *to)
            .collect()
    }

    #[must_use]
    pub fn receipt_fetches(&self) -> usize {
        self.receipt_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait(?Send)]
impl ChainReader for MockReader {
    async fn call(&self, to: Address, data: Vec<u8>) -> Result<Vec<u8>, ChainError> {
        let mut selector = [0u8; 4];
        selector.copy_from_slice(&data[..4]);
        self.call_log.lock().unwrap().push((to, selector));
        self.calls
            .lock()
            .unwrap()
            .get(&selector)
            .cloned()
            .unwrap_or_else(|| Err(ChainError::Rpc { code: -32000, message: "execution reverted".to_owned() }))
    }

    async fn transaction_receipt(&self, _hash: TxHash) -> Result<Option<Receipt>, ChainError> {
        self.receipt_fetches.fetch_add(1, Ordering::SeqCst);
        self.receipts.lock().unwrap().pop_front().unwrap_or(Ok(None))
    }
}

/// A transaction the mock writer was asked to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentTx {
    pub from: Address,
    pub to: Address,
    pub data: Vec<u8>,
}

/// Writer returning queued results; an empty queue returns sequential hashes.
#[derive(Default)]
pub struct MockWriter {
    results: Mutex<VecDeque<Result<TxHash, ChainError>>>,
    sent: Mutex<Vec<SentTx>>,
}

impl MockWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_result(&self, result: Result<TxHash, ChainError>) {
        self.results.lock().unwrap().push_back(result);
    }

    #[must_use]
    pub fn sent(&self) -> Vec<SentTx> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl ChainWriter for MockWriter {
    async fn send_transaction(&self, from: Address, to: Address, data: Vec<u8>) -> Result<TxHash, ChainError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(SentTx { from, to, data });
        let n = u8::try_from(sent.len()).unwrap_or(u8::MAX);
        drop(sent);
        self.results.lock().unwrap().pop_front().unwrap_or(Ok(hash(n)))
    }
}

/// Sleeper that returns immediately and records each requested interval.
#[derive(Default)]
pub struct CountingSleeper {
    slept: Mutex<Vec<Duration>>,
}

impl CountingSleeper {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.slept.lock().unwrap().len()
    }

    #[must_use]
    pub fn intervals(&self) -> Vec<Duration> {
        self.slept.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl Sleeper for CountingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.slept.lock().unwrap().push(duration);
    }
}
