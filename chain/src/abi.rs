//! Minimal Solidity ABI encoding for the calls the panels make.
//!
//! Only the argument and return shapes the bound contracts use are
//! supported: `address`, `uint256` and dynamic `string` arguments; `uint256`,
//! `(uint256, uint256)` and `string` return values.
//!
//! ERROR HANDLING
//! ==============
//! Return data comes from an untrusted node, so every slice access is
//! bounds-checked and reported as [`ChainError::Decode`].

#[cfg(test)]
#[path = "abi_test.rs"]
mod abi_test;

use alloy_primitives::{U256, keccak256};

use crate::address::Address;
use crate::error::ChainError;

const WORD: usize = 32;

/// A single call argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token<'a> {
    Address(Address),
    Uint(U256),
    String(&'a str),
}

/// First four bytes of the Keccak-256 of a canonical function signature.
#[must_use]
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Big-endian 32-byte word.
#[must_use]
pub fn uint_word(value: U256) -> [u8; 32] {
    value.to_be_bytes::<WORD>()
}

/// Build calldata: selector, head words, then dynamic tails.
#[must_use]
pub fn encode_call(signature: &str, args: &[Token<'_>]) -> Vec<u8> {
    let head_len = args.len() * WORD;
    let mut head = Vec::with_capacity(head_len);
    let mut tail = Vec::new();

    for arg in args {
        match arg {
            Token::Address(address) => head.extend_from_slice(address.into_word().as_slice()),
            Token::Uint(value) => head.extend_from_slice(&uint_word(*value)),
            Token::String(text) => {
                let offset = (head_len + tail.len()) as u64;
                head.extend_from_slice(&uint_word(U256::from(offset)));
                tail.extend_from_slice(&uint_word(U256::from(text.len() as u64)));
                tail.extend_from_slice(text.as_bytes());
                let pad = (WORD - text.len() % WORD) % WORD;
                tail.extend(std::iter::repeat_n(0u8, pad));
            }
        }
    }

    let mut out = Vec::with_capacity(4 + head.len() + tail.len());
    out.extend_from_slice(&selector(signature));
    out.extend(head);
    out.extend(tail);
    out
}

fn word(data: &[u8], index: usize) -> Result<&[u8], ChainError> {
    let start = index * WORD;
    data.get(start..start + WORD)
        .ok_or_else(|| ChainError::Decode(format!("return data too short: {} bytes", data.len())))
}

fn word_as_usize(bytes: &[u8]) -> Result<usize, ChainError> {
    let value = U256::from_be_slice(bytes);
    if value > U256::from(u32::MAX) {
        return Err(ChainError::Decode(format!("offset or length out of range: {value}")));
    }
    u64::try_from(value)
        .ok()
        .and_then(|v| usize::try_from(v).ok())
        .ok_or_else(|| ChainError::Decode(format!("offset or length out of range: {value}")))
}

/// Bounds-checked `start..start + len`.
fn span(start: usize, len: usize) -> Result<std::ops::Range<usize>, ChainError> {
    let end = start
        .checked_add(len)
        .ok_or_else(|| ChainError::Decode(format!("range {start}+{len} overflows")))?;
    Ok(start..end)
}

/// Decode a single `uint256` return value.
///
/// # Errors
///
/// Returns [`ChainError::Decode`] if fewer than 32 bytes were returned.
pub fn decode_uint(data: &[u8]) -> Result<U256, ChainError> {
    word(data, 0).map(U256::from_be_slice)
}

/// Decode a `(uint256, uint256)` return tuple.
///
/// # Errors
///
/// Returns [`ChainError::Decode`] if fewer than 64 bytes were returned.
pub fn decode_uint_pair(data: &[u8]) -> Result<(U256, U256), ChainError> {
    Ok((
        U256::from_be_slice(word(data, 0)?),
        U256::from_be_slice(word(data, 1)?),
    ))
}

/// Decode a dynamic `string` return value.
///
/// # Errors
///
/// Returns [`ChainError::Decode`] for out-of-range offsets or lengths and
/// for non-UTF-8 contents.
pub fn decode_string(data: &[u8]) -> Result<String, ChainError> {
    let offset = word_as_usize(word(data, 0)?)?;
    let len_range = span(offset, WORD)?;
    let start = len_range.end;
    let len_bytes = data
        .get(len_range)
        .ok_or_else(|| ChainError::Decode("string length word missing".to_owned()))?;
    let len = word_as_usize(len_bytes)?;
    let bytes = data
        .get(span(start, len)?)
        .ok_or_else(|| ChainError::Decode("string contents truncated".to_owned()))?;
    String::from_utf8(bytes.to_vec()).map_err(|e| ChainError::Decode(e.to_string()))
}
