//! Account and contract addresses.
//!
//! [`Address`] is `alloy_primitives::Address`, which displays in EIP-55
//! mixed-case checksum form. [`parse_address`] is the strict entry point for
//! user- and operator-supplied strings: all-lowercase and all-uppercase input
//! is taken as-is, but a mixed-case string must carry a valid checksum so a
//! mistyped address is caught before a transaction is built against it.

#[cfg(test)]
#[path = "address_test.rs"]
mod address_test;

use std::str::FromStr;

pub use alloy_primitives::Address;
use alloy_primitives::hex;

use crate::error::IdError;

/// Parse a `0x`-prefixed address, enforcing the checksum on mixed-case input.
///
/// # Errors
///
/// Returns [`IdError`] for a missing prefix, a wrong digit count, non-hex
/// digits, or a mixed-case string whose checksum does not match.
pub fn parse_address(s: &str) -> Result<Address, IdError> {
    let digits = strip_hex_prefix(s)?;
    if digits.len() != 40 {
        return Err(IdError::Length { expected: 40, found: digits.len() });
    }
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(IdError::Hex(format!("invalid digits in {digits}")));
    }

    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Address::parse_checksummed(format!("0x{digits}"), None).map_err(|_| IdError::Checksum);
    }
    Address::from_str(digits).map_err(|e| IdError::Hex(e.to_string()))
}

/// Lowercase `0x` hex, the form JSON-RPC parameters use.
#[must_use]
pub fn lower_hex(address: &Address) -> String {
    hex::encode_prefixed(address)
}

fn strip_hex_prefix(s: &str) -> Result<&str, IdError> {
    let trimmed = s.trim();
    trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .ok_or(IdError::MissingPrefix)
}
