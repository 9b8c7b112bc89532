//! Fixed-point token amounts.
//!
//! Token amounts travel on-chain as integers scaled by `10^decimals`. Users
//! type human decimals ("0.01"), so every submission goes through
//! [`parse_units`] and every displayed balance through [`format_units`].
//!
//! ERROR HANDLING
//! ==============
//! Parsing is strict: excess precision is rejected rather than rounded, so a
//! submitted amount is always exactly what the user typed.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

use alloy_primitives::U256;

use crate::error::AmountError;

/// Decimals used by the stablecoin and its collateral token.
pub const TOKEN_DECIMALS: usize = 18;

/// Parse a non-negative decimal string into a fixed-point integer.
///
/// Accepts `"12"`, `"12."`, `".5"` and `"12.5"`; surrounding whitespace is
/// ignored.
///
/// # Errors
///
/// Returns [`AmountError`] for empty input, signs or other non-digit
/// characters, repeated decimal points, more than `decimals` fractional
/// digits, or a value that overflows 256 bits.
pub fn parse_units(input: &str, decimals: usize) -> Result<U256, AmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }

    let (whole, fraction) = match trimmed.split_once('.') {
        Some((_, fraction)) if fraction.contains('.') => return Err(AmountError::MultipleDecimalPoints),
        Some(parts) => parts,
        None => (trimmed, ""),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(AmountError::Empty);
    }
    if let Some(bad) = whole.chars().chain(fraction.chars()).find(|c| !c.is_ascii_digit()) {
        return Err(AmountError::InvalidCharacter(bad));
    }
    if fraction.len() > decimals {
        return Err(AmountError::TooPrecise { max: decimals });
    }

    let ten = U256::from(10u8);
    let padding = std::iter::repeat_n(b'0', decimals - fraction.len());
    let mut value = U256::ZERO;
    for digit in whole.bytes().chain(fraction.bytes()).chain(padding) {
        value = value
            .checked_mul(ten)
            .and_then(|v| v.checked_add(U256::from(digit - b'0')))
            .ok_or(AmountError::Overflow)?;
    }
    Ok(value)
}

/// Render a fixed-point integer as a human decimal string.
///
/// Trailing fractional zeros are dropped, and so is the decimal point when
/// nothing remains after it.
#[must_use]
pub fn format_units(value: U256, decimals: usize) -> String {
    let digits = value.to_string();
    if decimals == 0 {
        return digits;
    }

    let padded = if digits.len() <= decimals {
        format!("{}{digits}", "0".repeat(decimals + 1 - digits.len()))
    } else {
        digits
    };
    let (whole, fraction) = padded.split_at(padded.len() - decimals);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole.to_owned()
    } else {
        format!("{whole}.{fraction}")
    }
}

/// [`parse_units`] at [`TOKEN_DECIMALS`].
///
/// # Errors
///
/// See [`parse_units`].
pub fn parse_token_amount(input: &str) -> Result<U256, AmountError> {
    parse_units(input, TOKEN_DECIMALS)
}

/// [`format_units`] at [`TOKEN_DECIMALS`].
#[must_use]
pub fn format_token_amount(value: U256) -> String {
    format_units(value, TOKEN_DECIMALS)
}
