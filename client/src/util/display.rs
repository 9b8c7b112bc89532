//! Formatting helpers for on-chain values shown in the UI.

#[cfg(test)]
#[path = "display_test.rs"]
mod display_test;

use chain::Address;
use time::OffsetDateTime;
use time::macros::format_description;

/// Render an oracle update time. `0` means "never updated" and renders as
/// `"0"`; anything else renders as a UTC timestamp.
#[must_use]
pub fn format_timestamp(unix_seconds: u64) -> String {
    if unix_seconds == 0 {
        return "0".to_owned();
    }
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    i64::try_from(unix_seconds)
        .ok()
        .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok())
        .and_then(|at| at.format(&format).ok())
        .map_or_else(|| unix_seconds.to_string(), |text| format!("{text} UTC"))
}

/// `0x1234…abcd` form of a checksummed address.
#[must_use]
pub fn short_address(address: &Address) -> String {
    let full = address.to_checksum(None);
    format!("{}\u{2026}{}", &full[..6], &full[full.len() - 4..])
}
