use super::*;

const HASH: &str = "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b";

#[test]
fn tx_hash_parses_any_case_and_displays_lowercase() {
    let upper = HASH.to_uppercase().replacen("0X", "0x", 1);
    let hash: TxHash = upper.parse().expect("valid hash");
    assert_eq!(hash.to_string(), HASH);
}

#[test]
fn tx_hash_rejects_short_input() {
    assert!("0xabcd".parse::<TxHash>().is_err());
}

#[test]
fn short_form_keeps_ends() {
    let hash: TxHash = HASH.parse().unwrap();
    assert_eq!(short_hash(&hash), "0x88df…944b");
}

#[test]
fn receipt_succeeded_follows_status() {
    let hash: TxHash = HASH.parse().unwrap();
    let ok = Receipt { transaction_hash: hash, block_number: Some(1), status: ReceiptStatus::Success };
    let bad = Receipt { status: ReceiptStatus::Reverted, ..ok.clone() };
    assert!(ok.succeeded());
    assert!(!bad.succeeded());
}
