use super::*;

// Vectors from EIP-55.
const CHECKSUMMED: [&str; 4] = [
    "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
    "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
    "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
    "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
];

#[test]
fn checksum_vectors_round_trip_through_display() {
    for raw in CHECKSUMMED {
        let address = parse_address(raw).expect("valid checksum");
        assert_eq!(address.to_string(), raw);
        assert_eq!(address.to_checksum(None), raw);
    }
}

#[test]
fn lowercase_input_displays_checksummed() {
    let address = parse_address(&CHECKSUMMED[0].to_lowercase()).expect("lowercase accepted");
    assert_eq!(address.to_string(), CHECKSUMMED[0]);
}

#[test]
fn uppercase_digits_are_accepted() {
    let upper = format!("0x{}", CHECKSUMMED[1][2..].to_uppercase());
    let address = parse_address(&upper).expect("uppercase accepted");
    assert_eq!(address.to_string(), CHECKSUMMED[1]);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let address = parse_address(&format!("  {}\n", CHECKSUMMED[3])).unwrap();
    assert_eq!(address.to_string(), CHECKSUMMED[3]);
}

#[test]
fn bad_checksum_is_rejected() {
    let wrong = CHECKSUMMED[0].replace("aAeb", "AAeb");
    assert_eq!(parse_address(&wrong), Err(IdError::Checksum));
}

#[test]
fn missing_prefix_is_rejected() {
    assert_eq!(parse_address("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"), Err(IdError::MissingPrefix));
}

#[test]
fn wrong_length_is_rejected() {
    assert_eq!(parse_address("0x1234"), Err(IdError::Length { expected: 40, found: 4 }));
}

#[test]
fn non_hex_is_rejected() {
    let err = parse_address("0xzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz").unwrap_err();
    assert!(matches!(err, IdError::Hex(_)));
}

#[test]
fn word_form_left_pads() {
    let word = Address::repeat_byte(0xab).into_word();
    assert_eq!(&word[..12], &[0u8; 12]);
    assert_eq!(&word[12..], &[0xab; 20]);
}

#[test]
fn serde_round_trips_as_hex_string() {
    let address = parse_address(CHECKSUMMED[2]).unwrap();
    let json = serde_json::to_string(&address).unwrap();
    assert_eq!(json.to_lowercase(), format!("\"{}\"", CHECKSUMMED[2].to_lowercase()));
    let back: Address = serde_json::from_str(&json).unwrap();
    assert_eq!(back, address);
}

#[test]
fn zero_address_lower_hex() {
    assert_eq!(lower_hex(&Address::ZERO), format!("0x{}", "0".repeat(40)));
}
