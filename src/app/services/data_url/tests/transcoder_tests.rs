//! Tests for payload transcoding (base64 and percent decoding)

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::{SALES_ATTACHMENT_URL, SALES_CSV_TEXT};
use super::super::{decode, transcode};
use crate::Error;

#[test]
fn test_base64_round_trip() {
    let original = "Products,Sales\nPhones,1000\n";
    let encoded = STANDARD.encode(original);

    let decoded = transcode(&encoded, true).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_base64_round_trip_non_ascii() {
    let original = "Product,Preis\nBücher,12.50\n";
    let encoded = STANDARD.encode(original);

    let decoded = transcode(&encoded, true).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_reference_attachment_decodes_to_csv() {
    let resource = decode(SALES_ATTACHMENT_URL).unwrap();
    let text = transcode(&resource.payload, resource.is_base64).unwrap();

    assert_eq!(text, SALES_CSV_TEXT);
}

#[test]
fn test_invalid_base64_characters_fail() {
    let result = transcode("not valid base64!!!", true);
    assert!(matches!(result, Err(Error::InvalidEncoding { .. })));
}

#[test]
fn test_unpadded_base64_accepted() {
    // "aGVsbG8" is "hello" without the trailing '='
    let decoded = transcode("aGVsbG8", true).unwrap();
    assert_eq!(decoded, "hello");
}

#[test]
fn test_malformed_utf8_replaced_not_fatal() {
    // 0xFF 0xFE is not valid UTF-8
    let encoded = STANDARD.encode([0xFF_u8, 0xFE]);

    let decoded = transcode(&encoded, true).unwrap();
    assert!(decoded.contains('\u{FFFD}'));
}

#[test]
fn test_percent_decoding() {
    let decoded = transcode("Phones%2C1000%0ABooks%2C123.45", false).unwrap();
    assert_eq!(decoded, "Phones,1000\nBooks,123.45");
}

#[test]
fn test_plain_payload_passes_through() {
    let decoded = transcode("Phones,1000", false).unwrap();
    assert_eq!(decoded, "Phones,1000");
}

#[test]
fn test_truncated_percent_sequence_fails() {
    let result = transcode("Books%2", false);
    assert!(matches!(result, Err(Error::InvalidEncoding { .. })));
}

#[test]
fn test_non_hex_percent_sequence_fails() {
    let result = transcode("Books%ZZ1", false);
    assert!(matches!(result, Err(Error::InvalidEncoding { .. })));
}

#[test]
fn test_percent_decoded_invalid_utf8_fails() {
    // Lone 0xFF byte is never valid UTF-8; percent path is strict
    let result = transcode("%FF", false);
    assert!(matches!(result, Err(Error::InvalidEncoding { .. })));
}
