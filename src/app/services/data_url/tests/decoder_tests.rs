//! Tests for data URL structural decoding

use super::SALES_ATTACHMENT_URL;
use super::super::decoder::decode;
use crate::Error;

#[test]
fn test_decode_csv_attachment() {
    let resource = decode("data:text/csv;base64,UGhvbmVzLDEwMDA=").unwrap();

    assert_eq!(resource.media_type, "text/csv");
    assert!(resource.is_base64);
    assert_eq!(resource.payload, "UGhvbmVzLDEwMDA=");
}

#[test]
fn test_decode_reference_attachment() {
    let resource = decode(SALES_ATTACHMENT_URL).unwrap();

    assert_eq!(resource.media_type, "text/csv");
    assert!(resource.is_base64);
    assert!(resource.payload.starts_with("UHJvZHVjdHMs"));
}

#[test]
fn test_missing_scheme_prefix() {
    let result = decode("text/csv;base64,UGhvbmVzLDEwMDA=");
    assert!(matches!(result, Err(Error::MalformedUri { .. })));
}

#[test]
fn test_missing_separator() {
    let result = decode("data:text/csv;base64");
    assert!(matches!(result, Err(Error::MalformedUri { .. })));
}

#[test]
fn test_media_type_defaults_to_text_plain() {
    // Empty header
    let resource = decode("data:,hello").unwrap();
    assert_eq!(resource.media_type, "text/plain");
    assert!(!resource.is_base64);
    assert_eq!(resource.payload, "hello");

    // Header with base64 token but no media type
    let resource = decode("data:;base64,aGVsbG8=").unwrap();
    assert_eq!(resource.media_type, "text/plain");
    assert!(resource.is_base64);
}

#[test]
fn test_base64_token_anywhere_in_header() {
    let resource = decode("data:text/csv;charset=utf-8;base64,AA==").unwrap();
    assert_eq!(resource.media_type, "text/csv");
    assert!(resource.is_base64);
}

#[test]
fn test_base64_token_is_case_sensitive() {
    // Only the exact lowercase token marks an encoded payload
    let resource = decode("data:text/csv;BASE64,Phones").unwrap();
    assert!(!resource.is_base64);

    let resource = decode("data:text/csv;Base64,Phones").unwrap();
    assert!(!resource.is_base64);
}

#[test]
fn test_payload_taken_verbatim() {
    // No trimming, and later commas stay inside the payload
    let resource = decode("data:text/plain,  a,b,c ").unwrap();
    assert_eq!(resource.payload, "  a,b,c ");
}

#[test]
fn test_empty_payload() {
    let resource = decode("data:text/csv,").unwrap();
    assert_eq!(resource.payload, "");
}
