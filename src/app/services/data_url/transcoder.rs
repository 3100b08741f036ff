//! Payload transcoding for data URL attachments
//!
//! Converts the raw payload into text. Base64 payloads are decoded to bytes
//! and interpreted as UTF-8 with replacement-character substitution for
//! malformed sequences. Non-base64 payloads are strictly percent-decoded;
//! malformed percent sequences and invalid UTF-8 are fatal there.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, Engine, GeneralPurpose, GeneralPurposeConfig};
use percent_encoding::percent_decode_str;
use tracing::debug;

use crate::{Error, Result};

/// Standard-alphabet base64 engine that accepts padded and unpadded input
const BASE64_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Convert a raw data URL payload into normalized text
pub fn transcode(payload: &str, is_base64: bool) -> Result<String> {
    if is_base64 {
        decode_base64_text(payload)
    } else {
        decode_percent_text(payload)
    }
}

/// Decode a base64 payload into text, tolerating malformed UTF-8
fn decode_base64_text(payload: &str) -> Result<String> {
    let bytes = BASE64_ENGINE
        .decode(payload)
        .map_err(|e| Error::base64_decoding("payload is not valid base64", e))?;

    // Invalid byte sequences become U+FFFD rather than failing the pipeline
    let text = String::from_utf8_lossy(&bytes).into_owned();
    debug!("Decoded {} base64 bytes into {} chars", bytes.len(), text.chars().count());

    Ok(text)
}

/// Strictly percent-decode a payload into text
fn decode_percent_text(payload: &str) -> Result<String> {
    validate_percent_sequences(payload)?;

    percent_decode_str(payload)
        .decode_utf8()
        .map(|cow| cow.into_owned())
        .map_err(|_| Error::invalid_encoding("percent-decoded payload is not valid UTF-8"))
}

/// Reject any `%` that is not followed by two hexadecimal digits
fn validate_percent_sequences(payload: &str) -> Result<()> {
    let bytes = payload.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len()
                || !bytes[i + 1].is_ascii_hexdigit()
                || !bytes[i + 2].is_ascii_hexdigit()
            {
                return Err(Error::invalid_encoding(format!(
                    "malformed percent sequence at byte offset {}",
                    i
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    Ok(())
}
