//! Structural decoding of data URLs
//!
//! Splits a `data:` URL into media type, encoding flag, and raw payload.
//! Pure function of its input; no side effects.

use tracing::debug;

use crate::app::models::DecodedResource;
use crate::constants::{
    BASE64_TOKEN, DATA_URL_SCHEME, DEFAULT_MEDIA_TYPE, HEADER_PAYLOAD_SEPARATOR,
};
use crate::{Error, Result};

/// Decode a data URL into its structural components
///
/// The header (everything between `data:` and the first `,`) is split on
/// `;` into tokens. The first token, when non-empty, is the media type;
/// otherwise the media type defaults to `text/plain`. The exact lowercase
/// token `base64` anywhere in the list marks an encoded payload. The
/// payload is everything after the separator, verbatim.
pub fn decode(uri: &str) -> Result<DecodedResource> {
    let rest = uri
        .strip_prefix(DATA_URL_SCHEME)
        .ok_or_else(|| Error::malformed_uri("missing 'data:' scheme prefix"))?;

    let separator = rest.find(HEADER_PAYLOAD_SEPARATOR).ok_or_else(|| {
        Error::malformed_uri("missing ',' separator between header and payload")
    })?;

    let header = &rest[..separator];
    let payload = &rest[separator + 1..];

    let tokens: Vec<&str> = header.split(';').collect();
    let media_type = match tokens.first() {
        Some(token) if !token.is_empty() => token.to_string(),
        _ => DEFAULT_MEDIA_TYPE.to_string(),
    };
    let is_base64 = tokens.iter().any(|token| *token == BASE64_TOKEN);

    debug!(
        "Decoded data URL: media_type='{}', base64={}, payload_len={}",
        media_type,
        is_base64,
        payload.len()
    );

    Ok(DecodedResource {
        media_type,
        is_base64,
        payload: payload.to_string(),
    })
}
