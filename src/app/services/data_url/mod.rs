//! Data URL decoding for embedded CSV attachments
//!
//! This module splits a `data:` URL into its structural parts and converts
//! the raw payload into text:
//! - [`decoder`] - URL header/payload splitting and media type extraction
//! - [`transcoder`] - base64 and percent decoding of the payload
//!
//! Only the prefix/header/separator/payload structure is implemented; full
//! RFC 2397 compliance is out of scope.

pub mod decoder;
pub mod transcoder;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use decoder::decode;
pub use transcoder::transcode;
