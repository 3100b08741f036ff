//! Test utilities for data URL decoding and transcoding
//!
//! Provides shared fixtures used across the decoder and transcoder test
//! modules.

// Test modules
mod decoder_tests;
mod transcoder_tests;

/// The reference attachment: base64-encoded CSV sales data
pub const SALES_ATTACHMENT_URL: &str =
    "data:text/csv;base64,UHJvZHVjdHMsU2FsZXMKUGhvbmVzLDEwMDAKQm9va3MsMTIzLjQ1Ck5vdGVib29rcywxMTEuMTEK";

/// CSV text the reference attachment decodes to
pub const SALES_CSV_TEXT: &str = "Products,Sales\nPhones,1000\nBooks,123.45\nNotebooks,111.11\n";
