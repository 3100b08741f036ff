//! Test utilities for the table parser
//!
//! Shared helpers used across the delimiter, field, header, and parser
//! test modules.

mod fields_tests;
mod header_tests;

/// Helper to build an owned row from string literals
pub fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|s| s.to_string()).collect()
}
