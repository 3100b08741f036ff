//! Heuristic delimited-text parsing for attachment payloads
//!
//! This module converts normalized text into an ordered table of records.
//! The parser is deliberately naive and mirrors the behavior downstream
//! consumers depend on:
//! - [`parser`] - orchestration: line splitting and header separation
//! - [`delimiter`] - delimiter inference from the first line
//! - [`fields`] - field splitting, quote stripping, and numeric prefix parsing
//! - [`header`] - heuristic header-row detection
//!
//! Quote handling is intentionally not delimiter-aware: a delimiter inside
//! a quoted field still splits the line. Replacing this with a full CSV
//! grammar would change observable splitting behavior on pathological
//! inputs.

pub mod delimiter;
pub mod fields;
pub mod header;
pub mod parser;

#[cfg(test)]
pub mod tests;

// Re-export main entry points for easy access
pub use delimiter::infer_delimiter;
pub use fields::{parse_leading_number, split_fields};
pub use parser::parse;
