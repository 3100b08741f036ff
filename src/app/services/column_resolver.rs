//! Column role resolution from header names
//!
//! Maps the semantic label/value roles to positional indices using
//! case-insensitive substring matching against header names, with fixed
//! positional fallbacks when headers are absent or no name matches.

use tracing::debug;

use crate::app::models::ColumnRoles;
use crate::config::Config;

/// Resolve label and value column indices from an optional header row
///
/// The two scans are independent: each keeps the earliest header whose
/// lowercase form contains one of the configured hints. An unresolved
/// role falls back to the configured positional default.
pub fn resolve_columns(headers: Option<&[String]>, config: &Config) -> ColumnRoles {
    let mut label_index = config.label_column;
    let mut value_index = config.value_column;

    if let Some(headers) = headers {
        if let Some(index) = find_header(headers, &config.value_header_hints) {
            value_index = index;
        }
        if let Some(index) = find_header(headers, &config.label_header_hints) {
            label_index = index;
        }
    }

    debug!(
        "Resolved columns: label={}, value={}",
        label_index, value_index
    );

    ColumnRoles {
        label_index,
        value_index,
    }
}

/// Earliest header whose lowercase form contains any of the hints
fn find_header(headers: &[String], hints: &[String]) -> Option<usize> {
    headers.iter().position(|header| {
        let lowered = header.to_lowercase();
        hints.iter().any(|hint| lowered.contains(hint.as_str()))
    })
}
