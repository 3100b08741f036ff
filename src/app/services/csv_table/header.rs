//! Heuristic header-row detection
//!
//! The first row is judged a header when it names columns rather than
//! holding data, determined by non-numeric content. A header that happens
//! to contain only numeric-looking strings will be misclassified as data;
//! that is an accepted limitation of the heuristic.

use super::fields::parse_leading_number;

/// Whether a parsed row looks like a header rather than data
///
/// True when at least one field is empty or does not parse as a finite
/// number under leading-prefix semantics.
pub fn is_header_row(row: &[String]) -> bool {
    row.iter()
        .any(|field| field.is_empty() || parse_leading_number(field).is_none())
}
