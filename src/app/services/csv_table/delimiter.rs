//! Delimiter inference for delimited text
//!
//! Chooses the field separator by counting candidate occurrences in a
//! single sample line.

use crate::constants::{DEFAULT_DELIMITER, DELIMITER_CANDIDATES};

/// Infer the field delimiter from the first non-empty line
///
/// Counts literal occurrences of each candidate in the sample line and
/// picks the highest count. The comparison is strictly greater, so ties
/// keep the earlier candidate (comma first). All-zero counts fall back to
/// comma.
pub fn infer_delimiter(sample_line: &str) -> char {
    let mut delimiter = DEFAULT_DELIMITER;
    let mut max_count = 0;

    for &candidate in DELIMITER_CANDIDATES {
        let count = sample_line.matches(candidate).count();
        if count > max_count {
            max_count = count;
            delimiter = candidate;
        }
    }

    delimiter
}
