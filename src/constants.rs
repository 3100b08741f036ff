//! Application constants for the sales summarizer
//!
//! This module contains the fixed values used by the data-URL decoder,
//! the table parser heuristics, and column role resolution.

// =============================================================================
// Data URL Structure
// =============================================================================

/// Scheme prefix every embedded-resource URL must start with
pub const DATA_URL_SCHEME: &str = "data:";

/// Separator between the data URL header and the payload
pub const HEADER_PAYLOAD_SEPARATOR: char = ',';

/// Media type assumed when the data URL header carries none
pub const DEFAULT_MEDIA_TYPE: &str = "text/plain";

/// Header token marking a base64-encoded payload (exact lowercase match)
pub const BASE64_TOKEN: &str = "base64";

/// Media type the summarizer expects to process
pub const EXPECTED_MEDIA_TYPE: &str = "text/csv";

// =============================================================================
// Table Parsing Heuristics
// =============================================================================

/// Delimiter candidates, in tie-breaking order (comma wins ties)
pub const DELIMITER_CANDIDATES: &[char] = &[',', ';', '\t'];

/// Delimiter used when no candidate occurs in the sample line
pub const DEFAULT_DELIMITER: char = ',';

// =============================================================================
// Column Role Resolution
// =============================================================================

/// Fallback column index for the record label
pub const DEFAULT_LABEL_COLUMN: usize = 0;

/// Fallback column index for the numeric value
pub const DEFAULT_VALUE_COLUMN: usize = 1;

/// Header-name substrings (lowercase) identifying the label column
pub const LABEL_HEADER_HINTS: &[&str] = &["product"];

/// Header-name substrings (lowercase) identifying the value column
pub const VALUE_HEADER_HINTS: &[&str] = &["sales", "sale"];
