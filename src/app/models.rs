//! Core data models for the decode/parse/aggregate pipeline
//!
//! All entities are created fresh per pipeline invocation and carry no
//! shared mutable state, so the pipeline stays a stateless, reentrant
//! transform.

use serde::{Deserialize, Serialize};

/// Structural decomposition of a data URL
///
/// Produced once per input URL by the decoder and consumed by the payload
/// transcoder. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedResource {
    /// Media type from the URL header (defaults to `text/plain`)
    pub media_type: String,

    /// Whether the payload is base64-encoded
    pub is_base64: bool,

    /// Raw payload, taken verbatim after the separator
    pub payload: String,
}

/// Parsed tabular content: an optional header row plus data rows
///
/// No equal-length invariant is enforced between headers and rows; short
/// or long rows are tolerated and indexed defensively downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    /// Column names, present only when the first row was judged a header
    pub headers: Option<Vec<String>>,

    /// Data rows in input order
    pub rows: Vec<Vec<String>>,
}

impl ParsedTable {
    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table carries a header row
    pub fn has_headers(&self) -> bool {
        self.headers.is_some()
    }
}

/// Positional column roles resolved from header names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRoles {
    /// Index of the record label field
    pub label_index: usize,

    /// Index of the numeric value field
    pub value_index: usize,
}

/// A single summarized record: label plus parsed numeric value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Record label (e.g. product name)
    pub label: String,

    /// Parsed finite numeric value
    pub value: f64,
}

/// Terminal artifact of the pipeline, owned by the caller for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Accumulated total over all parsed records
    pub total: f64,

    /// Per-record summaries in input row order
    pub records: Vec<SalesRecord>,
}

impl Summary {
    /// Number of records that contributed to the total
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}
