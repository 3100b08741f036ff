//! Aggregation statistics and result structures

use serde::{Deserialize, Serialize};

use crate::app::models::Summary;

/// Aggregation result with summary and basic statistics
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    /// The accumulated summary
    pub summary: Summary,

    /// Basic aggregation statistics
    pub stats: AggregateStats,
}

/// Simple aggregation statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Total number of data rows encountered
    pub rows_seen: usize,

    /// Number of rows that produced a record
    pub records_parsed: usize,

    /// Number of rows skipped because the value field did not parse
    pub rows_skipped: usize,
}

impl AggregateStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            rows_seen: 0,
            records_parsed: 0,
            rows_skipped: 0,
        }
    }

    /// Calculate success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.rows_seen == 0 {
            100.0
        } else {
            (self.records_parsed as f64 / self.rows_seen as f64) * 100.0
        }
    }

    /// Get a one-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} rows -> {} records ({:.1}% parsed), {} skipped",
            self.rows_seen,
            self.records_parsed,
            self.success_rate(),
            self.rows_skipped
        )
    }
}

impl Default for AggregateStats {
    fn default() -> Self {
        Self::new()
    }
}
