//! Single-pass row aggregation
//!
//! Rows whose value field does not parse to a finite number are silently
//! skipped: they are excluded from both the total and the record list and
//! are never reported as errors. Making them fatal would change observable
//! behavior.

use tracing::debug;

use super::stats::{AggregateResult, AggregateStats};
use crate::app::models::{ColumnRoles, SalesRecord, Summary};
use crate::app::services::csv_table::parse_leading_number;

/// Aggregate resolved rows into a summary with statistics
///
/// A single stable pass over the rows in input order. Out-of-range value
/// indices skip the row; an out-of-range label index yields an empty
/// label but keeps the record.
pub fn aggregate(rows: &[Vec<String>], roles: &ColumnRoles) -> AggregateResult {
    let mut stats = AggregateStats::new();
    let mut total = 0.0;
    let mut records = Vec::new();

    for row in rows {
        stats.rows_seen += 1;

        let value = row
            .get(roles.value_index)
            .and_then(|field| parse_leading_number(field));

        match value {
            Some(value) => {
                let label = row.get(roles.label_index).cloned().unwrap_or_default();
                total += value;
                records.push(SalesRecord { label, value });
                stats.records_parsed += 1;
            }
            None => {
                stats.rows_skipped += 1;
                debug!("Skipped row {} (unparsable value field)", stats.rows_seen);
            }
        }
    }

    debug!(
        "Aggregated {} of {} rows, total {:.2}",
        stats.records_parsed, stats.rows_seen, total
    );

    AggregateResult {
        summary: Summary { total, records },
        stats,
    }
}
