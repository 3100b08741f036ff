//! Core table parser orchestration
//!
//! Normalizes line endings, splits the text into non-empty lines, infers
//! the delimiter from the first line, splits each line into fields, and
//! separates an optional header row.

use tracing::debug;

use super::delimiter::infer_delimiter;
use super::fields::split_fields;
use super::header::is_header_row;
use crate::app::models::ParsedTable;

/// Parse delimited text into an ordered table of records
///
/// Never fails: inputs with no non-empty lines produce an empty table.
/// A header row is split off only when the first row looks like a header
/// and at least one data row follows it.
pub fn parse(text: &str) -> ParsedTable {
    // Normalize all line-ending variants to line feeds
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    let lines: Vec<&str> = normalized
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return ParsedTable::default();
    }

    let delimiter = infer_delimiter(lines[0]);
    debug!("Inferred delimiter: {:?}", delimiter);

    let mut rows: Vec<Vec<String>> = lines
        .iter()
        .map(|line| split_fields(line, delimiter))
        .collect();

    if rows.len() > 1 && is_header_row(&rows[0]) {
        let headers = rows.remove(0);
        debug!("First row treated as headers: {:?}", headers);
        ParsedTable {
            headers: Some(headers),
            rows,
        }
    } else {
        debug!("No header row detected; {} data rows", rows.len());
        ParsedTable {
            headers: None,
            rows,
        }
    }
}
