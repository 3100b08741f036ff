//! Field splitting and value parsing utilities
//!
//! This module provides the per-line field splitter with naive quote
//! handling and the leading-numeric-prefix parser shared by header
//! detection and aggregation.

/// Split a line on the delimiter and unquote each resulting field
///
/// The split is not quote-aware: a delimiter inside a quoted field still
/// splits the line.
pub fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter).map(unquote_field).collect()
}

/// Strip one pair of surrounding double quotes and collapse `""` to `"`
///
/// Fields that are not fully quoted are returned unchanged, as is a field
/// consisting of a single `"` character.
pub fn unquote_field(field: &str) -> String {
    if field.len() >= 2 && field.starts_with('"') && field.ends_with('"') {
        field[1..field.len() - 1].replace("\"\"", "\"")
    } else {
        field.to_string()
    }
}

/// Parse the leading numeric prefix of a field as a finite number
///
/// Mirrors common "parse leading number" semantics: leading whitespace is
/// skipped, an optional sign, digits, one decimal point, and an exponent
/// are consumed, and trailing non-numeric characters are ignored. Returns
/// `None` when no digit is present or the parsed value is not finite.
pub fn parse_leading_number(field: &str) -> Option<f64> {
    let trimmed = field.trim_start();
    let bytes = trimmed.as_bytes();

    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                end += 1;
            }
            _ => break,
        }
    }

    if !seen_digit {
        return None;
    }

    // Exponent is consumed only when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
