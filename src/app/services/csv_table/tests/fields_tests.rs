//! Tests for field splitting, quote handling, and numeric prefix parsing

use super::super::fields::{parse_leading_number, split_fields, unquote_field};
use super::row;

#[test]
fn test_split_plain_fields() {
    assert_eq!(split_fields("Phones,1000", ','), row(&["Phones", "1000"]));
    assert_eq!(split_fields("a;b;c", ';'), row(&["a", "b", "c"]));
}

#[test]
fn test_split_preserves_empty_fields() {
    assert_eq!(split_fields("a,,c", ','), row(&["a", "", "c"]));
    assert_eq!(split_fields(",", ','), row(&["", ""]));
}

#[test]
fn test_split_is_not_quote_aware() {
    // A delimiter inside a quoted field still splits the line
    assert_eq!(
        split_fields("\"a,b\",c", ','),
        row(&["\"a", "b\"", "c"])
    );
}

#[test]
fn test_unquote_strips_surrounding_quotes() {
    assert_eq!(unquote_field("\"Phones\""), "Phones");
    assert_eq!(unquote_field("\"\""), "");
}

#[test]
fn test_unquote_collapses_doubled_quotes() {
    assert_eq!(unquote_field("\"10\"\"20\""), "10\"20");
    assert_eq!(unquote_field("\"say \"\"hi\"\"\""), "say \"hi\"");
}

#[test]
fn test_unquote_leaves_unquoted_fields_alone() {
    assert_eq!(unquote_field("Phones"), "Phones");
    assert_eq!(unquote_field("\"half"), "\"half");
    assert_eq!(unquote_field("half\""), "half\"");
    // Doubled quotes outside a fully quoted field are untouched
    assert_eq!(unquote_field("a\"\"b"), "a\"\"b");
}

#[test]
fn test_unquote_single_quote_char_unchanged() {
    assert_eq!(unquote_field("\""), "\"");
}

#[test]
fn test_parse_leading_number_basic() {
    assert_eq!(parse_leading_number("1000"), Some(1000.0));
    assert_eq!(parse_leading_number("123.45"), Some(123.45));
    assert_eq!(parse_leading_number("-5.5"), Some(-5.5));
    assert_eq!(parse_leading_number("+7"), Some(7.0));
}

#[test]
fn test_parse_leading_number_ignores_trailing_garbage() {
    assert_eq!(parse_leading_number("123abc"), Some(123.0));
    assert_eq!(parse_leading_number("1.2.3"), Some(1.2));
    assert_eq!(parse_leading_number("42 units"), Some(42.0));
}

#[test]
fn test_parse_leading_number_skips_leading_whitespace() {
    assert_eq!(parse_leading_number("  42"), Some(42.0));
    assert_eq!(parse_leading_number("\t3.5"), Some(3.5));
}

#[test]
fn test_parse_leading_number_exponents() {
    assert_eq!(parse_leading_number("1e3"), Some(1000.0));
    assert_eq!(parse_leading_number("2.5E-1"), Some(0.25));
    // A bare exponent marker is not consumed
    assert_eq!(parse_leading_number("1e"), Some(1.0));
    assert_eq!(parse_leading_number("1e+"), Some(1.0));
}

#[test]
fn test_parse_leading_number_rejects_non_numeric() {
    assert_eq!(parse_leading_number(""), None);
    assert_eq!(parse_leading_number("Phones"), None);
    assert_eq!(parse_leading_number("-"), None);
    assert_eq!(parse_leading_number("."), None);
    assert_eq!(parse_leading_number("$100"), None);
}

#[test]
fn test_parse_leading_number_rejects_non_finite() {
    // Overflowing literals are excluded rather than propagating infinity
    assert_eq!(parse_leading_number("1e999"), None);
}

#[test]
fn test_parse_leading_number_bare_fractions() {
    assert_eq!(parse_leading_number(".5"), Some(0.5));
    assert_eq!(parse_leading_number("5."), Some(5.0));
    assert_eq!(parse_leading_number("-.5"), Some(-0.5));
}
