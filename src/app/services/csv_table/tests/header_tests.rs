//! Tests for header-row detection

use super::super::header::is_header_row;
use super::row;

#[test]
fn test_named_columns_look_like_headers() {
    assert!(is_header_row(&row(&["Product", "Sales"])));
    assert!(is_header_row(&row(&["id", "value"])));
}

#[test]
fn test_numeric_row_is_not_a_header() {
    assert!(!is_header_row(&row(&["1", "2"])));
    assert!(!is_header_row(&row(&["1.5", "-3", "2e2"])));
}

#[test]
fn test_empty_field_marks_header() {
    assert!(is_header_row(&row(&["", "2"])));
}

#[test]
fn test_mixed_row_marks_header() {
    // One non-numeric field is enough
    assert!(is_header_row(&row(&["1", "Sales"])));
}

#[test]
fn test_numeric_prefix_fields_count_as_data() {
    // Leading-prefix parsing treats "1q" as numeric, so a header made of
    // such strings is misclassified as data (accepted limitation)
    assert!(!is_header_row(&row(&["1q", "2q"])));
}
