//! Test utilities for the aggregator


use crate::app::models::ColumnRoles;

/// Default roles used by most aggregation tests
pub fn default_roles() -> ColumnRoles {
    ColumnRoles {
        label_index: 0,
        value_index: 1,
    }
}

/// Helper to build owned rows from string literals
pub fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
    data.iter()
        .map(|row| row.iter().map(|s| s.to_string()).collect())
        .collect()
}
