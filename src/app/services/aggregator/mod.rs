//! Row aggregation into sales summaries
//!
//! Consumes resolved rows, accumulates a numeric total, and builds the
//! per-record summary list:
//! - [`rows`] - single-pass row aggregation
//! - [`stats`] - aggregation statistics and result structures

pub mod rows;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use rows::aggregate;
pub use stats::{AggregateResult, AggregateStats};
