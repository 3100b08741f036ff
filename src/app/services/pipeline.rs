//! Pipeline orchestration for attachment summarizing
//!
//! Sequences the full decode → transcode → parse → resolve → aggregate
//! pipeline. Each stage's output is the next stage's sole input; any fatal
//! error aborts the whole invocation with no partial results.

use serde::Serialize;
use tracing::{debug, info};

use super::aggregator::{AggregateStats, aggregate};
use super::column_resolver::resolve_columns;
use super::csv_table;
use super::data_url;
use crate::app::models::Summary;
use crate::config::Config;
use crate::{Error, Result};

/// Report produced by a full pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    /// Accumulated total and per-record summaries
    pub summary: Summary,

    /// Row-level aggregation statistics
    pub stats: AggregateStats,
}

/// Sales attachment summarizing pipeline
///
/// A stateless, reentrant transform: construct once, call [`run`] for any
/// number of independent inputs. Re-running on the same input yields an
/// identical report.
///
/// [`run`]: SalesPipeline::run
///
/// # Example
///
/// ```rust
/// use sales_summarizer::{Config, SalesPipeline};
///
/// # fn example() -> sales_summarizer::Result<()> {
/// let pipeline = SalesPipeline::new(Config::default());
/// let report = pipeline.run("data:text/csv,Products%2CSales%0APhones%2C1000")?;
///
/// println!("Total: {:.2}", report.summary.total);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SalesPipeline {
    config: Config,
}

impl SalesPipeline {
    /// Create a new pipeline with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Create a new pipeline with the default configuration
    pub fn with_defaults() -> Self {
        Self::new(Config::default())
    }

    /// Run the full pipeline on a data URL
    pub fn run(&self, uri: &str) -> Result<PipelineReport> {
        info!("Summarizing attachment ({} bytes)", uri.len());

        let resource = data_url::decode(uri)?;
        if resource.media_type != self.config.expected_media_type {
            return Err(Error::unsupported_media_type(
                &self.config.expected_media_type,
                &resource.media_type,
            ));
        }

        let text = data_url::transcode(&resource.payload, resource.is_base64)?;
        debug!("Transcoded payload into {} bytes of text", text.len());

        let table = csv_table::parse(&text);
        info!(
            "Parsed {} data rows (headers: {})",
            table.row_count(),
            table.has_headers()
        );

        let roles = resolve_columns(table.headers.as_deref(), &self.config);
        let result = aggregate(&table.rows, &roles);
        info!("Aggregation complete: {}", result.stats.summary());

        Ok(PipelineReport {
            summary: result.summary,
            stats: result.stats,
        })
    }
}
