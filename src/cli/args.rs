//! Command-line argument definitions for the sales summarizer
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::{Error, Result};

/// CLI arguments for the sales attachment summarizer
///
/// Decodes a data-URL CSV attachment and reports the sales total plus a
/// per-product breakdown.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sales-summarizer",
    version,
    about = "Decode a data-URL CSV attachment and summarize its sales figures",
    long_about = "Decodes an embedded data: URL into CSV text, parses it with delimiter \
                  inference and header detection, resolves the product/sales columns, and \
                  reports the accumulated total plus a per-product breakdown."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the sales summarizer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Summarize a data-URL attachment (main command)
    Summarize(SummarizeArgs),
}

/// Arguments for the summarize command
#[derive(Debug, Clone, Parser)]
pub struct SummarizeArgs {
    /// Data URL to summarize
    ///
    /// A string of the form data:[<mediaType>][;<param>]*[;base64],<payload>.
    /// When omitted, the URL is read from --file or standard input.
    #[arg(value_name = "URI", help = "Data URL to summarize")]
    pub uri: Option<String>,

    /// Read the data URL from a file instead of the command line
    #[arg(
        short = 'f',
        long = "file",
        value_name = "PATH",
        conflicts_with = "uri",
        help = "Read the data URL from a file"
    )]
    pub file: Option<PathBuf>,

    /// Media type the attachment must carry
    ///
    /// The pipeline fails with an unsupported-media-type error when the
    /// decoded attachment carries anything else. Defaults to text/csv.
    #[arg(
        long = "media-type",
        value_name = "TYPE",
        help = "Expected media type of the attachment"
    )]
    pub media_type: Option<String>,

    /// Fallback column index for the product label
    #[arg(
        long = "label-column",
        value_name = "INDEX",
        help = "Fallback column index for the product label"
    )]
    pub label_column: Option<usize>,

    /// Fallback column index for the sales value
    #[arg(
        long = "value-column",
        value_name = "INDEX",
        help = "Fallback column index for the sales value"
    )]
    pub value_column: Option<usize>,

    /// Output format for the summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the summary"
    )]
    pub output_format: OutputFormat,

    /// Output file for the summary
    ///
    /// If not specified, outputs to stdout
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the summary"
    )]
    pub output_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for the summary report
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl SummarizeArgs {
    /// Validate the summarize command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(file) = &self.file {
            if !file.exists() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    file.display()
                )));
            }
        }

        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
