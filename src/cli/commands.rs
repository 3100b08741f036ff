//! Command implementations for the sales summarizer CLI
//!
//! This module contains the command execution logic, report rendering,
//! and logging setup for the CLI interface.

use std::io::Read;

use colored::Colorize;
use tracing::{debug, info};

use crate::app::services::pipeline::{PipelineReport, SalesPipeline};
use crate::cli::args::{Args, Commands, OutputFormat, SummarizeArgs};
use crate::config::Config;
use crate::{Error, Result};

/// Main command runner for the sales summarizer
pub fn run(args: Args) -> Result<PipelineReport> {
    match args.command {
        Some(Commands::Summarize(cmd)) => run_summarize(cmd),
        None => Err(Error::configuration("No command specified".to_string())),
    }
}

/// Execute the summarize command
///
/// 1. Set up logging and configuration
/// 2. Read the data URL from argument, file, or stdin
/// 3. Run the decode/parse/aggregate pipeline
/// 4. Render the summary report
fn run_summarize(args: SummarizeArgs) -> Result<PipelineReport> {
    setup_logging(&args);

    info!("Starting sales summarizer");
    args.validate()?;

    let config = Config::from_overrides(
        args.media_type.as_deref(),
        args.label_column,
        args.value_column,
    )?;

    let uri = read_input(&args)?;
    debug!("Read {} bytes of input", uri.len());

    let pipeline = SalesPipeline::new(config);
    let report = pipeline.run(uri.trim())?;

    let rendered = render_report(&report, &args.output_format)?;
    write_output(&args, &rendered)?;

    Ok(report)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &SummarizeArgs) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sales_summarizer={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Read the data URL from the positional argument, --file, or stdin
fn read_input(args: &SummarizeArgs) -> Result<String> {
    if let Some(uri) = &args.uri {
        return Ok(uri.clone());
    }

    if let Some(file) = &args.file {
        return std::fs::read_to_string(file)
            .map_err(|e| Error::io(format!("Failed to read {}", file.display()), e));
    }

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|e| Error::io("Failed to read from stdin", e))?;
    Ok(input)
}

/// Render the pipeline report in the requested output format
fn render_report(report: &PipelineReport, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(render_human(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .map_err(|e| Error::serialization("Failed to render JSON report", e)),
        OutputFormat::Csv => Ok(render_csv(report)),
    }
}

/// Render the human-readable report with two-decimal currency values
fn render_human(report: &PipelineReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Sales Summary".bold()));
    out.push_str(&format!("{}\n", "=============".bold()));

    for record in &report.summary.records {
        out.push_str(&format!(
            "{:<24} {}\n",
            record.label,
            format!("${:.2}", record.value).green()
        ));
    }

    out.push_str(&format!(
        "{:<24} {}\n",
        "Total".bold(),
        format!("{:.2}", report.summary.total).green().bold()
    ));

    if report.stats.rows_skipped > 0 {
        out.push_str(&format!(
            "{}\n",
            format!("({} rows skipped)", report.stats.rows_skipped).yellow()
        ));
    }

    out
}

/// Render the report as CSV rows for downstream analysis
fn render_csv(report: &PipelineReport) -> String {
    let mut out = String::from("product,sales\n");

    for record in &report.summary.records {
        out.push_str(&format!("{},{}\n", record.label, record.value));
    }
    out.push_str(&format!("total,{:.2}\n", report.summary.total));

    out
}

/// Write the rendered report to the output file or stdout
fn write_output(args: &SummarizeArgs, rendered: &str) -> Result<()> {
    match &args.output_file {
        Some(path) => std::fs::write(path, rendered)
            .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e)),
        None => {
            print!("{}", rendered);
            Ok(())
        }
    }
}
