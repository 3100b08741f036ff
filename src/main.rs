use clap::Parser;
use sales_summarizer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_report) => {
            // Success - the report has already been rendered by the command
            process::exit(0);
        }
        Err(error) => {
            // Degraded indicator on stdout, details on stderr
            println!("Error");
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Sales Summarizer - Data-URL CSV Attachment Aggregator");
    println!("=====================================================");
    println!();
    println!("Decode an embedded data: URL into CSV text and report the sales");
    println!("total plus a per-product breakdown.");
    println!();
    println!("USAGE:");
    println!("    sales-summarizer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    summarize   Summarize a data-URL attachment (main command)");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Summarize an attachment passed on the command line:");
    println!("    sales-summarizer summarize 'data:text/csv;base64,UGhvbmVzLDEwMDA='");
    println!();
    println!("    # Summarize an attachment stored in a file, as JSON:");
    println!("    sales-summarizer summarize --file attachment.txt --output-format json");
    println!();
    println!("For detailed help, use:");
    println!("    sales-summarizer summarize --help");
}
