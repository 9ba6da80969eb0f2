//! Redline CLI
//!
//! Command-line interface for comparing two text documents

use clap::{Parser, Subcommand};
use redline_core::logging_facility::{init, Profile};

mod commands;
mod render;

#[derive(Debug, Parser)]
#[command(name = "redline")]
#[command(about = "Redline - line and word level comparison of two documents", long_about = None)]
struct Cli {
    /// Log pipeline diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log as JSON instead of human-readable text
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two documents and render the result
    Compare(commands::compare::CompareArgs),
    /// Print change counts for two documents
    Stats(commands::stats::StatsArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.json_logs {
        init(Profile::Production);
    } else if cli.verbose {
        init(Profile::Development);
    }

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Stats(args) => commands::stats::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
