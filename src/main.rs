//! Strata CLI entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod ingest;
mod pipeline;

#[derive(Parser)]
#[command(name = "strata")]
#[command(about = "Dependency graph analysis over per-language analyzer output", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a directory of analyzer output and write the report
    Analyze {
        /// Directory containing the per-file analyzer JSON output
        #[arg(short, long)]
        input: PathBuf,

        /// Directory for the report (defaults to the input directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Project name; the report is written as `<name>.dg.json`
        #[arg(short, long, default_value = "project")]
        name: String,

        /// Longest cycle, in edges, the bounded enumeration reports
        #[arg(long, default_value_t = strata_graph::DEFAULT_MAX_CYCLE_LENGTH)]
        max_cycle_length: usize,

        /// Skip cycle detection and level assignment
        #[arg(long)]
        skip_graph_analysis: bool,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "strata={log_level}"
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Strata v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Analyze {
            input,
            output,
            name,
            max_cycle_length,
            skip_graph_analysis,
        } => commands::analyze(commands::AnalyzeOptions {
            input,
            output,
            name,
            max_cycle_length,
            skip_graph_analysis,
        }),
        Commands::Version => {
            println!("Strata v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
