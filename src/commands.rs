//! CLI command implementations

use std::path::PathBuf;

use crate::ingest;
use crate::pipeline::{self, PipelineOptions};

pub struct AnalyzeOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub name: String,
    pub max_cycle_length: usize,
    pub skip_graph_analysis: bool,
}

pub fn analyze(options: AnalyzeOptions) -> anyhow::Result<()> {
    tracing::info!("Analyzing {}", options.input.display());

    let reports = ingest::read_reports(&options.input)?;
    tracing::info!("Loaded {} analyzer file(s)", reports.len());

    let report = pipeline::run(
        reports,
        &PipelineOptions {
            max_cycle_length: options.max_cycle_length,
            skip_graph_analysis: options.skip_graph_analysis,
        },
    );

    let output = options.output.unwrap_or(options.input);
    let path = strata_report::write_report(&report, &options.name, &output)?;
    tracing::info!("Report written to {}", path.display());
    Ok(())
}
