//! The analysis pipeline: resolve, detect cycles, levelize, assemble
//!
//! Cycle detection and tree levelization are independent once resolution has
//! finished, so they run on parallel rayon branches.

use std::collections::BTreeMap;
use std::time::Instant;

use strata_core::FileReport;
use strata_graph::{cyclic_edges, determine_cycles, levelize, CycleMode, DependencyTree};
use strata_report::{assemble_report, ProjectReport};
use strata_resolver::{node_infos, resolve_nodes};

pub struct PipelineOptions {
    pub max_cycle_length: usize,
    pub skip_graph_analysis: bool,
}

pub fn run(reports: Vec<FileReport>, options: &PipelineOptions) -> ProjectReport {
    let started = Instant::now();
    let resolved = resolve_nodes(reports);
    tracing::info!(
        nodes = resolved.len(),
        elapsed = ?started.elapsed(),
        "resolution finished"
    );

    let (cyclic, tree) = if options.skip_graph_analysis {
        tracing::info!("graph analysis skipped");
        (BTreeMap::new(), DependencyTree::build(&resolved))
    } else {
        let infos = node_infos(&resolved);
        let max_cycle_length = options.max_cycle_length;
        let (cycles, tree) = rayon::join(
            || {
                let stage = Instant::now();
                let cycles = determine_cycles(&infos, CycleMode::All { max_cycle_length });
                tracing::info!(
                    cycles = cycles.len(),
                    elapsed = ?stage.elapsed(),
                    "cycle detection finished"
                );
                cycles
            },
            || {
                let stage = Instant::now();
                let mut tree = DependencyTree::build(&resolved);
                levelize(&mut tree);
                tracing::info!(elapsed = ?stage.elapsed(), "levelization finished");
                tree
            },
        );
        (cyclic_edges(&cycles), tree)
    };

    let report = assemble_report(&tree, &resolved, &cyclic);
    tracing::info!(elapsed = ?started.elapsed(), "pipeline finished");
    report
}
