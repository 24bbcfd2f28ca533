//! Reading analyzer output files from the input directory

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;

use strata_core::FileReport;

/// Read every `*.json` file directly under `directory`, in name order.
/// Parsing runs in parallel; any unreadable or malformed file fails the run.
pub fn read_reports(directory: &Path) -> Result<Vec<FileReport>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(directory)
        .with_context(|| format!("reading input directory {}", directory.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    paths
        .par_iter()
        .map(|path| {
            FileReport::from_path(path)
                .with_context(|| format!("loading analyzer output {}", path.display()))
        })
        .collect()
}
