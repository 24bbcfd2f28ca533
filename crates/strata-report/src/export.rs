//! JSON export of the assembled report

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::dto::ProjectReport;

pub fn to_json(report: &ProjectReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("serializing project report")
}

/// Write the report as `<name>.dg.json` under `directory`, creating the
/// directory if needed. Returns the path of the written file.
pub fn write_report(report: &ProjectReport, name: &str, directory: &Path) -> Result<PathBuf> {
    fs::create_dir_all(directory)
        .with_context(|| format!("creating output directory {}", directory.display()))?;
    let path = directory.join(format!("{name}.dg.json"));
    let json = to_json(report)?;
    fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "report written");
    Ok(path)
}
