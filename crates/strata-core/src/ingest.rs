//! Ingest boundary for per-language analyzer output
//!
//! Malformed extraction files are rejected here, before anything enters the
//! pipeline. Past this boundary the core tolerates degenerate values (blank
//! paths, self-references) instead of failing.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::SourceNode;

/// Errors raised while reading analyzer extraction files.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read extraction file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed extraction file {path}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The per-file result of one analyzer run: a set of unresolved nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    #[serde(default)]
    pub nodes: Vec<SourceNode>,
}

impl FileReport {
    pub fn new(nodes: Vec<SourceNode>) -> Self {
        FileReport { nodes }
    }

    pub fn from_json(json: &str, origin: &Path) -> Result<Self, IngestError> {
        serde_json::from_str(json).map_err(|source| IngestError::Malformed {
            path: origin.to_path_buf(),
            source,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, IngestError> {
        let json = fs::read_to_string(path).map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let report = Self::from_json(&json, path)?;
        tracing::debug!(
            "loaded {} node(s) from {}",
            report.nodes.len(),
            path.display()
        );
        Ok(report)
    }
}
