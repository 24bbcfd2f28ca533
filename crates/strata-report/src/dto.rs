//! Serialized report shape
//!
//! Field names follow the camelCase wire convention of the analyzer file
//! format; optional fields are omitted entirely rather than written as null.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use strata_core::{Language, NodeKind};

/// Annotation for one aggregated dependency edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeInfo {
    pub is_cyclic: bool,
    /// Number of underlying leaf-to-leaf edges folded into this one.
    pub weight: u32,
    /// Comma-joined usage kinds observed across the folded edges.
    #[serde(rename = "type")]
    pub kind: String,
}

/// One position in the serialized namespace tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectNode {
    /// Present when this position is an actual code node; keys into
    /// [`ProjectReport::leaves`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaf_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub children: Vec<ProjectNode>,
    /// Topological layer within the sibling group, -1 when never leveled.
    pub level: i32,
    #[serde(default)]
    pub contained_leaves: BTreeSet<String>,
    /// Internal dependencies of all contained leaves, keyed by target id and
    /// aggregated bottom-up.
    #[serde(default)]
    pub contained_internal_dependencies: BTreeMap<String, EdgeInfo>,
}

/// Flat per-node detail record, keyed by node id in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafInformation {
    pub id: String,
    pub name: String,
    pub physical_path: String,
    pub node_type: NodeKind,
    pub language: Language,
    /// Internal dependencies of this node. External references never appear
    /// in the report; they stay on the resolved node as diagnostic state.
    #[serde(default)]
    pub dependencies: BTreeMap<String, EdgeInfo>,
}

/// The complete analysis result written to `<name>.dg.json`. The project
/// name only picks the file name; it is not part of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectReport {
    pub project_tree_roots: Vec<ProjectNode>,
    pub leaves: BTreeMap<String, LeafInformation>,
}
