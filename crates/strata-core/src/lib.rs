//! Strata Core — symbol paths, node model, and the analyzer ingest boundary

pub mod ingest;
pub mod model;
pub mod path;

#[cfg(test)]
pub mod tests;

pub use ingest::{FileReport, IngestError};
pub use model::{
    Language, NodeInfo, NodeKind, RawDependency, ResolvedDependency, ResolvedNode, SourceNode,
    TypeRef, UsageKind,
};
pub use path::SymbolPath;
