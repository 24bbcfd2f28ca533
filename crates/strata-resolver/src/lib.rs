//! Dependency resolution — reconciling raw references against the project
//! dictionary, per-language builtin tables, and standard-library tables

pub mod dictionaries;
pub mod merge;
pub mod resolver;


pub use merge::merge_duplicate_nodes;
pub use resolver::{node_infos, resolve_nodes};
