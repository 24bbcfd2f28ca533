//! Strata Report — report assembly and JSON export

pub mod assemble;
pub mod dto;
pub mod export;

#[cfg(test)]
pub mod tests;

pub use assemble::assemble_report;
pub use dto::{EdgeInfo, LeafInformation, ProjectNode, ProjectReport};
pub use export::{to_json, write_report};
