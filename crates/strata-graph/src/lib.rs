//! Strata Graph — cycle detection and the levelized namespace tree

pub mod cycles;
pub mod levelize;
mod search;
pub mod tree;


pub use cycles::{
    cyclic_edges, determine_cycles, Cycle, CycleMode, Edge, DEFAULT_MAX_CYCLE_LENGTH,
};
pub use levelize::levelize;
pub use tree::{DependencyTree, LeafEdge, TreeNode};
