//! Circular-dependency detection
//!
//! Strongly connected components come from petgraph's Tarjan implementation;
//! cycles inside each component are enumerated by a DFS search over dense
//! per-component indices.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};

use strata_core::NodeInfo;

use crate::search::CycleSearch;

/// Bounded enumeration drops any candidate cycle with more edges than this.
pub const DEFAULT_MAX_CYCLE_LENGTH: usize = 10;

/// A directed edge between two node ids.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

/// A simple closed path of edges within one strongly connected component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    pub edges: Vec<Edge>,
}

/// How cycles are enumerated inside each component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleMode {
    /// All simple cycles up to the length bound; longer candidates are
    /// discarded, not truncated.
    All { max_cycle_length: usize },
    /// One arbitrary simple cycle per component, unbounded length. Used when
    /// only "is this component cyclic" matters.
    Single,
}

/// Strongly connected components of size > 1, plus self-loop singletons.
/// Components and their members are sorted by id for deterministic output.
pub fn strongly_connected_components(nodes: &[NodeInfo]) -> Vec<Vec<&NodeInfo>> {
    let mut graph: DiGraph<(), ()> = DiGraph::new();
    let mut by_id: HashMap<&str, NodeIndex> = HashMap::new();

    let mut sorted: Vec<&NodeInfo> = nodes.iter().collect();
    sorted.sort_by(|a, b| a.id.cmp(&b.id));
    for node in &sorted {
        // Graph index i corresponds to sorted[i].
        by_id.insert(&node.id, graph.add_node(()));
    }
    for node in &sorted {
        let from = by_id[node.id.as_str()];
        for dependency in &node.dependencies {
            // Dangling ids never reach this projection, but guard anyway.
            if let Some(&to) = by_id.get(dependency.as_str()) {
                graph.add_edge(from, to, ());
            }
        }
    }

    let mut components: Vec<Vec<&NodeInfo>> = petgraph::algo::tarjan_scc(&graph)
        .into_iter()
        .map(|component| {
            let mut members: Vec<&NodeInfo> = component
                .into_iter()
                .map(|idx| sorted[idx.index()])
                .collect();
            members.sort_by(|a, b| a.id.cmp(&b.id));
            members
        })
        .filter(|members| {
            members.len() > 1
                || members
                    .first()
                    .is_some_and(|only| only.dependencies.contains(&only.id))
        })
        .collect();
    components.sort_by(|a, b| a[0].id.cmp(&b[0].id));
    components
}

/// Find every cycle (or one per component, depending on mode) in the
/// internal-dependency graph.
pub fn determine_cycles(nodes: &[NodeInfo], mode: CycleMode) -> Vec<Cycle> {
    let components = strongly_connected_components(nodes);
    if !components.is_empty() {
        tracing::debug!(
            "found {} strongly connected component(s)",
            components.len()
        );
    }
    components
        .iter()
        .flat_map(|component| cycles_in_component(component, mode))
        .collect()
}

fn cycles_in_component(component: &[&NodeInfo], mode: CycleMode) -> Vec<Cycle> {
    let index_of: HashMap<&str, usize> = component
        .iter()
        .enumerate()
        .map(|(index, node)| (node.id.as_str(), index))
        .collect();

    let mut edges = Vec::new();
    for (from, node) in component.iter().enumerate() {
        for dependency in &node.dependencies {
            if let Some(&to) = index_of.get(dependency.as_str()) {
                edges.push((from, to));
            }
        }
    }

    let search = CycleSearch::new(component.len(), &edges);
    let found = match mode {
        CycleMode::All { max_cycle_length } => search.all_cycles(max_cycle_length),
        CycleMode::Single => search.single_cycle().into_iter().collect(),
    };

    found
        .into_iter()
        .map(|cycle| Cycle {
            edges: cycle
                .into_iter()
                .map(|(from, to)| Edge {
                    from: component[from].id.clone(),
                    to: component[to].id.clone(),
                })
                .collect(),
        })
        .collect()
}

/// Flatten cycles into a `from-id -> to-ids` map marking every edge that
/// participates in at least one cycle. Annotation only — cyclic edges are
/// never removed from the graph.
pub fn cyclic_edges(cycles: &[Cycle]) -> BTreeMap<String, BTreeSet<String>> {
    let mut map: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for cycle in cycles {
        for edge in &cycle.edges {
            map.entry(edge.from.clone())
                .or_default()
                .insert(edge.to.clone());
        }
    }
    map
}
