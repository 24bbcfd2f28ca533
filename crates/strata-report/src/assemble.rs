//! Report assembly from the leveled tree and the resolved nodes

use std::collections::{BTreeMap, BTreeSet};

use strata_core::ResolvedNode;
use strata_graph::DependencyTree;

use crate::dto::{EdgeInfo, LeafInformation, ProjectNode, ProjectReport};

/// Assemble the final report. `cyclic` is the flattened cycle-edge map; every
/// edge present in it gets the `isCyclic` annotation.
pub fn assemble_report(
    tree: &DependencyTree,
    resolved: &[ResolvedNode],
    cyclic: &BTreeMap<String, BTreeSet<String>>,
) -> ProjectReport {
    let leaves: BTreeMap<String, LeafInformation> = resolved
        .iter()
        .map(|node| (node.id(), leaf_information(node, cyclic)))
        .collect();
    tracing::debug!(leaves = leaves.len(), "assembling report");

    ProjectReport {
        project_tree_roots: project_tree(tree, cyclic),
        leaves,
    }
}

fn is_cyclic(cyclic: &BTreeMap<String, BTreeSet<String>>, from: &str, to: &str) -> bool {
    cyclic.get(from).is_some_and(|targets| targets.contains(to))
}

fn leaf_information(
    node: &ResolvedNode,
    cyclic: &BTreeMap<String, BTreeSet<String>>,
) -> LeafInformation {
    let id = node.id();
    let mut dependencies = BTreeMap::new();
    for dependency in &node.internal {
        let target = dependency.id();
        dependencies.insert(
            target.clone(),
            EdgeInfo {
                is_cyclic: is_cyclic(cyclic, &id, &target),
                weight: 1,
                kind: dependency.usage_label(),
            },
        );
    }
    LeafInformation {
        id,
        name: node.name().to_string(),
        physical_path: node.physical_path.clone(),
        node_type: node.kind,
        language: node.language,
        dependencies,
    }
}

/// Convert the arena tree into the nested DTO form. Children always carry a
/// larger arena index than their parent, so one reverse sweep builds every
/// child before the node that owns it.
fn project_tree(
    tree: &DependencyTree,
    cyclic: &BTreeMap<String, BTreeSet<String>>,
) -> Vec<ProjectNode> {
    let mut built: Vec<Option<ProjectNode>> = vec![None; tree.nodes.len()];

    for index in (0..tree.nodes.len()).rev() {
        let node = &tree.nodes[index];
        let children: Vec<ProjectNode> = node
            .children
            .iter()
            .map(|&child| {
                built[child]
                    .take()
                    .expect("children are assembled before their parent")
            })
            .collect();

        let mut contained: BTreeMap<String, EdgeInfo> = BTreeMap::new();
        for child in &children {
            for (target, info) in &child.contained_internal_dependencies {
                merge_edge(&mut contained, target, info.clone());
            }
        }
        for edge in &node.edges {
            merge_edge(
                &mut contained,
                &edge.target,
                EdgeInfo {
                    is_cyclic: is_cyclic(cyclic, &edge.source, &edge.target),
                    weight: edge.weight,
                    kind: edge.usage.clone(),
                },
            );
        }

        built[index] = Some(ProjectNode {
            leaf_id: node.leaf_id.clone(),
            name: node.name.clone(),
            children,
            level: node.level.map_or(-1, |level| level as i32),
            contained_leaves: node.contained_leaves.clone(),
            contained_internal_dependencies: contained,
        });
    }

    tree.roots
        .iter()
        .map(|&root| {
            built[root]
                .take()
                .expect("roots are assembled by the sweep")
        })
        .collect()
}

/// Fold another edge into the aggregate for `target`: weights add, cyclic
/// flags accumulate, usage kinds union (sorted alphabetically).
fn merge_edge(map: &mut BTreeMap<String, EdgeInfo>, target: &str, info: EdgeInfo) {
    match map.get_mut(target) {
        Some(existing) => {
            existing.is_cyclic |= info.is_cyclic;
            existing.weight += info.weight;
            existing.kind = merge_kinds(&existing.kind, &info.kind);
        }
        None => {
            map.insert(target.to_string(), info);
        }
    }
}

fn merge_kinds(left: &str, right: &str) -> String {
    let kinds: BTreeSet<&str> = left
        .split(',')
        .chain(right.split(','))
        .filter(|kind| !kind.is_empty())
        .collect();
    kinds.into_iter().collect::<Vec<_>>().join(",")
}
