//! Level assignment over the namespace tree
//!
//! Levels are computed per parent: all leaf-to-leaf edges inside the
//! parent's subtree are lifted to the direct children containing their
//! endpoints, cycles among children are broken (for layering only), and the
//! children are then layered so that for every surviving edge A -> B,
//! level(A) > level(B). Level 0 holds the children that depend on nothing.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use strata_core::NodeInfo;

use crate::cycles::{determine_cycles, CycleMode};
use crate::tree::{DependencyTree, LeafEdge};

/// Assign a level to every node in the tree.
pub fn levelize(tree: &mut DependencyTree) {
    let leaf_edges: HashMap<String, Vec<LeafEdge>> = tree
        .nodes
        .iter()
        .filter_map(|node| node.leaf_id.clone().map(|id| (id, node.edges.clone())))
        .collect();

    // The root set behaves like the children of a synthetic root.
    let mut sibling_groups: Vec<Vec<usize>> = vec![tree.roots.clone()];
    sibling_groups.extend(
        tree.interior_indices()
            .into_iter()
            .map(|index| tree.nodes[index].children.clone()),
    );

    for group in sibling_groups {
        assign_levels(tree, &group, &leaf_edges);
    }
}

fn assign_levels(
    tree: &mut DependencyTree,
    children: &[usize],
    leaf_edges: &HashMap<String, Vec<LeafEdge>>,
) {
    if children.is_empty() {
        return;
    }
    tracing::debug!("levelizing {} sibling node(s)", children.len());

    // Which direct child contains each leaf of this subtree.
    let mut owner: HashMap<&str, usize> = HashMap::new();
    for &child in children {
        for leaf in &tree.nodes[child].contained_leaves {
            owner.insert(leaf.as_str(), child);
        }
    }

    // Lift subtree edges to child-to-child edges; edges leaving the subtree
    // or staying inside one child are not part of this layering problem.
    let mut weights: BTreeMap<(usize, usize), u32> = BTreeMap::new();
    for &child in children {
        for leaf in &tree.nodes[child].contained_leaves {
            for edge in leaf_edges.get(leaf.as_str()).into_iter().flatten() {
                if let Some(&target) = owner.get(edge.target.as_str()) {
                    if target != child {
                        *weights.entry((child, target)).or_insert(0) += edge.weight;
                    }
                }
            }
        }
    }

    let incoming: HashMap<usize, i64> = {
        let mut incoming = HashMap::new();
        for (&(_, target), &weight) in &weights {
            *incoming.entry(target).or_insert(0) += i64::from(weight);
        }
        incoming
    };

    break_cycles(tree, &mut weights, &incoming);

    let outgoing: HashMap<usize, BTreeSet<usize>> = {
        let mut outgoing: HashMap<usize, BTreeSet<usize>> = HashMap::new();
        for &(source, target) in weights.keys() {
            outgoing.entry(source).or_default().insert(target);
        }
        outgoing
    };

    // Layer 0: children that depend on nothing. Each following layer takes
    // the children whose targets are all already layered.
    let mut level_of: HashMap<usize, u32> = HashMap::new();
    for &child in children {
        if outgoing.get(&child).is_none_or(BTreeSet::is_empty) {
            level_of.insert(child, 0);
        }
    }
    let mut remaining: Vec<usize> = children
        .iter()
        .copied()
        .filter(|child| !level_of.contains_key(child))
        .collect();
    let mut current_level = 0u32;
    while !remaining.is_empty() {
        let next: Vec<usize> = remaining
            .iter()
            .copied()
            .filter(|child| {
                outgoing
                    .get(child)
                    .is_some_and(|targets| targets.iter().all(|t| level_of.contains_key(t)))
            })
            .collect();
        if next.is_empty() {
            // Cycle breaking leaves the lifted graph acyclic, so this only
            // triggers on adversarial input; terminate instead of looping.
            for child in remaining.drain(..) {
                level_of.insert(child, current_level + 1);
            }
            break;
        }
        for &child in &next {
            level_of.insert(child, current_level + 1);
        }
        remaining.retain(|child| !level_of.contains_key(child));
        current_level += 1;
    }

    for (child, level) in level_of {
        tree.nodes[child].level = Some(level);
    }
}

/// Remove one edge per detected cycle until the lifted child graph is
/// acyclic. Removal affects layering only; the report still carries and
/// annotates every underlying edge.
fn break_cycles(
    tree: &DependencyTree,
    weights: &mut BTreeMap<(usize, usize), u32>,
    incoming: &HashMap<usize, i64>,
) {
    let index_of: HashMap<&str, usize> = weights
        .keys()
        .flat_map(|&(source, target)| [source, target])
        .map(|index| (tree.nodes[index].id.as_str(), index))
        .collect();

    loop {
        let mut by_source: BTreeMap<usize, BTreeSet<String>> = BTreeMap::new();
        for &(source, target) in weights.keys() {
            by_source
                .entry(source)
                .or_default()
                .insert(tree.nodes[target].id.clone());
        }
        let infos: Vec<NodeInfo> = by_source
            .into_iter()
            .map(|(source, targets)| NodeInfo {
                id: tree.nodes[source].id.clone(),
                dependencies: targets,
            })
            .collect();

        let cycles = determine_cycles(&infos, CycleMode::Single);
        if cycles.is_empty() {
            return;
        }
        for cycle in &cycles {
            // Drop the cycle edge into the member with the fewest incoming
            // lifted edges; members without any incoming weight win the tie.
            let victim = cycle
                .edges
                .iter()
                .flat_map(|edge| [edge.from.as_str(), edge.to.as_str()])
                .filter_map(|id| index_of.get(id).copied())
                .min_by_key(|index| incoming.get(index).copied().unwrap_or(-1));
            let Some(victim) = victim else { continue };
            for edge in &cycle.edges {
                let (Some(&from), Some(&to)) = (
                    index_of.get(edge.from.as_str()),
                    index_of.get(edge.to.as_str()),
                ) else {
                    continue;
                };
                if to == victim {
                    weights.remove(&(from, to));
                }
            }
        }
    }
}
