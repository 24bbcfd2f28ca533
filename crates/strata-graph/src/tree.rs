//! Namespace tree built from symbol path prefixes
//!
//! Arena layout: nodes live in one `Vec` addressed by index, children always
//! carry a larger index than their parent. Traversals work on explicit
//! stacks or index order, never recursion, so deep namespace trees cannot
//! overflow the stack.

use std::collections::BTreeSet;

use strata_core::{ResolvedDependency, ResolvedNode};

/// One underlying leaf-to-leaf dependency edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafEdge {
    pub source: String,
    pub target: String,
    pub weight: u32,
    /// Usage kinds observed on this edge, comma-joined.
    pub usage: String,
}

/// A namespace-segment node in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Dot-joined path of this tree position.
    pub id: String,
    /// Last path segment.
    pub name: String,
    pub parent: Option<usize>,
    pub children: Vec<usize>,
    /// Set only when this position corresponds to an actual resolved node.
    /// Usually a tree leaf, but a node id can also name a namespace.
    pub leaf_id: Option<String>,
    /// Topological layer, assigned by the levelizer.
    pub level: Option<u32>,
    /// Internal dependency edges originating at this leaf (empty for
    /// namespace groupings).
    pub edges: Vec<LeafEdge>,
    /// Leaf ids transitively contained in this subtree.
    pub contained_leaves: BTreeSet<String>,
}

/// The namespace tree: an arena of nodes plus the root indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyTree {
    pub nodes: Vec<TreeNode>,
    pub roots: Vec<usize>,
}

impl DependencyTree {
    /// Build the tree from the flat resolved node collection by inserting
    /// each node's path segment-by-segment into a trie.
    pub fn build(resolved: &[ResolvedNode]) -> DependencyTree {
        let mut tree = DependencyTree::default();

        let mut ordered: Vec<&ResolvedNode> = resolved.iter().collect();
        ordered.sort_by_key(|n| n.id());

        for node in ordered {
            if node.path.is_blank() {
                continue;
            }
            let index = tree.insert_path(node.path.segments());
            let leaf_id = node.id();
            tree.nodes[index].leaf_id = Some(leaf_id.clone());
            tree.nodes[index].edges = node
                .internal
                .iter()
                .map(|dependency: &ResolvedDependency| LeafEdge {
                    source: leaf_id.clone(),
                    target: dependency.id(),
                    weight: 1,
                    usage: dependency.usage_label(),
                })
                .collect();
        }

        tree.compute_contained_leaves();
        tree
    }

    fn insert_path(&mut self, segments: &[String]) -> usize {
        let mut parent: Option<usize> = None;
        let mut current_roots_or_children: Vec<usize> = self.roots.clone();
        let mut index = usize::MAX;

        for (depth, segment) in segments.iter().enumerate() {
            let found = current_roots_or_children
                .iter()
                .copied()
                .find(|&child| self.nodes[child].name == *segment);
            index = match found {
                Some(existing) => existing,
                None => {
                    let id = segments[..=depth].join(".");
                    let new_index = self.nodes.len();
                    self.nodes.push(TreeNode {
                        id,
                        name: segment.clone(),
                        parent,
                        children: Vec::new(),
                        leaf_id: None,
                        level: None,
                        edges: Vec::new(),
                        contained_leaves: BTreeSet::new(),
                    });
                    match parent {
                        Some(p) => self.nodes[p].children.push(new_index),
                        None => self.roots.push(new_index),
                    }
                    new_index
                }
            };
            parent = Some(index);
            current_roots_or_children = self.nodes[index].children.clone();
        }
        index
    }

    /// Children always have larger indices than parents, so one reverse
    /// sweep aggregates containment bottom-up.
    fn compute_contained_leaves(&mut self) {
        for index in (0..self.nodes.len()).rev() {
            let mut contained: BTreeSet<String> = self.nodes[index]
                .leaf_id
                .iter()
                .cloned()
                .collect();
            for child in self.nodes[index].children.clone() {
                contained.extend(self.nodes[child].contained_leaves.iter().cloned());
            }
            self.nodes[index].contained_leaves = contained;
        }
    }

    /// All indices with at least one child, plus an implicit slot for the
    /// root set (returned separately by the levelizer).
    pub fn interior_indices(&self) -> Vec<usize> {
        (0..self.nodes.len())
            .filter(|&index| !self.nodes[index].children.is_empty())
            .collect()
    }
}
