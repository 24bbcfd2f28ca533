//! Pre-resolution merge of duplicate nodes
//!
//! C/C++ symbols are routinely split across a declaration header and a
//! definition file, which the analyzers report as two nodes with the same
//! symbol path. Resolution requires node ids to be unique, so duplicates for
//! these languages are merged into one node before the dictionary is built.

use std::collections::BTreeMap;

use strata_core::{Language, SourceNode, SymbolPath};

fn is_mergeable(language: Language) -> bool {
    matches!(language, Language::Cpp)
}

/// Merge nodes sharing a symbol path for languages with decl/def file
/// splits. Nodes of other languages pass through untouched.
pub fn merge_duplicate_nodes(nodes: Vec<SourceNode>) -> Vec<SourceNode> {
    let (candidates, mut result): (Vec<_>, Vec<_>) =
        nodes.into_iter().partition(|n| is_mergeable(n.language));

    let mut by_path: BTreeMap<SymbolPath, Vec<SourceNode>> = BTreeMap::new();
    for node in candidates {
        by_path.entry(node.path.clone()).or_default().push(node);
    }

    let mut merged_count = 0usize;
    for (_, group) in by_path {
        if group.len() > 1 {
            merged_count += group.len() - 1;
            result.push(merge_group(group));
        } else {
            result.extend(group);
        }
    }
    if merged_count > 0 {
        tracing::info!("merged {merged_count} duplicate declaration/definition node(s)");
    }
    result
}

fn merge_group(group: Vec<SourceNode>) -> SourceNode {
    let mut iter = group.into_iter();
    let mut merged = iter.next().expect("merge groups are non-empty");
    for node in iter {
        if !merged.physical_path.split(';').any(|p| p == node.physical_path) {
            merged.physical_path = format!("{};{}", merged.physical_path, node.physical_path);
        }
        for import in node.imports {
            if !merged.imports.contains(&import) {
                merged.imports.push(import);
            }
        }
        for type_ref in node.used_types {
            if !merged.used_types.contains(&type_ref) {
                merged.used_types.push(type_ref);
            }
        }
        for alias in node.aliases {
            if !merged.aliases.contains(&alias) {
                merged.aliases.push(alias);
            }
        }
    }
    merged
}
