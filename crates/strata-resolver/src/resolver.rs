//! Reference resolution against the project dictionary and language tables
//!
//! Resolution is a pure function of the complete node collection: no I/O,
//! deterministic, order-independent. It never fails — a reference that
//! matches nothing degrades to an external `<unknown>` dependency.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use strata_core::{
    FileReport, NodeInfo, RawDependency, ResolvedDependency, ResolvedNode, SourceNode, SymbolPath,
    UsageKind,
};

use crate::dictionaries;
use crate::merge::merge_duplicate_nodes;

/// Lookup state shared across the resolution of all nodes in one run.
struct ResolutionContext {
    /// Short-name dictionary: final path segment -> all known paths ending
    /// in it, sorted for deterministic disambiguation.
    dictionary: HashMap<String, Vec<SymbolPath>>,
    /// Dot-joined ids of every node in this run.
    known_ids: HashSet<String>,
    /// Canonical path -> alternate exported names. Owned here, never stored
    /// on the paths themselves.
    aliases: BTreeMap<SymbolPath, BTreeSet<SymbolPath>>,
}

impl ResolutionContext {
    fn build(nodes: &[SourceNode]) -> Self {
        let mut dictionary: HashMap<String, Vec<SymbolPath>> = HashMap::new();
        let mut known_ids = HashSet::new();
        let mut aliases: BTreeMap<SymbolPath, BTreeSet<SymbolPath>> = BTreeMap::new();

        for node in nodes {
            known_ids.insert(node.path.dotted());
            dictionary
                .entry(node.path.name().to_string())
                .or_default()
                .push(node.path.clone());
            if !node.aliases.is_empty() {
                aliases
                    .entry(node.path.clone())
                    .or_default()
                    .extend(node.aliases.iter().cloned());
            }
        }
        for candidates in dictionary.values_mut() {
            candidates.sort();
            candidates.dedup();
        }
        ResolutionContext {
            dictionary,
            known_ids,
            aliases,
        }
    }

    fn has_alias(&self, canonical: &SymbolPath, alias: &SymbolPath) -> bool {
        self.aliases
            .get(canonical)
            .is_some_and(|set| set.contains(alias))
    }
}

/// Resolve every node of every file report into its final internal/external
/// dependency partition.
pub fn resolve_nodes(reports: Vec<FileReport>) -> Vec<ResolvedNode> {
    let nodes: Vec<SourceNode> = reports.into_iter().flat_map(|r| r.nodes).collect();
    let nodes = merge_duplicate_nodes(nodes);
    let ctx = ResolutionContext::build(&nodes);

    let mut resolved: Vec<ResolvedNode> = nodes.iter().map(|n| resolve_node(n, &ctx)).collect();
    resolved.sort_by_key(ResolvedNode::id);
    resolved
}

/// Project resolved nodes into the graph-algorithm view.
pub fn node_infos(nodes: &[ResolvedNode]) -> Vec<NodeInfo> {
    nodes.iter().map(ResolvedNode::node_info).collect()
}

fn resolve_node(node: &SourceNode, ctx: &ResolutionContext) -> ResolvedNode {
    // Keyed by (path, wildcard) so repeated references to the same symbol
    // collapse into one dependency with merged usage kinds.
    let mut merged: BTreeMap<(SymbolPath, bool), BTreeSet<UsageKind>> = BTreeMap::new();

    for type_ref in node.used_types.iter().flat_map(|t| t.flatten()) {
        let path = resolve_reference(node, &type_ref.name, ctx);
        if path == node.path {
            continue;
        }
        merged
            .entry((path, false))
            .or_default()
            .insert(type_ref.usage);
    }

    for import in &node.imports {
        if import.path.is_blank() || (!import.wildcard && import.path == node.path) {
            continue;
        }
        merged
            .entry((import.path.clone(), import.wildcard))
            .or_default()
            .insert(UsageKind::Usage);
    }

    let mut internal = BTreeSet::new();
    let mut external = BTreeSet::new();
    for ((path, wildcard), usages) in merged {
        let dep = ResolvedDependency {
            path,
            wildcard,
            usages,
        };
        if ctx.known_ids.contains(&dep.id()) {
            internal.insert(dep);
        } else {
            external.insert(dep);
        }
    }

    ResolvedNode {
        path: node.path.clone(),
        physical_path: node.physical_path.clone(),
        kind: node.kind,
        language: node.language,
        internal,
        external,
        used_types: node.used_types.clone(),
    }
}

/// Resolve a single raw reference string to a canonical path.
///
/// Order: exact known id, short-name dictionary (with import-aware
/// disambiguation), language primitives, language standard library, and
/// finally the `<unknown>` placeholder.
fn resolve_reference(node: &SourceNode, reference: &str, ctx: &ResolutionContext) -> SymbolPath {
    if ctx.known_ids.contains(reference) {
        return SymbolPath::from_dotted(reference);
    }

    let full = SymbolPath::from_dotted(reference);
    let plain = full.name().to_string();

    if let Some(all) = ctx.dictionary.get(&plain) {
        let candidates: Vec<&SymbolPath> = all.iter().filter(|p| **p != node.path).collect();
        if let Some(path) = pick_candidate(node, &full, &candidates, ctx) {
            return path.clone();
        }
    }
    if let Some(path) = dictionaries::primitives(node.language).get(plain.as_str()) {
        return path.clone();
    }
    if let Some(path) = dictionaries::standard_library(node.language).get(plain.as_str()) {
        return path.clone();
    }
    // A reference to the node's own name collapses to the node itself and is
    // dropped by the caller instead of degrading to a placeholder.
    if plain == node.path.name() {
        return node.path.clone();
    }
    SymbolPath::unknown(&plain)
}

fn find_in<'a>(
    candidates: &[&'a SymbolPath],
    pred: impl Fn(&SymbolPath) -> bool,
) -> Option<&'a SymbolPath> {
    candidates.iter().find(|p| pred(**p)).copied()
}

/// Disambiguate between candidate paths sharing the reference's short name.
fn pick_candidate<'a>(
    node: &SourceNode,
    full: &SymbolPath,
    candidates: &[&'a SymbolPath],
    ctx: &ResolutionContext,
) -> Option<&'a SymbolPath> {
    if candidates.is_empty() {
        return None;
    }

    // Same namespace as the referencing node wins outright.
    if let Some(path) = find_in(candidates, |p| p.namespace() == node.path.namespace()) {
        return Some(path);
    }

    let direct_imports: Vec<&RawDependency> = node
        .imports
        .iter()
        .filter(|i| !i.wildcard && !i.dot_import)
        .collect();
    let dot_imports: Vec<&RawDependency> =
        node.imports.iter().filter(|i| i.dot_import).collect();
    let wildcards: Vec<&RawDependency> = node.imports.iter().filter(|i| i.wildcard).collect();

    // A direct import naming the symbol pins the candidate exactly.
    for import in direct_imports
        .iter()
        .filter(|i| i.path.name() == full.name())
    {
        if let Some(path) = find_in(candidates, |p| *p == import.path) {
            return Some(path);
        }
    }

    // Dot imports make the package's symbols available unqualified.
    for import in &dot_imports {
        if let Some(path) = find_in(candidates, |p| p.namespace() == import.path.segments()) {
            return Some(path);
        }
    }

    // Wildcard import joined with the (possibly qualified) reference.
    for import in &wildcards {
        let joined = import.path.join(full);
        if let Some(path) = find_in(candidates, |p| *p == joined) {
            return Some(path);
        }
    }
    // Wildcard import naming the candidate's namespace.
    for import in &wildcards {
        if let Some(path) = find_in(candidates, |p| p.namespace() == import.path.segments()) {
            return Some(path);
        }
    }

    // Fully qualified reference matching a candidate.
    if let Some(path) = find_in(candidates, |p| p == full) {
        return Some(path);
    }

    // Package import carrying the candidate's namespace as a suffix, e.g.
    // `github.com/acme/project/domain/models` vs `domain.models`. Only
    // multi-segment namespaces to avoid false matches on names like `api`.
    for import in &direct_imports {
        if let Some(path) = find_in(candidates, |p| {
            let namespace = p.namespace();
            namespace == import.path.segments()
                || (import.path.len() > namespace.len()
                    && namespace.len() > 1
                    && import.path.segments().ends_with(namespace))
        }) {
            return Some(path);
        }
    }

    // An import may refer to a candidate through one of its exported aliases.
    for import in &node.imports {
        if let Some(path) = find_in(candidates, |p| ctx.has_alias(p, &import.path)) {
            return Some(path);
        }
    }

    // No import evidence. A unique candidate is taken as-is; between several,
    // prefer the one sharing the longest namespace prefix with the referrer
    // (ties broken by path order — candidates arrive sorted).
    if candidates.len() == 1 {
        return Some(candidates[0]);
    }
    let referrer = node.path.namespace();
    candidates.iter().copied().max_by(|a, b| {
        a.common_prefix_len(referrer)
            .cmp(&b.common_prefix_len(referrer))
            // Equal prefixes: prefer the lexicographically first candidate.
            .then_with(|| b.cmp(a))
    })
}
