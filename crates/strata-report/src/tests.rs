//! Unit tests for report assembly and export

use std::collections::BTreeMap;

use strata_core::{
    Language, NodeKind, ResolvedDependency, ResolvedNode, SymbolPath, UsageKind,
};
use strata_graph::{cyclic_edges, determine_cycles, levelize, CycleMode, DependencyTree};

use crate::assemble::assemble_report;
use crate::export::{to_json, write_report};

fn dependency(target: &str, usage: UsageKind) -> ResolvedDependency {
    ResolvedDependency {
        path: SymbolPath::from_dotted(target),
        wildcard: false,
        usages: [usage].into(),
    }
}

fn node(path: &str, internal: &[(&str, UsageKind)], external: &[&str]) -> ResolvedNode {
    ResolvedNode {
        path: SymbolPath::from_dotted(path),
        physical_path: format!("{}.java", path.replace('.', "/")),
        kind: NodeKind::Class,
        language: Language::Java,
        internal: internal
            .iter()
            .map(|&(target, usage)| dependency(target, usage))
            .collect(),
        external: external
            .iter()
            .map(|&target| dependency(target, UsageKind::Usage))
            .collect(),
        used_types: Vec::new(),
    }
}

fn report_for(resolved: &[ResolvedNode]) -> crate::dto::ProjectReport {
    let infos: Vec<_> = resolved.iter().map(ResolvedNode::node_info).collect();
    let cycles = determine_cycles(
        &infos,
        CycleMode::All {
            max_cycle_length: 10,
        },
    );
    let cyclic = cyclic_edges(&cycles);
    let mut tree = DependencyTree::build(resolved);
    levelize(&mut tree);
    assemble_report(&tree, resolved, &cyclic)
}

#[test]
fn leaves_carry_internal_dependencies_only() {
    let resolved = vec![
        node(
            "app.A",
            &[("app.B", UsageKind::Inheritance)],
            &["java.util.List", "<unknown>.Mystery"],
        ),
        node("app.B", &[], &[]),
    ];
    let report = report_for(&resolved);

    let a = &report.leaves["app.A"];
    assert_eq!(a.name, "A");
    assert_eq!(a.physical_path, "app/A.java");
    assert_eq!(a.dependencies.len(), 1);
    assert_eq!(a.dependencies["app.B"].kind, "inheritance");
    // External references stay off the report entirely.
    assert!(!a.dependencies.contains_key("java.util.List"));
    assert!(!a.dependencies.contains_key("<unknown>.Mystery"));
}

#[test]
fn report_document_has_exactly_tree_and_leaves_keys() {
    let resolved = vec![node("app.A", &[], &["java.util.List"])];
    let report = report_for(&resolved);
    let value: serde_json::Value =
        serde_json::from_str(&to_json(&report).unwrap()).unwrap();

    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, ["leaves", "projectTreeRoots"]);
}

#[test]
fn cycle_participation_is_annotated_on_both_sides() {
    let resolved = vec![
        node("app.A", &[("app.B", UsageKind::Usage)], &[]),
        node("app.B", &[("app.A", UsageKind::Usage)], &[]),
        node("app.C", &[("app.A", UsageKind::Usage)], &[]),
    ];
    let report = report_for(&resolved);

    assert!(report.leaves["app.A"].dependencies["app.B"].is_cyclic);
    assert!(report.leaves["app.B"].dependencies["app.A"].is_cyclic);
    assert!(!report.leaves["app.C"].dependencies["app.A"].is_cyclic);
}

#[test]
fn interior_nodes_aggregate_contained_dependencies() {
    let resolved = vec![
        node("pkg.a.X", &[("pkg.b.Z", UsageKind::Usage)], &[]),
        node("pkg.a.Y", &[("pkg.b.Z", UsageKind::Instantiation)], &[]),
        node("pkg.b.Z", &[], &[]),
    ];
    let report = report_for(&resolved);

    let pkg = &report.project_tree_roots[0];
    assert_eq!(pkg.name, "pkg");
    let aggregated = &pkg.contained_internal_dependencies["pkg.b.Z"];
    assert_eq!(aggregated.weight, 2);
    assert!(!aggregated.is_cyclic);
    assert_eq!(aggregated.kind, "instantiation,usage");
}

#[test]
fn namespace_positions_have_no_leaf_id_in_json() {
    let resolved = vec![node("de.acme.Widget", &[], &[])];
    let report = report_for(&resolved);
    let json = to_json(&report).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let de = &value["projectTreeRoots"][0];
    assert_eq!(de["name"], "de");
    assert!(de.get("leafId").is_none());

    let widget = &de["children"][0]["children"][0];
    assert_eq!(widget["leafId"], "de.acme.Widget");
    assert!(widget["containedLeaves"]
        .as_array()
        .unwrap()
        .contains(&serde_json::Value::String("de.acme.Widget".into())));
}

#[test]
fn edge_kind_serializes_under_the_type_key() {
    let resolved = vec![
        node("app.A", &[("app.B", UsageKind::ReturnValue)], &[]),
        node("app.B", &[], &[]),
    ];
    let report = report_for(&resolved);
    let value: serde_json::Value =
        serde_json::from_str(&to_json(&report).unwrap()).unwrap();

    let edge = &value["leaves"]["app.A"]["dependencies"]["app.B"];
    assert_eq!(edge["type"], "return_value");
    assert_eq!(edge["weight"], 1);
    assert_eq!(edge["isCyclic"], false);
}

#[test]
fn unleveled_positions_serialize_level_minus_one() {
    let resolved = vec![node("solo.Node", &[], &[])];
    let tree = DependencyTree::build(&resolved);
    let report = assemble_report(&tree, &resolved, &BTreeMap::new());
    assert_eq!(report.project_tree_roots[0].level, -1);
}

#[test]
fn report_round_trips_through_the_output_file() {
    let resolved = vec![
        node("app.A", &[("app.B", UsageKind::Usage)], &["java.lang.String"]),
        node("app.B", &[], &[]),
    ];
    let report = report_for(&resolved);

    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nested").join("out");
    let path = write_report(&report, "fixture", &target).unwrap();
    assert_eq!(path.file_name().unwrap(), "fixture.dg.json");

    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: crate::dto::ProjectReport = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn leaves_map_is_keyed_and_sorted_by_node_id() {
    let resolved = vec![
        node("z.Last", &[], &[]),
        node("a.First", &[], &[]),
    ];
    let report = report_for(&resolved);
    let ids: Vec<&String> = report.leaves.keys().collect();
    assert_eq!(ids, ["a.First", "z.Last"]);
}
