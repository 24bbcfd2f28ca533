//! End-to-end pipeline test: analyzer JSON in, `.dg.json` report out.
//!
//! Drives the full stack the way the CLI does (ingest, resolution, cycle
//! detection, levelization, assembly, export) over a small multi-file
//! fixture written to a temporary directory.

use std::collections::BTreeMap;
use std::fs;

use strata_core::FileReport;
use strata_graph::{
    cyclic_edges, determine_cycles, levelize, CycleMode, DependencyTree,
    DEFAULT_MAX_CYCLE_LENGTH,
};
use strata_report::{assemble_report, write_report, ProjectReport};
use strata_resolver::{node_infos, resolve_nodes};

const ORDERS_JSON: &str = r#"{
  "nodes": [
    {
      "path": ["de", "acme", "orders", "OrderService"],
      "physicalPath": "src/orders/OrderService.java",
      "kind": "class",
      "language": "java",
      "imports": [
        { "path": ["de", "acme", "billing", "Invoice"] },
        { "path": ["java", "util", "List"] }
      ],
      "usedTypes": [
        { "name": "Invoice", "usage": "instantiation" },
        { "name": "List", "usage": "return_value", "typeParameters": [{ "name": "Invoice" }] }
      ]
    }
  ]
}"#;

const BILLING_JSON: &str = r#"{
  "nodes": [
    {
      "path": ["de", "acme", "billing", "Invoice"],
      "physicalPath": "src/billing/Invoice.java",
      "kind": "class",
      "language": "java",
      "imports": [
        { "path": ["de", "acme", "orders", "OrderService"] }
      ],
      "usedTypes": [
        { "name": "OrderService", "usage": "usage" }
      ]
    },
    {
      "path": ["de", "acme", "billing", "Money"],
      "physicalPath": "src/billing/Money.java",
      "kind": "class",
      "language": "java"
    }
  ]
}"#;

fn run_pipeline(reports: Vec<FileReport>) -> ProjectReport {
    let resolved = resolve_nodes(reports);
    let infos = node_infos(&resolved);
    let cycles = determine_cycles(
        &infos,
        CycleMode::All {
            max_cycle_length: DEFAULT_MAX_CYCLE_LENGTH,
        },
    );
    let cyclic = cyclic_edges(&cycles);
    let mut tree = DependencyTree::build(&resolved);
    levelize(&mut tree);
    assemble_report(&tree, &resolved, &cyclic)
}

fn fixture_reports(dir: &std::path::Path) -> Vec<FileReport> {
    fs::write(dir.join("orders.json"), ORDERS_JSON).unwrap();
    fs::write(dir.join("billing.json"), BILLING_JSON).unwrap();
    fs::write(dir.join("notes.txt"), "not analyzer output").unwrap();

    let mut paths: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    paths
        .iter()
        .map(|path| FileReport::from_path(path).unwrap())
        .collect()
}

#[test]
fn analyzer_output_becomes_a_complete_report() {
    let dir = tempfile::tempdir().unwrap();
    let reports = fixture_reports(dir.path());
    assert_eq!(reports.len(), 2);

    let report = run_pipeline(reports);

    // Every resolved node appears exactly once in the leaves map.
    assert_eq!(report.leaves.len(), 3);
    let service = &report.leaves["de.acme.orders.OrderService"];
    assert_eq!(service.physical_path, "src/orders/OrderService.java");

    // Imports of project classes resolve internally; stdlib references go
    // external and are kept out of the report.
    assert!(service.dependencies.contains_key("de.acme.billing.Invoice"));
    assert!(!service.dependencies.contains_key("java.util.List"));

    // OrderService <-> Invoice form a cycle; Money touches none.
    assert!(service.dependencies["de.acme.billing.Invoice"].is_cyclic);
    let invoice = &report.leaves["de.acme.billing.Invoice"];
    assert!(invoice.dependencies["de.acme.orders.OrderService"].is_cyclic);
    assert!(report.leaves["de.acme.billing.Money"].dependencies.is_empty());

    // Namespace tree: one root chain de -> acme -> {billing, orders}.
    assert_eq!(report.project_tree_roots.len(), 1);
    let de = &report.project_tree_roots[0];
    assert_eq!(de.name, "de");
    let acme = &de.children[0];
    assert_eq!(acme.children.len(), 2);
    assert_eq!(de.contained_leaves.len(), 3);

    // The lifted billing <-> orders cycle was broken for layering, so both
    // groupings still carry a level.
    for group in &acme.children {
        assert!(group.level >= 0, "{} must be leveled", group.name);
    }
}

#[test]
fn report_file_round_trips_from_disk() {
    let input = tempfile::tempdir().unwrap();
    let reports = fixture_reports(input.path());
    let report = run_pipeline(reports);

    let output = tempfile::tempdir().unwrap();
    let path = write_report(&report, "acme", output.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "acme.dg.json");

    let parsed: ProjectReport =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed, report);
}

#[test]
fn skipping_graph_analysis_leaves_levels_unset() {
    let dir = tempfile::tempdir().unwrap();
    let reports = fixture_reports(dir.path());

    let resolved = resolve_nodes(reports);
    let tree = DependencyTree::build(&resolved);
    let report = assemble_report(&tree, &resolved, &BTreeMap::new());

    assert_eq!(report.project_tree_roots[0].level, -1);
    let service = &report.leaves["de.acme.orders.OrderService"];
    assert!(!service.dependencies["de.acme.billing.Invoice"].is_cyclic);
}
