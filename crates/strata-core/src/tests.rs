//! Unit tests for the core model

use std::path::Path;

use crate::*;

#[test]
fn path_segments_are_normalized_at_construction() {
    let path = SymbolPath::new(["de", "acme", "file.vue"]);
    assert_eq!(path.dotted(), "de.acme.file_vue");
    assert_eq!(path.underscored(), "de_acme_file_vue");
    assert_eq!(path.name(), "file_vue");
}

#[test]
fn path_equality_is_structural() {
    let a = SymbolPath::new(["a", "b", "C"]);
    let b = SymbolPath::from_dotted("a.b.C");
    assert_eq!(a, b);
    assert_ne!(a, SymbolPath::new(["a", "b"]));
}

#[test]
fn path_namespace_and_name() {
    let path = SymbolPath::new(["de", "acme", "Creature"]);
    assert_eq!(path.namespace(), ["de".to_string(), "acme".to_string()]);
    assert_eq!(path.name(), "Creature");
    assert!(SymbolPath::new(["Creature"]).namespace().is_empty());
}

#[test]
fn blank_paths_are_degenerate_not_errors() {
    assert!(SymbolPath::empty().is_blank());
    assert!(SymbolPath::new(["  "]).is_blank());
    assert!(!SymbolPath::new(["a"]).is_blank());
}

#[test]
fn unknown_placeholder_keeps_the_literal() {
    let path = SymbolPath::unknown("Mystery");
    assert_eq!(path.dotted(), "<unknown>.Mystery");
    assert_eq!(path.name(), "Mystery");
}

#[test]
fn common_prefix_len_measures_namespace_proximity() {
    let candidate = SymbolPath::new(["de", "acme", "web", "Handler"]);
    let referrer = SymbolPath::new(["de", "acme", "core", "Service"]);
    assert_eq!(candidate.common_prefix_len(referrer.namespace()), 2);
    assert_eq!(candidate.common_prefix_len(&[]), 0);
}

#[test]
fn type_ref_flatten_includes_nested_parameters() {
    let list_of_map = TypeRef {
        name: "List".to_string(),
        usage: UsageKind::ReturnValue,
        type_parameters: vec![TypeRef {
            name: "Map".to_string(),
            usage: UsageKind::Usage,
            type_parameters: vec![TypeRef::simple("String"), TypeRef::simple("Foo")],
        }],
    };
    let names: Vec<&str> = list_of_map.flatten().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["List", "Map", "String", "Foo"]);
}

#[test]
fn wildcard_dependency_id_never_collides_with_node_ids() {
    let dep = ResolvedDependency {
        path: SymbolPath::new(["a", "b"]),
        wildcard: true,
        usages: [UsageKind::Usage].into(),
    };
    assert_eq!(dep.id(), "a.b.*");
}

#[test]
fn file_report_parses_camel_case_extraction_json() {
    let json = r#"{
        "nodes": [{
            "path": ["de", "acme", "Creature"],
            "physicalPath": "src/Creature.java",
            "kind": "class",
            "language": "java",
            "imports": [{"path": ["java", "util", "List"], "wildcard": false}],
            "usedTypes": [{"name": "List", "usage": "return_value"}]
        }]
    }"#;
    let report = FileReport::from_json(json, Path::new("creature.json")).unwrap();
    assert_eq!(report.nodes.len(), 1);
    let node = &report.nodes[0];
    assert_eq!(node.id(), "de.acme.Creature");
    assert_eq!(node.kind, NodeKind::Class);
    assert_eq!(node.language, Language::Java);
    assert_eq!(node.imports[0].path.dotted(), "java.util.List");
    assert_eq!(node.used_types[0].usage, UsageKind::ReturnValue);
}

#[test]
fn file_report_rejects_malformed_json_at_the_boundary() {
    let err = FileReport::from_json("{ nodes: oops", Path::new("broken.json")).unwrap_err();
    assert!(matches!(err, IngestError::Malformed { .. }));
}

#[test]
fn node_info_projects_only_internal_dependencies() {
    let node = ResolvedNode {
        path: SymbolPath::new(["a", "A"]),
        physical_path: "a/A.java".to_string(),
        kind: NodeKind::Class,
        language: Language::Java,
        internal: [ResolvedDependency {
            path: SymbolPath::new(["a", "B"]),
            wildcard: false,
            usages: [UsageKind::Usage].into(),
        }]
        .into(),
        external: [ResolvedDependency {
            path: SymbolPath::unknown("Ghost"),
            wildcard: false,
            usages: [UsageKind::Usage].into(),
        }]
        .into(),
        used_types: Vec::new(),
    };
    let info = node.node_info();
    assert_eq!(info.id, "a.A");
    assert_eq!(info.dependencies.len(), 1);
    assert!(info.dependencies.contains("a.B"));
}

#[test]
fn usage_labels_join_with_commas() {
    let usages = std::collections::BTreeSet::from([UsageKind::Inheritance, UsageKind::Usage]);
    assert_eq!(model::join_usages(&usages), "usage,inheritance");
}
