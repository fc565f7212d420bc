//! Custom assertions for graph verification

use apigraph_ir::{CanonicalType, DiagnosticKind, Diagnostics, TypeGraph, TypeId, TypeKind};

/// Look a name up and fail with the graph's known names if it is missing
pub fn node<'g>(graph: &'g TypeGraph, full_name: &str) -> &'g CanonicalType {
    graph.lookup(full_name).unwrap_or_else(|| {
        let mut names: Vec<&str> = graph.iter().map(|n| n.full_name.as_str()).collect();
        names.sort_unstable();
        panic!("'{full_name}' not in the {} graph. Known: {names:?}", graph.universe())
    })
}

pub fn assert_kind(graph: &TypeGraph, full_name: &str, expected: TypeKind) {
    let actual = node(graph, full_name).kind();
    assert_eq!(actual, expected, "kind of '{full_name}'");
}

/// Assert that `id` points at the node named `full_name`
pub fn assert_target(graph: &TypeGraph, id: Option<TypeId>, full_name: &str) {
    let id = id.unwrap_or_else(|| panic!("expected a target named '{full_name}', got none"));
    let target = graph
        .get(id)
        .unwrap_or_else(|| panic!("target {id} is not in the graph"));
    assert_eq!(target.full_name, full_name);
}

pub fn assert_reported(diagnostics: &Diagnostics, kind: DiagnosticKind, subject: &str) {
    assert!(
        diagnostics.mentions(kind, subject),
        "expected a {kind} diagnostic for '{subject}', got: {:?}",
        diagnostics.of_kind(kind).map(|d| &d.subject).collect::<Vec<_>>()
    );
}

/// Every listed child points back at its parent and vice versa
pub fn assert_tree_consistent(graph: &TypeGraph) {
    for parent in graph.iter() {
        for &child in &parent.children {
            let child = graph.get(child).expect("child id in range");
            assert_eq!(
                child.parent,
                Some(parent.id),
                "'{}' is listed under '{}' but points elsewhere",
                child.full_name,
                parent.full_name
            );
        }
    }
}
