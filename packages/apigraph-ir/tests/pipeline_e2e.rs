//! End-to-end: records in, resolved universes and projection out

mod common;

use apigraph_ir::features::compound_builder::{ManagedRecord, NativeRecord};
use apigraph_ir::{
    ApiGraphError, DiagnosticKind, GraphConfig, GraphPipeline, GraphSummary, Preset, TypeKind,
    Universe,
};
use common::*;
use std::io::Write;

#[test]
fn test_xaml_universes() {
    let graph = xaml_pipeline(GraphConfig::default()).build().unwrap();

    let button = node(&graph.native, "Windows.UI.Xaml.Controls.Button");
    assert_eq!(button.is_class(), Some(true));
    assert_eq!(button.constructors().unwrap().len(), 1);
    assert!(button.destructor().unwrap().is_some());
    assert_eq!(button.fields().unwrap()[0].name, "ClickMode");
    assert_target(
        &graph.native,
        button.base_types().unwrap().first().copied(),
        "Windows.UI.Xaml.UIElement",
    );

    let element = node(&graph.native, "Windows.UI.Xaml.UIElement");
    assert_eq!(element.derived_types().unwrap(), &[button.id]);
    let visibility = &element.properties().unwrap()[0].declared_type;
    assert_target(&graph.native, visibility.target, "Windows.UI.Xaml.Visibility");

    let click = &button.methods().unwrap()[0];
    assert!(click.declared_type.descriptor.is_event_token);
    assert!(click.parameters[0]
        .declared_type
        .descriptor
        .is_runtime_class_reference);

    let managed_button = node(&graph.managed, "Windows.UI.Xaml.Controls.Button");
    assert_eq!(managed_button.content.summary, "Represents a button control");
    assert_eq!(managed_button.constructors().unwrap()[0].name, "Button");
}

#[test]
fn test_generic_parameters_bound() {
    let graph = xaml_pipeline(GraphConfig::default()).build().unwrap();

    let vector = node(&graph.native, "Windows.Foundation.Collections.Vector");
    let t = vector.generic_parameters().unwrap()[0];
    let get_at = &vector.methods().unwrap()[0];
    assert_eq!(get_at.declared_type.target, Some(t));
    assert_kind(&graph.native, "Windows.Foundation.Collections.Vector.T", TypeKind::GenericParameter);

    let ivector = node(&graph.managed, "Windows.Foundation.Collections.IVector");
    let t = ivector.generic_parameters().unwrap()[0];
    assert_eq!(ivector.methods().unwrap()[0].declared_type.target, Some(t));
    assert_kind(&graph.managed, "System.UInt32", TypeKind::Primitive);
}

#[test]
fn test_diagnostics_and_summary() {
    let graph = xaml_pipeline(GraphConfig::default()).build().unwrap();
    assert_reported(&graph.diagnostics, DiagnosticKind::MalformedInput, "class_broken");
    assert!(graph.native.lookup("UIElement.h").is_none());

    let summary = graph.summary();
    assert_eq!(summary.malformed_inputs, 1);
    assert_eq!(summary.native.facades, NATIVE_UNKNOWN.len());
    assert_eq!(summary.native.enums, 1);
    assert_eq!(summary.projected_paired, 11);
    assert_eq!(
        summary.unknown_references,
        graph.native.facades().count() + graph.managed.facades().count()
    );

    let json = summary.to_json().unwrap();
    let back: GraphSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back, summary);
}

#[test]
fn test_facade_queries_are_recorded() {
    let mut graph = xaml_pipeline(GraphConfig::default()).build().unwrap();
    let button = graph.native.lookup_id("Windows.UI.Xaml.Controls.Button").unwrap();
    let size = graph.native.lookup_id(NATIVE_UNKNOWN[0]).unwrap();

    assert_eq!(graph.require(Universe::Native, button, "is_class", |t| t.is_class()), Some(true));
    assert_eq!(graph.summary().invalid_accesses, 0);

    assert_eq!(graph.require(Universe::Native, size, "is_class", |t| t.is_class()), None);
    assert_eq!(
        graph.require(Universe::Native, size, "members", |t| t.members().map(|m| m.len())),
        None
    );
    assert_reported(&graph.diagnostics, DiagnosticKind::InvalidAccess, NATIVE_UNKNOWN[0]);
    assert_eq!(graph.summary().invalid_accesses, 2);
}

#[test]
fn test_strict_preset_aborts_on_broken_record() {
    let result = xaml_pipeline(GraphConfig::preset(Preset::Strict)).build();
    match result {
        Err(ApiGraphError::MalformedInput { source_id, .. }) => assert_eq!(source_id, "class_broken"),
        other => panic!("expected MalformedInput, got {other:?}"),
    }
}

#[test]
fn test_documentation_only_input_is_empty() {
    let result = GraphPipeline::new(GraphConfig::default())
        .unwrap()
        .add_native(vec![NativeRecordBuilder::new("page", "index").build()])
        .build();
    assert!(matches!(result, Err(ApiGraphError::EmptyUniverse)));
}

#[test]
fn test_records_from_json() {
    let native: Vec<NativeRecord> = serde_json::from_str(
        r#"[
            {"id": "namespace_demo", "kind": "namespace", "name": "Demo"},
            {
                "id": "class_demo_1_1_widget",
                "kind": "class",
                "name": "Demo::Widget",
                "brief": {"paragraphs": [{"runs": [{"type": "text", "text": "A widget"}]}]},
                "members": [{"kind": "function", "name": "Show", "raw_type": "HRESULT"}]
            }
        ]"#,
    )
    .unwrap();
    let managed: Vec<ManagedRecord> = serde_json::from_str(
        r#"[{"name": "Widget", "namespace": "Demo", "kind": "class",
             "members": [{"kind": "method", "name": "Show", "type_name": "System.Void"}]}]"#,
    )
    .unwrap();

    let graph = GraphPipeline::new(GraphConfig::default())
        .unwrap()
        .add_native(native)
        .add_managed(managed)
        .build()
        .unwrap();

    let projected = graph.projected.unwrap();
    let widget = projected.lookup("Demo.Widget").unwrap();
    assert!(widget.is_paired());
    assert_eq!(widget.content.summary, "A widget");
    assert!(graph.diagnostics.is_empty());
}

#[test]
fn test_config_file_drives_the_run() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "version: 1\npreset: legacy\noverrides:\n  projection:\n    enabled: false\n    copy_member_docs: true\n    copy_parameter_docs: true\n    copy_enum_values: true\n"
    )
    .unwrap();

    let config = GraphConfig::from_yaml(file.path()).unwrap();
    assert_eq!(config.get_preset(), Preset::Legacy);
    assert!(!config.registry.upgrade_facades);

    let graph = xaml_pipeline(config).build().unwrap();
    assert!(graph.projected.is_none());
    assert_eq!(graph.summary().projected_total, 0);
}
