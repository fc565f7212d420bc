//! Managed assembly compound builder
//!
//! Reflection records name nested types `Outer+Inner` and keep generic
//! arity suffixes (``List`1``); both are normalized to the dotted canonical
//! form. Namespaces have no records of their own, so a namespace compound is
//! synthesized for every namespace that holds a type and for each ancestor.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use super::kind_folding::fold_managed_kind;
use crate::errors::{ApiGraphError, Result};
use crate::features::compound_builder::domain::{
    CompoundKind, CompoundNode, EnumValueNode, Language, ManagedMemberRecord, ManagedParamRecord,
    ManagedRecord, MemberKind, MemberNode, ParameterNode, SourceKind,
};
use crate::features::declaration_parser::{DeclarationParser, TypeDescriptor};
use crate::shared::diagnostics::{DiagnosticKind, Diagnostics};
use crate::shared::models::names::{
    ancestor_scopes, canonical_name, qualify, remove_arity_markers, scope_of,
};
use crate::shared::models::{Content, DocText};

pub struct ManagedCompoundBuilder<'p> {
    parser: &'p DeclarationParser,
}

impl<'p> ManagedCompoundBuilder<'p> {
    pub fn new(parser: &'p DeclarationParser) -> Self {
        Self { parser }
    }

    /// Build every record, then add namespaces.
    ///
    /// A malformed record is skipped with a MalformedInput diagnostic, or
    /// aborts the whole batch when `fail_on_malformed` is set.
    pub fn build_all(
        &self,
        records: &[ManagedRecord],
        fail_on_malformed: bool,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<CompoundNode>> {
        let mut nodes = Vec::with_capacity(records.len());
        for record in records {
            match self.build(record, diagnostics) {
                Ok(node) => nodes.push(node),
                Err(err) if fail_on_malformed || !err.is_document_local() => return Err(err),
                Err(err) => diagnostics.report(
                    DiagnosticKind::MalformedInput,
                    record_id(record),
                    err.to_string(),
                ),
            }
        }

        let namespaces = synthesize_namespaces(&nodes);
        info!(
            "Managed compounds: {} types, {} namespaces",
            nodes.len(),
            namespaces.len()
        );
        nodes.extend(namespaces);
        Ok(nodes)
    }

    /// Build the compound for one reflected type
    pub fn build(
        &self,
        record: &ManagedRecord,
        diagnostics: &mut Diagnostics,
    ) -> Result<CompoundNode> {
        let raw_name = record
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ApiGraphError::malformed(record_id(record), "type has no name"))?;

        let local_name = managed_name(raw_name);
        let full_name = qualify(&canonical_name(&record.namespace), &local_name);
        let (kind, mut traits) = fold_managed_kind(&record.kind);
        traits.is_sealed |= record.is_sealed;
        traits.is_static |= record.is_static;

        let mut compound =
            CompoundNode::new(record_id(record), SourceKind::Managed, &full_name, kind);
        compound.raw_name = raw_name.to_string();
        compound.language = Language::CSharp;
        compound.traits = traits;
        compound.content = Content::from_doc(&record.summary, &record.remarks);
        compound.template_params = record
            .generic_params
            .iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        compound.base_raw_names = record
            .base_type
            .iter()
            .chain(&record.interfaces)
            .map(|name| managed_name(name.trim()))
            .filter(|name| !name.is_empty())
            .collect();

        for member in &record.members {
            if compound.kind == CompoundKind::Enum && member.kind.trim().eq_ignore_ascii_case("field")
            {
                if member.name.trim() == "value__" {
                    continue;
                }
                compound.enum_values.push(EnumValueNode {
                    name: member.name.trim().to_string(),
                    initializer: member.value.clone(),
                    content: Content::from_doc(&member.summary, &member.remarks),
                });
                continue;
            }

            match self.build_member(member, &compound, diagnostics) {
                Some(node) => compound.members.push(node),
                None => debug!(
                    "Skipping member {} of {}: kind '{}'",
                    member.name, compound.full_name, member.kind
                ),
            }
        }

        Ok(compound)
    }

    fn build_member(
        &self,
        member: &ManagedMemberRecord,
        enclosing: &CompoundNode,
        diagnostics: &mut Diagnostics,
    ) -> Option<MemberNode> {
        let raw_name = member.name.trim();
        let mut kind = match member.kind.trim().to_ascii_lowercase().as_str() {
            "field" => MemberKind::Field,
            "property" => MemberKind::Property,
            "method" => MemberKind::Method,
            "constructor" => MemberKind::Constructor,
            "event" => MemberKind::Event,
            _ => return None,
        };

        let is_type_initializer = matches!(raw_name, ".cctor" | "#cctor");
        if matches!(raw_name, ".ctor" | "#ctor") || is_type_initializer {
            kind = MemberKind::Constructor;
        }

        let (name, declared_type) = if kind == MemberKind::Constructor {
            (
                enclosing.name.clone(),
                TypeDescriptor::named(&enclosing.full_name),
            )
        } else {
            let declaration = managed_name(member.type_name.trim());
            (
                raw_name.to_string(),
                self.parser.parse_reporting(&declaration, diagnostics),
            )
        };

        Some(MemberNode {
            name,
            kind,
            raw_type: member.type_name.clone(),
            raw_args: String::new(),
            declared_type,
            parameters: member
                .params
                .iter()
                .map(|p| self.build_parameter(p, diagnostics))
                .collect(),
            content: Content::from_doc(&member.summary, &member.remarks),
            is_static: member.is_static || is_type_initializer,
        })
    }

    fn build_parameter(
        &self,
        param: &ManagedParamRecord,
        diagnostics: &mut Diagnostics,
    ) -> ParameterNode {
        let mut declared_type = self
            .parser
            .parse_reporting(&managed_name(param.type_name.trim()), diagnostics);
        declared_type.is_out_param |= param.is_out;
        declared_type.is_optional |= param.is_optional;
        declared_type.is_in_param |= !param.is_out;

        ParameterNode {
            name: param.name.trim().to_string(),
            raw_type: param.type_name.clone(),
            declared_type,
            content: Content::from_doc(&param.description, &DocText::default()),
        }
    }
}

/// `Outer`1+Inner` -> `Outer.Inner`
fn managed_name(raw: &str) -> String {
    remove_arity_markers(raw).replace('+', ".")
}

fn record_id(record: &ManagedRecord) -> String {
    let name = record.name.as_deref().map(str::trim).unwrap_or("?");
    format!("T:{}", qualify(record.namespace.trim(), name))
}

/// Namespace compounds for every namespace holding a top-level type, and
/// for every ancestor of those namespaces.
pub fn synthesize_namespaces(types: &[CompoundNode]) -> Vec<CompoundNode> {
    let type_names: FxHashSet<&str> = types.iter().map(|t| t.full_name.as_str()).collect();
    let mut namespaces: BTreeMap<String, CompoundNode> = BTreeMap::new();

    for ty in types {
        if ty.kind == CompoundKind::Namespace {
            continue;
        }
        let Some(scope) = ty.parent_raw_name.as_deref() else {
            continue;
        };
        // Nested types hang off their outer type, not a namespace
        if type_names.contains(scope) {
            continue;
        }

        namespace_entry(&mut namespaces, scope).add_child(&ty.full_name);
        for ancestor in ancestor_scopes(scope) {
            namespace_entry(&mut namespaces, ancestor);
        }
    }

    let names: Vec<String> = namespaces.keys().cloned().collect();
    for name in names {
        if let Some(parent) = scope_of(&name) {
            namespace_entry(&mut namespaces, parent).add_child(&name);
        }
    }

    namespaces.into_values().collect()
}

fn namespace_entry<'a>(
    namespaces: &'a mut BTreeMap<String, CompoundNode>,
    name: &str,
) -> &'a mut CompoundNode {
    namespaces.entry(name.to_string()).or_insert_with(|| {
        let mut node = CompoundNode::new(
            format!("N:{}", name),
            SourceKind::Managed,
            name,
            CompoundKind::Namespace,
        );
        node.language = Language::CSharp;
        node
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(namespace: &str, name: &str, kind: &str) -> ManagedRecord {
        ManagedRecord {
            name: Some(name.into()),
            namespace: namespace.into(),
            kind: kind.into(),
            ..Default::default()
        }
    }

    fn member(kind: &str, name: &str, type_name: &str) -> ManagedMemberRecord {
        ManagedMemberRecord {
            kind: kind.into(),
            name: name.into(),
            type_name: type_name.into(),
            ..Default::default()
        }
    }

    fn build(record: &ManagedRecord) -> CompoundNode {
        let parser = DeclarationParser::new();
        let mut diags = Diagnostics::new();
        ManagedCompoundBuilder::new(&parser)
            .build(record, &mut diags)
            .unwrap()
    }

    #[test]
    fn test_nested_and_generic_names() {
        let node = build(&record("System.Collections.Generic", "List`1+Enumerator", "struct"));
        assert_eq!(node.full_name, "System.Collections.Generic.List.Enumerator");
        assert_eq!(
            node.parent_raw_name.as_deref(),
            Some("System.Collections.Generic.List")
        );
        assert_eq!(node.kind, CompoundKind::Struct);
        assert_eq!(node.id, "T:System.Collections.Generic.List`1+Enumerator");
    }

    #[test]
    fn test_constructor_reclassified() {
        let mut rec = record("Windows.UI.Xaml", "Button", "class");
        rec.members = vec![member("method", ".ctor", "System.Void"), member("method", "#ctor", "")];
        rec.members.push(member("method", ".cctor", ""));
        let node = build(&rec);

        assert!(node
            .members
            .iter()
            .all(|m| m.kind == MemberKind::Constructor && m.name == "Button"));
        assert_eq!(node.members[0].declared_type.full_name, "Windows.UI.Xaml.Button");
        assert!(node.members[2].is_static);
    }

    #[test]
    fn test_delegate_and_attribute_traits() {
        let node = build(&record("Windows.Foundation", "TypedEventHandler`2", "delegate"));
        assert_eq!(node.kind, CompoundKind::Class);
        assert!(node.traits.is_delegate);
        assert_eq!(node.name, "TypedEventHandler");

        let node = build(&record("Windows.Foundation.Metadata", "ActivatableAttribute", "attribute"));
        assert!(node.traits.is_attribute);
    }

    #[test]
    fn test_enum_fields_become_values() {
        let mut rec = record("Windows.UI.Xaml", "Visibility", "enum");
        rec.members = vec![
            member("field", "value__", "System.Int32"),
            ManagedMemberRecord {
                value: Some("0".into()),
                ..member("field", "Visible", "Windows.UI.Xaml.Visibility")
            },
            member("field", "Collapsed", "Windows.UI.Xaml.Visibility"),
        ];
        let node = build(&rec);
        assert!(node.members.is_empty());
        let names: Vec<&str> = node.enum_values.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Visible", "Collapsed"]);
        assert_eq!(node.enum_values[0].initializer.as_deref(), Some("0"));
    }

    #[test]
    fn test_bases_normalized() {
        let mut rec = record("App", "Items", "class");
        rec.base_type = Some("System.Collections.ObjectModel.Collection`1<App.Item>".into());
        rec.interfaces = vec!["App.Outer+IInner".into()];
        let node = build(&rec);
        assert_eq!(
            node.base_raw_names,
            vec!["System.Collections.ObjectModel.Collection<App.Item>", "App.Outer.IInner"]
        );
    }

    #[test]
    fn test_out_parameter_flags() {
        let mut method = member("method", "TryGetValue", "System.Boolean");
        method.params = vec![
            ManagedParamRecord {
                name: "key".into(),
                type_name: "System.String".into(),
                ..Default::default()
            },
            ManagedParamRecord {
                name: "value".into(),
                type_name: "System.Object&".into(),
                is_out: true,
                ..Default::default()
            },
        ];
        let mut rec = record("App", "Cache", "class");
        rec.members = vec![method];
        let node = build(&rec);
        let params = &node.members[0].parameters;
        assert!(params[0].declared_type.is_in_param);
        assert!(params[1].declared_type.is_out_param);
        assert!(params[1].declared_type.is_reference);
    }

    #[test]
    fn test_build_all_synthesizes_namespaces() {
        let parser = DeclarationParser::new();
        let mut diags = Diagnostics::new();
        let records = vec![
            record("Windows.UI.Xaml", "UIElement", "class"),
            record("Windows.UI.Xaml", "UIElement+Nested", "class"),
            record("Windows.Foundation", "Uri", "class"),
            ManagedRecord {
                namespace: "Broken".into(),
                kind: "class".into(),
                ..Default::default()
            },
        ];
        let nodes = ManagedCompoundBuilder::new(&parser)
            .build_all(&records, false, &mut diags)
            .unwrap();

        assert_eq!(diags.count(DiagnosticKind::MalformedInput), 1);
        let namespaces: Vec<&str> = nodes
            .iter()
            .filter(|n| n.kind == CompoundKind::Namespace)
            .map(|n| n.full_name.as_str())
            .collect();
        assert_eq!(
            namespaces,
            vec!["Windows", "Windows.Foundation", "Windows.UI", "Windows.UI.Xaml"]
        );

        let windows = nodes.iter().find(|n| n.full_name == "Windows").unwrap();
        assert_eq!(windows.child_raw_names, vec!["Windows.Foundation", "Windows.UI"]);
        assert!(windows.parent_raw_name.is_none());

        let xaml = nodes.iter().find(|n| n.full_name == "Windows.UI.Xaml").unwrap();
        assert_eq!(xaml.child_raw_names, vec!["Windows.UI.Xaml.UIElement"]);
    }
}
