//! Native documentation compound builder
//!
//! One [`NativeRecord`] becomes one compound, plus:
//! - one `Function` compound per distinct free-function name of a namespace
//!   (overloads grouped under it)
//! - one `Enum` compound per enum declared as a member
//!
//! Member types are parsed here; the names inside the descriptors stay
//! unresolved until the registry runs.

use tracing::debug;

use super::kind_folding::{bare_name, fold_member_kind, fold_native_kind, FoldedKind};
use crate::errors::{ApiGraphError, Result};
use crate::features::compound_builder::domain::{
    CompoundKind, CompoundNode, EnumValueNode, EnumValueRecord, Language, MemberKind,
    MemberNode, NativeMemberRecord, NativeParamRecord, NativeRecord, ParameterNode, SourceKind,
};
use crate::features::declaration_parser::{DeclarationParser, TypeDescriptor};
use crate::shared::diagnostics::Diagnostics;
use crate::shared::models::names::{canonical_name, qualify};
use crate::shared::models::{Content, DocText};

pub struct NativeCompoundBuilder<'p> {
    parser: &'p DeclarationParser,
}

impl<'p> NativeCompoundBuilder<'p> {
    pub fn new(parser: &'p DeclarationParser) -> Self {
        Self { parser }
    }

    /// Build every compound one record contributes.
    ///
    /// Documentation-only records yield an empty list. A record without a
    /// name is rejected with `MalformedInput`.
    pub fn build(
        &self,
        record: &NativeRecord,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<CompoundNode>> {
        let (kind, traits) = match fold_native_kind(&record.kind) {
            FoldedKind::DocumentationOnly => {
                debug!("Skipping documentation-only record {} ({})", record.id, record.kind);
                return Ok(Vec::new());
            }
            FoldedKind::Compound(kind, traits) => (kind, traits),
        };

        let raw_name = record
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ApiGraphError::malformed(&record.id, "compound has no name"))?;

        let full_name = canonical_name(bare_name(raw_name));
        if full_name.is_empty() {
            return Err(ApiGraphError::malformed(
                &record.id,
                format!("compound name '{}' is empty after normalization", raw_name),
            ));
        }

        let mut compound = CompoundNode::new(&record.id, SourceKind::Native, &full_name, kind);
        compound.raw_name = raw_name.to_string();
        compound.language = Language::from_tag(record.language.as_deref());
        compound.traits = traits;
        compound.content = Content::from_doc(&record.brief, &record.detailed);
        compound.base_raw_names = non_blank(&record.base_names);
        compound.derived_raw_names = non_blank(&record.derived_names);
        compound.template_params = non_blank(&record.template_params);
        for inner in record.inner_namespaces.iter().chain(&record.inner_classes) {
            let child = canonical_name(bare_name(inner));
            if !child.is_empty() {
                compound.add_child(&child);
            }
        }

        let mut nested_enums = Vec::new();
        let mut functions: Vec<CompoundNode> = Vec::new();

        for member in &record.members {
            if member.kind.trim().eq_ignore_ascii_case("enum") {
                let nested = self.build_nested_enum(record, &compound, member);
                compound.add_child(&nested.full_name);
                nested_enums.push(nested);
                continue;
            }

            // values carried by the member record, whatever its own kind
            if compound.kind == CompoundKind::Enum {
                compound
                    .enum_values
                    .extend(member.enum_values.iter().map(enum_value_node));
            }

            let Some(node) = self.build_member(member, &compound, diagnostics) else {
                debug!(
                    "Skipping member {} of {}: kind '{}' has no API surface",
                    member.name, compound.full_name, member.kind
                );
                continue;
            };

            match (compound.kind.clone(), node.kind) {
                (CompoundKind::Namespace, MemberKind::Method) => {
                    let function_name = qualify(&compound.full_name, &node.name);
                    if let Some(function) =
                        functions.iter_mut().find(|f| f.full_name == function_name)
                    {
                        if function.content.is_empty() {
                            function.content = node.content.clone();
                        }
                        function.members.push(node);
                    } else {
                        let mut function = CompoundNode::new(
                            format!("{}#{}", record.id, node.name),
                            SourceKind::Native,
                            &function_name,
                            CompoundKind::Function,
                        );
                        function.language = compound.language;
                        function.content = node.content.clone();
                        function.members.push(node);
                        compound.add_child(&function_name);
                        functions.push(function);
                    }
                }
                (CompoundKind::Enum, MemberKind::EnumValue) => {
                    compound.enum_values.push(EnumValueNode {
                        name: node.name,
                        initializer: initializer_of(&member.raw_args),
                        content: node.content,
                    });
                }
                _ => compound.members.push(node),
            }
        }

        if !functions.is_empty() || !nested_enums.is_empty() {
            debug!(
                "{}: synthesized {} function and {} enum compounds",
                compound.full_name,
                functions.len(),
                nested_enums.len()
            );
        }

        let mut nodes = Vec::with_capacity(1 + nested_enums.len() + functions.len());
        nodes.push(compound);
        nodes.extend(nested_enums);
        nodes.extend(functions);
        Ok(nodes)
    }

    /// Fold one member record; `None` for kinds without API surface
    fn build_member(
        &self,
        member: &NativeMemberRecord,
        enclosing: &CompoundNode,
        diagnostics: &mut Diagnostics,
    ) -> Option<MemberNode> {
        let name = member.name.trim();
        let mut kind = fold_member_kind(&member.kind, &member.raw_type)?;

        if kind == MemberKind::Method && enclosing.kind != CompoundKind::Namespace {
            let enclosing_name = bare_name(&enclosing.name);
            if bare_name(name) == enclosing_name {
                kind = MemberKind::Constructor;
            } else if name.strip_prefix('~').map(str::trim) == Some(enclosing_name) {
                kind = MemberKind::Destructor;
            }
        }

        // Whatever the extractor guessed as return type is overridden
        let declared_type = match kind {
            MemberKind::Constructor => TypeDescriptor::named(&enclosing.full_name),
            MemberKind::Destructor => TypeDescriptor::named("void"),
            MemberKind::EnumValue => TypeDescriptor::default(),
            _ => self.parser.parse_reporting(&member.raw_type, diagnostics),
        };

        let parameters = member
            .params
            .iter()
            .filter(|p| !is_void_parameter(p))
            .map(|p| self.build_parameter(p, diagnostics))
            .collect();

        Some(MemberNode {
            name: name.to_string(),
            kind,
            raw_type: member.raw_type.clone(),
            raw_args: member.raw_args.clone(),
            declared_type,
            parameters,
            content: Content::from_doc(&member.brief, &member.detailed),
            is_static: member.is_static,
        })
    }

    fn build_parameter(
        &self,
        param: &NativeParamRecord,
        diagnostics: &mut Diagnostics,
    ) -> ParameterNode {
        // IDL direction attributes are annotation tokens to the parser
        let declaration = format!("{} {}", param.attributes.trim(), param.raw_type.trim());
        ParameterNode {
            name: param.name.trim().to_string(),
            raw_type: param.raw_type.clone(),
            declared_type: self.parser.parse_reporting(declaration.trim(), diagnostics),
            content: Content::from_doc(&param.description, &DocText::default()),
        }
    }

    fn build_nested_enum(
        &self,
        record: &NativeRecord,
        enclosing: &CompoundNode,
        member: &NativeMemberRecord,
    ) -> CompoundNode {
        let name = bare_name(member.name.trim());
        let mut node = CompoundNode::new(
            format!("{}#{}", record.id, name),
            SourceKind::Native,
            qualify(&enclosing.full_name, name),
            CompoundKind::Enum,
        );
        node.raw_name = member.name.clone();
        node.language = enclosing.language;
        node.content = Content::from_doc(&member.brief, &member.detailed);
        node.enum_values = member.enum_values.iter().map(enum_value_node).collect();
        node
    }
}

fn enum_value_node(record: &EnumValueRecord) -> EnumValueNode {
    EnumValueNode {
        name: record.name.trim().to_string(),
        initializer: record.initializer.as_deref().and_then(initializer_of),
        content: Content::from_doc(&record.brief, &record.detailed),
    }
}

/// `= 0x10` -> `0x10`
fn initializer_of(raw: &str) -> Option<String> {
    let value = raw.trim().trim_start_matches('=').trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// `(void)` parameter lists
fn is_void_parameter(param: &NativeParamRecord) -> bool {
    param.name.trim().is_empty() && param.raw_type.trim() == "void"
}

fn non_blank(names: &[String]) -> Vec<String> {
    names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect()
}
