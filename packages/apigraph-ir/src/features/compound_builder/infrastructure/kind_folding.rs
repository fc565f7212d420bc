//! Dialect kind folding
//!
//! Extractors for C++, C++/CX, Objective-C and IDL each use their own kind
//! vocabulary. Everything is folded onto [`CompoundKind`] / [`MemberKind`].

use crate::features::compound_builder::domain::{CompoundKind, MemberKind, TypeTraits};

/// Result of folding a compound kind tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FoldedKind {
    Compound(CompoundKind, TypeTraits),
    /// Documentation-only page (file, dir, group, ...); yields no compound
    DocumentationOnly,
}

pub fn fold_native_kind(raw: &str) -> FoldedKind {
    let kind = match raw.trim().to_ascii_lowercase().as_str() {
        "file" | "dir" | "page" | "group" | "example" => return FoldedKind::DocumentationOnly,
        "namespace" => CompoundKind::Namespace,
        "class" | "friend" | "category" | "exception" => CompoundKind::Class,
        "struct" | "union" => CompoundKind::Struct,
        "interface" | "protocol" | "service" | "singleton" => CompoundKind::Interface,
        "enum" => CompoundKind::Enum,
        "function" => CompoundKind::Function,
        other => CompoundKind::Unknown(other.to_string()),
    };
    FoldedKind::Compound(kind, TypeTraits::default())
}

/// Managed kinds never name documentation pages, so folding is total
pub fn fold_managed_kind(raw: &str) -> (CompoundKind, TypeTraits) {
    let mut traits = TypeTraits::default();
    let kind = match raw.trim().to_ascii_lowercase().as_str() {
        "class" => CompoundKind::Class,
        "interface" => CompoundKind::Interface,
        "struct" | "valuetype" => CompoundKind::Struct,
        "enum" => CompoundKind::Enum,
        "delegate" => {
            traits.is_delegate = true;
            CompoundKind::Class
        }
        "attribute" => {
            traits.is_attribute = true;
            CompoundKind::Class
        }
        "namespace" => CompoundKind::Namespace,
        other => CompoundKind::Unknown(other.to_string()),
    };
    (kind, traits)
}

/// Fold a member kind tag; `None` for tags that carry no API surface
pub fn fold_member_kind(raw: &str, raw_type: &str) -> Option<MemberKind> {
    let kind = match raw.trim().to_ascii_lowercase().as_str() {
        "variable" | "field" => {
            if raw_type.contains('^') {
                MemberKind::Class
            } else {
                MemberKind::Field
            }
        }
        "friend" => MemberKind::Class,
        "function" | "method" | "signal" | "slot" | "prototype" | "dcop" => MemberKind::Method,
        "constructor" => MemberKind::Constructor,
        "destructor" => MemberKind::Destructor,
        "property" => MemberKind::Property,
        "event" => MemberKind::Event,
        "typedef" | "using" => MemberKind::Typedef,
        "enumvalue" | "enum_value" => MemberKind::EnumValue,
        _ => return None,
    };
    Some(kind)
}

/// Strip template arguments and a category suffix from a short name:
/// `Vector<T>` -> `Vector`, `NSString(Additions)` -> `NSString`
pub fn bare_name(name: &str) -> &str {
    let end = name.find(['<', '(']).unwrap_or(name.len());
    name[..end].trim()
}
