//! Compound domain model
//!
//! A compound is one declared entity from one source document. Every
//! relationship is still a raw name here; the registry binds them later.

use serde::{Deserialize, Serialize};

use crate::features::declaration_parser::TypeDescriptor;
use crate::shared::models::Content;

/// Which source representation produced a compound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Native,
    Managed,
}

/// Canonical compound kinds after dialect folding
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundKind {
    Namespace,
    Class,
    Struct,
    Interface,
    Enum,
    Function,
    /// Kind tag nobody folds; kept verbatim for diagnostics
    Unknown(String),
}

impl CompoundKind {
    pub fn as_str(&self) -> &str {
        match self {
            CompoundKind::Namespace => "namespace",
            CompoundKind::Class => "class",
            CompoundKind::Struct => "struct",
            CompoundKind::Interface => "interface",
            CompoundKind::Enum => "enum",
            CompoundKind::Function => "function",
            CompoundKind::Unknown(raw) => raw,
        }
    }

    /// Class, struct or interface
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            CompoundKind::Class | CompoundKind::Struct | CompoundKind::Interface
        )
    }
}

impl std::fmt::Display for CompoundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Field,
    Property,
    Method,
    Constructor,
    Destructor,
    Event,
    Typedef,
    EnumValue,
    /// Nested runtime class or friend declaration
    Class,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Field => "field",
            MemberKind::Property => "property",
            MemberKind::Method => "method",
            MemberKind::Constructor => "constructor",
            MemberKind::Destructor => "destructor",
            MemberKind::Event => "event",
            MemberKind::Typedef => "typedef",
            MemberKind::EnumValue => "enum_value",
            MemberKind::Class => "class",
        }
    }

    /// Kinds that match each other across sources.
    ///
    /// Native fields surface as managed properties, so both share a family.
    pub fn family(&self) -> MemberFamily {
        match self {
            MemberKind::Field | MemberKind::Property | MemberKind::EnumValue => MemberFamily::Data,
            MemberKind::Method => MemberFamily::Callable,
            MemberKind::Constructor => MemberFamily::Constructor,
            MemberKind::Destructor => MemberFamily::Destructor,
            MemberKind::Event => MemberFamily::Event,
            MemberKind::Typedef | MemberKind::Class => MemberFamily::Type,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberFamily {
    Data,
    Callable,
    Constructor,
    Destructor,
    Event,
    Type,
}

/// Source language of a compound
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Cpp,
    CppCx,
    ObjC,
    CSharp,
    Idl,
    Other,
}

impl Language {
    /// Map an extractor language tag; a missing tag means C++
    pub fn from_tag(tag: Option<&str>) -> Self {
        let Some(tag) = tag else {
            return Language::Cpp;
        };
        match tag.trim().to_ascii_lowercase().as_str() {
            "" | "c++" | "cpp" | "c" => Language::Cpp,
            "c++/cx" | "cppcx" | "cx" => Language::CppCx,
            "objective-c" | "objc" | "objective-c++" => Language::ObjC,
            "c#" | "csharp" | "cs" => Language::CSharp,
            "idl" | "midl" => Language::Idl,
            _ => Language::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::CppCx => "cppcx",
            Language::ObjC => "objc",
            Language::CSharp => "csharp",
            Language::Idl => "idl",
            Language::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeTraits {
    pub is_delegate: bool,
    pub is_attribute: bool,
    pub is_sealed: bool,
    pub is_static: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterNode {
    pub name: String,
    pub raw_type: String,
    pub declared_type: TypeDescriptor,
    pub content: Content,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValueNode {
    pub name: String,
    pub initializer: Option<String>,
    pub content: Content,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberNode {
    pub name: String,
    pub kind: MemberKind,
    pub raw_type: String,
    pub raw_args: String,
    pub declared_type: TypeDescriptor,
    pub parameters: Vec<ParameterNode>,
    pub content: Content,
    pub is_static: bool,
}

/// One declared entity with raw-name edges
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundNode {
    /// Source-specific id, the cache key
    pub id: String,
    pub source: SourceKind,
    pub raw_name: String,
    /// Canonical dotted name, the registry key
    pub full_name: String,
    pub name: String,
    pub kind: CompoundKind,
    pub language: Language,
    pub parent_raw_name: Option<String>,
    pub members: Vec<MemberNode>,
    pub enum_values: Vec<EnumValueNode>,
    pub base_raw_names: Vec<String>,
    pub derived_raw_names: Vec<String>,
    pub child_raw_names: Vec<String>,
    pub template_params: Vec<String>,
    pub content: Content,
    pub traits: TypeTraits,
}

impl CompoundNode {
    /// Empty compound of the given kind; `full_name` must be canonical
    pub fn new(
        id: impl Into<String>,
        source: SourceKind,
        full_name: impl Into<String>,
        kind: CompoundKind,
    ) -> Self {
        let full_name = full_name.into();
        let name = crate::shared::models::names::short_name(&full_name).to_string();
        Self {
            id: id.into(),
            source,
            raw_name: full_name.clone(),
            parent_raw_name: crate::shared::models::names::scope_of(&full_name)
                .map(str::to_string),
            full_name,
            name,
            kind,
            language: Language::default(),
            members: Vec::new(),
            enum_values: Vec::new(),
            base_raw_names: Vec::new(),
            derived_raw_names: Vec::new(),
            child_raw_names: Vec::new(),
            template_params: Vec::new(),
            content: Content::default(),
            traits: TypeTraits::default(),
        }
    }

    pub fn members_of_kind(&self, kind: MemberKind) -> impl Iterator<Item = &MemberNode> {
        self.members.iter().filter(move |m| m.kind == kind)
    }

    pub fn add_child(&mut self, full_name: &str) {
        if !self.child_raw_names.iter().any(|c| c == full_name) {
            self.child_raw_names.push(full_name.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_name_and_parent() {
        let node = CompoundNode::new("x", SourceKind::Native, "Foo.Bar.Baz", CompoundKind::Class);
        assert_eq!(node.name, "Baz");
        assert_eq!(node.parent_raw_name.as_deref(), Some("Foo.Bar"));

        let top = CompoundNode::new("y", SourceKind::Native, "Top", CompoundKind::Namespace);
        assert!(top.parent_raw_name.is_none());
    }

    #[test]
    fn test_add_child_dedupes() {
        let mut node = CompoundNode::new("x", SourceKind::Native, "Foo", CompoundKind::Namespace);
        node.add_child("Foo.A");
        node.add_child("Foo.A");
        assert_eq!(node.child_raw_names, vec!["Foo.A"]);
    }

    #[test]
    fn test_language_tags() {
        assert_eq!(Language::from_tag(None), Language::Cpp);
        assert_eq!(Language::from_tag(Some("Objective-C")), Language::ObjC);
        assert_eq!(Language::from_tag(Some("C++/CX")), Language::CppCx);
        assert_eq!(Language::from_tag(Some("Fortran")), Language::Other);
    }

    #[test]
    fn test_member_families() {
        assert_eq!(MemberKind::Field.family(), MemberKind::Property.family());
        assert_ne!(MemberKind::Method.family(), MemberKind::Constructor.family());
    }
}
