//! Canonical type nodes
//!
//! One closed tagged union over every variant the graph can hold. Data that
//! only some variants have lives in that variant's payload, so a query that
//! a variant cannot answer is a `match` arm, not a runtime failure.
//!
//! Facades stand in for names no source defined. Every semantic query on a
//! facade answers `None` (unknown); only [`CanonicalType::is_facade`] is total.

use serde::{Deserialize, Serialize};

use super::ids::{TypeId, Universe};
use super::member::{EnumValue, Member};
use crate::features::compound_builder::{Language, MemberKind, TypeTraits};
use crate::shared::models::Content;

/// Payload shared by classes, interfaces and structs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeType {
    pub members: Vec<Member>,
    pub base_types: Vec<TypeId>,
    pub derived_types: Vec<TypeId>,
    /// GenericParameter nodes owned by this type, in declaration order
    pub generic_parameters: Vec<TypeId>,
    pub traits: TypeTraits,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumType {
    pub values: Vec<EnumValue>,
    pub base_types: Vec<TypeId>,
}

/// Free function; every overload is one member
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionType {
    pub overloads: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericParameterType {
    pub owner: TypeId,
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum TypeVariant {
    Namespace,
    Class(CompositeType),
    Interface(CompositeType),
    Struct(CompositeType),
    Enum(EnumType),
    Function(FunctionType),
    GenericParameter(GenericParameterType),
    Primitive,
    Facade,
}

/// Fieldless mirror of [`TypeVariant`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Namespace,
    Class,
    Interface,
    Struct,
    Enum,
    Function,
    GenericParameter,
    Primitive,
    Facade,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Namespace => "namespace",
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
            TypeKind::Struct => "struct",
            TypeKind::Enum => "enum",
            TypeKind::Function => "function",
            TypeKind::GenericParameter => "generic_parameter",
            TypeKind::Primitive => "primitive",
            TypeKind::Facade => "facade",
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TypeVariant {
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeVariant::Namespace => TypeKind::Namespace,
            TypeVariant::Class(_) => TypeKind::Class,
            TypeVariant::Interface(_) => TypeKind::Interface,
            TypeVariant::Struct(_) => TypeKind::Struct,
            TypeVariant::Enum(_) => TypeKind::Enum,
            TypeVariant::Function(_) => TypeKind::Function,
            TypeVariant::GenericParameter(_) => TypeKind::GenericParameter,
            TypeVariant::Primitive => TypeKind::Primitive,
            TypeVariant::Facade => TypeKind::Facade,
        }
    }

    pub fn composite(&self) -> Option<&CompositeType> {
        match self {
            TypeVariant::Class(c) | TypeVariant::Interface(c) | TypeVariant::Struct(c) => Some(c),
            _ => None,
        }
    }

    pub(crate) fn composite_mut(&mut self) -> Option<&mut CompositeType> {
        match self {
            TypeVariant::Class(c) | TypeVariant::Interface(c) | TypeVariant::Struct(c) => Some(c),
            _ => None,
        }
    }
}

/// A node of one universe's resolved graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalType {
    pub id: TypeId,
    pub universe: Universe,
    /// Identity key inside the universe; `""` for the global namespace
    pub full_name: String,
    pub name: String,
    pub parent: Option<TypeId>,
    pub children: Vec<TypeId>,
    pub content: Content,
    pub language: Language,
    pub variant: TypeVariant,
}

impl CanonicalType {
    pub fn kind(&self) -> TypeKind {
        self.variant.kind()
    }

    pub fn is_facade(&self) -> bool {
        matches!(self.variant, TypeVariant::Facade)
    }

    pub fn is_global_namespace(&self) -> bool {
        self.id == TypeId::GLOBAL
    }

    /// `Some(kind == expected)`, or `None` on a facade
    fn is_kind(&self, expected: TypeKind) -> Option<bool> {
        if self.is_facade() {
            None
        } else {
            Some(self.kind() == expected)
        }
    }

    pub fn is_namespace(&self) -> Option<bool> {
        self.is_kind(TypeKind::Namespace)
    }

    pub fn is_class(&self) -> Option<bool> {
        self.is_kind(TypeKind::Class)
    }

    pub fn is_interface(&self) -> Option<bool> {
        self.is_kind(TypeKind::Interface)
    }

    pub fn is_struct(&self) -> Option<bool> {
        self.is_kind(TypeKind::Struct)
    }

    pub fn is_enum(&self) -> Option<bool> {
        self.is_kind(TypeKind::Enum)
    }

    pub fn is_function(&self) -> Option<bool> {
        self.is_kind(TypeKind::Function)
    }

    pub fn is_generic_parameter(&self) -> Option<bool> {
        self.is_kind(TypeKind::GenericParameter)
    }

    pub fn is_primitive(&self) -> Option<bool> {
        self.is_kind(TypeKind::Primitive)
    }

    pub fn composite(&self) -> Option<&CompositeType> {
        self.variant.composite()
    }

    pub fn traits(&self) -> Option<TypeTraits> {
        match &self.variant {
            TypeVariant::Facade => None,
            variant => Some(variant.composite().map(|c| c.traits).unwrap_or_default()),
        }
    }

    /// Members of composites and overloads of functions; empty for
    /// variants without members
    pub fn members(&self) -> Option<&[Member]> {
        match &self.variant {
            TypeVariant::Class(c) | TypeVariant::Interface(c) | TypeVariant::Struct(c) => {
                Some(&c.members)
            }
            TypeVariant::Function(f) => Some(&f.overloads),
            TypeVariant::Namespace
            | TypeVariant::Enum(_)
            | TypeVariant::GenericParameter(_)
            | TypeVariant::Primitive => Some(&[]),
            TypeVariant::Facade => None,
        }
    }

    pub fn base_types(&self) -> Option<&[TypeId]> {
        match &self.variant {
            TypeVariant::Class(c) | TypeVariant::Interface(c) | TypeVariant::Struct(c) => {
                Some(&c.base_types)
            }
            TypeVariant::Enum(e) => Some(&e.base_types),
            TypeVariant::Namespace
            | TypeVariant::Function(_)
            | TypeVariant::GenericParameter(_)
            | TypeVariant::Primitive => Some(&[]),
            TypeVariant::Facade => None,
        }
    }

    pub fn derived_types(&self) -> Option<&[TypeId]> {
        match &self.variant {
            TypeVariant::Class(c) | TypeVariant::Interface(c) | TypeVariant::Struct(c) => {
                Some(&c.derived_types)
            }
            TypeVariant::Namespace
            | TypeVariant::Enum(_)
            | TypeVariant::Function(_)
            | TypeVariant::GenericParameter(_)
            | TypeVariant::Primitive => Some(&[]),
            TypeVariant::Facade => None,
        }
    }

    pub fn generic_parameters(&self) -> Option<&[TypeId]> {
        match &self.variant {
            TypeVariant::Facade => None,
            variant => Some(
                variant
                    .composite()
                    .map(|c| c.generic_parameters.as_slice())
                    .unwrap_or(&[]),
            ),
        }
    }

    pub fn enum_values(&self) -> Option<&[EnumValue]> {
        match &self.variant {
            TypeVariant::Enum(e) => Some(&e.values),
            TypeVariant::Facade => None,
            _ => Some(&[]),
        }
    }

    fn members_of(&self, kind: MemberKind) -> Option<Vec<&Member>> {
        self.members()
            .map(|members| members.iter().filter(|m| m.kind == kind).collect())
    }

    pub fn fields(&self) -> Option<Vec<&Member>> {
        self.members_of(MemberKind::Field)
    }

    pub fn properties(&self) -> Option<Vec<&Member>> {
        self.members_of(MemberKind::Property)
    }

    pub fn methods(&self) -> Option<Vec<&Member>> {
        self.members_of(MemberKind::Method)
    }

    pub fn constructors(&self) -> Option<Vec<&Member>> {
        self.members_of(MemberKind::Constructor)
    }

    pub fn events(&self) -> Option<Vec<&Member>> {
        self.members_of(MemberKind::Event)
    }

    /// Outer `None`: unknown (facade). Inner `None`: no destructor declared.
    pub fn destructor(&self) -> Option<Option<&Member>> {
        self.members()
            .map(|members| members.iter().find(|m| m.kind == MemberKind::Destructor))
    }
}
