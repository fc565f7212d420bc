//! Resolved members and type references

use serde::{Deserialize, Serialize};

use super::ids::TypeId;
use crate::features::compound_builder::MemberKind;
use crate::features::declaration_parser::TypeDescriptor;
use crate::shared::models::Content;

/// A parsed declaration bound to the node it names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    pub descriptor: TypeDescriptor,
    /// `None` only for declarations without a type (enum values, empty)
    pub target: Option<TypeId>,
    pub generic_arguments: Vec<TypeRef>,
}

impl TypeRef {
    pub fn unresolved(descriptor: TypeDescriptor) -> Self {
        Self {
            descriptor,
            target: None,
            generic_arguments: Vec::new(),
        }
    }

    /// Every bound target, outermost first
    pub fn targets(&self) -> Vec<TypeId> {
        let mut out = Vec::new();
        self.collect_targets(&mut out);
        out
    }

    fn collect_targets(&self, out: &mut Vec<TypeId>) {
        if let Some(target) = self.target {
            out.push(target);
        }
        for arg in &self.generic_arguments {
            arg.collect_targets(out);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub declared_type: TypeRef,
    pub content: Content,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub kind: MemberKind,
    /// Return type for callables, value type otherwise
    pub declared_type: TypeRef,
    pub parameters: Vec<Parameter>,
    pub content: Content,
    pub is_static: bool,
}

impl Member {
    pub fn is_callable(&self) -> bool {
        matches!(
            self.kind,
            MemberKind::Method | MemberKind::Constructor | MemberKind::Destructor
        )
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub initializer: Option<String>,
    pub content: Content,
}
