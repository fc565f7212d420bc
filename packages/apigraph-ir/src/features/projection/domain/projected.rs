//! Projected nodes
//!
//! A projected type pairs the native and managed nodes believed to denote
//! the same API. Either side may be missing for one-sided names.

use serde::{Deserialize, Serialize};

use crate::features::type_graph::{EnumValue, Member, TypeId, TypeKind, Universe};
use crate::shared::models::Content;

/// Index into a [`crate::features::projection::ProjectionGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProjectedId(pub u32);

impl ProjectedId {
    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_index(index: usize) -> Self {
        ProjectedId(index as u32)
    }
}

impl std::fmt::Display for ProjectedId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// A member of the projected surface and the universe it was taken from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedMember {
    pub member: Member,
    pub origin: Universe,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedType {
    pub id: ProjectedId,
    pub full_name: String,
    pub name: String,
    pub native: Option<TypeId>,
    pub managed: Option<TypeId>,
    pub kind: TypeKind,
    pub content: Content,
    pub members: Vec<ProjectedMember>,
    pub enum_values: Vec<EnumValue>,
    pub children: Vec<ProjectedId>,
    pub parent: Option<ProjectedId>,
}

impl ProjectedType {
    pub fn is_paired(&self) -> bool {
        self.native.is_some() && self.managed.is_some()
    }

    pub fn is_namespace(&self) -> bool {
        self.kind == TypeKind::Namespace
    }

    pub fn member(&self, name: &str) -> Option<&ProjectedMember> {
        self.members
            .iter()
            .find(|m| m.member.name.eq_ignore_ascii_case(name))
    }
}
