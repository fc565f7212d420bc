//! Phase-1 arena slots
//!
//! A slot records where a node came from; edges stay raw names inside the
//! owned compound until the resolve phase.

use crate::features::compound_builder::{CompoundKind, CompoundNode};
use crate::features::type_graph::{TypeId, TypeKind};

#[derive(Debug, Clone)]
pub(crate) enum SlotOrigin {
    GlobalNamespace,
    Compound(Box<CompoundNode>),
    Primitive,
    Facade,
    GenericParameter { owner: TypeId, position: usize },
}

#[derive(Debug, Clone)]
pub(crate) struct Slot {
    pub full_name: String,
    pub origin: SlotOrigin,
}

impl Slot {
    pub fn new(full_name: impl Into<String>, origin: SlotOrigin) -> Self {
        Self {
            full_name: full_name.into(),
            origin,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match &self.origin {
            SlotOrigin::GlobalNamespace => TypeKind::Namespace,
            SlotOrigin::Compound(compound) => compound_type_kind(&compound.kind),
            SlotOrigin::Primitive => TypeKind::Primitive,
            SlotOrigin::Facade => TypeKind::Facade,
            SlotOrigin::GenericParameter { .. } => TypeKind::GenericParameter,
        }
    }

    pub fn is_facade(&self) -> bool {
        matches!(self.origin, SlotOrigin::Facade)
    }

    /// Facades and primitives give way to a real definition
    pub fn is_placeholder(&self) -> bool {
        matches!(self.origin, SlotOrigin::Facade | SlotOrigin::Primitive)
    }
}

/// Variant a compound of this kind becomes; unknown kinds stay facades
pub(crate) fn compound_type_kind(kind: &CompoundKind) -> TypeKind {
    match kind {
        CompoundKind::Namespace => TypeKind::Namespace,
        CompoundKind::Class => TypeKind::Class,
        CompoundKind::Struct => TypeKind::Struct,
        CompoundKind::Interface => TypeKind::Interface,
        CompoundKind::Enum => TypeKind::Enum,
        CompoundKind::Function => TypeKind::Function,
        CompoundKind::Unknown(_) => TypeKind::Facade,
    }
}
