//! Type registry, phase 2: resolution
//!
//! Walks the arena once and binds every raw-name edge to an index:
//! parent, children, bases, derived types, member and parameter types
//! (generic arguments included). Names still unknown at this point become
//! facades and are reported as UnknownReference. The result is immutable.
//!
//! Name binding inside a compound, first hit wins:
//! 1. the compound's own template parameters (`T` -> `Owner.T`)
//! 2. enclosing scopes, innermost first (`Bar` inside `Foo.Widget` -> `Foo.Bar`)
//! 3. registry lookup / facade creation

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::registry::TypeRegistry;
use crate::features::compound_builder::{
    CompoundKind, CompoundNode, Language, MemberNode, ParameterNode,
};
use crate::features::declaration_parser::{DeclarationParser, TypeDescriptor};
use crate::features::type_graph::{
    CanonicalType, CompositeType, EnumType, EnumValue, FunctionType, GenericParameterType, Member,
    Parameter, TypeGraph, TypeId, TypeKind, TypeRef, TypeVariant, Universe,
};
use crate::features::type_registry::domain::slot::{Slot, SlotOrigin};
use crate::shared::diagnostics::{DiagnosticKind, Diagnostics};
use crate::shared::models::names::{qualify, scope_of, short_name};

/// Template parameter names visible inside one compound
type GenericScope = Vec<(String, TypeId)>;

impl TypeRegistry {
    /// Resolve every edge and freeze the universe into a [`TypeGraph`]
    pub fn resolve(mut self, diagnostics: &mut Diagnostics) -> TypeGraph {
        let interned = self.slots.len();
        let generics = self.create_generic_parameters(interned);

        let mut resolved: Vec<Option<CanonicalType>> = vec![None; interned];
        for (idx, slot) in resolved.iter_mut().enumerate() {
            let compound = match &self.slots[idx].origin {
                SlotOrigin::Compound(compound) => (**compound).clone(),
                _ => continue,
            };
            let id = TypeId::from_index(idx);
            let scope = generics.get(&id).cloned().unwrap_or_default();
            *slot = Some(self.resolve_compound(id, &compound, &scope));
        }

        let mut nodes: Vec<CanonicalType> = Vec::with_capacity(self.slots.len());
        for (idx, slot) in self.slots.iter().enumerate() {
            let node = match resolved.get_mut(idx).and_then(Option::take) {
                Some(node) => node,
                None => self.leaf_node(TypeId::from_index(idx), slot),
            };
            nodes.push(node);
        }

        link_inverse_edges(&mut nodes);

        let mut facades = 0;
        for node in nodes.iter().filter(|n| n.is_facade()) {
            facades += 1;
            diagnostics.report(
                DiagnosticKind::UnknownReference,
                &node.full_name,
                format!(
                    "no definition in the {} universe; substituted a facade",
                    self.universe
                ),
            );
        }

        info!(
            "Resolved {} universe: {} nodes ({} interned before resolution, {} facades)",
            self.universe,
            nodes.len(),
            interned,
            facades
        );

        let folds_case = self.folds_case();
        TypeGraph::new(
            self.universe,
            nodes,
            self.names,
            self.lowercase_names,
            folds_case,
        )
    }

    /// One GenericParameter slot per template parameter, keyed `Owner.T`
    fn create_generic_parameters(&mut self, interned: usize) -> FxHashMap<TypeId, GenericScope> {
        let mut generics: FxHashMap<TypeId, GenericScope> = FxHashMap::default();

        for idx in 0..interned {
            let (owner_name, params) = match &self.slots[idx].origin {
                SlotOrigin::Compound(c) if !c.template_params.is_empty() => {
                    (c.full_name.clone(), c.template_params.clone())
                }
                _ => continue,
            };
            let owner = TypeId::from_index(idx);

            let mut scope = GenericScope::new();
            for (position, raw) in params.iter().enumerate() {
                let name = generic_parameter_name(&self.parser, raw);
                if name.is_empty() {
                    continue;
                }
                let key = qualify(&owner_name, &name);
                let id = match self.names.get(&key).copied() {
                    Some(id) => id,
                    None => self.push_slot(key, SlotOrigin::GenericParameter { owner, position }),
                };
                scope.push((name, id));
            }
            generics.insert(owner, scope);
        }
        generics
    }

    fn resolve_compound(
        &mut self,
        id: TypeId,
        compound: &CompoundNode,
        generics: &GenericScope,
    ) -> CanonicalType {
        let scope = compound.full_name.as_str();
        let parent = self.resolve_parent(id, compound);

        let base_types = self.resolve_names(&compound.base_raw_names, id, scope, generics);
        let derived_types = self.resolve_names(&compound.derived_raw_names, id, scope, generics);

        let mut children = Vec::with_capacity(compound.child_raw_names.len());
        for child in &compound.child_raw_names {
            let child_id = self.get_or_create(child);
            if child_id != id && child_id != TypeId::GLOBAL && !children.contains(&child_id) {
                children.push(child_id);
            }
        }

        let variant = match &compound.kind {
            CompoundKind::Namespace => TypeVariant::Namespace,
            CompoundKind::Class | CompoundKind::Interface | CompoundKind::Struct => {
                let mut members = Vec::with_capacity(compound.members.len());
                for member in &compound.members {
                    members.push(self.resolve_member(member, scope, generics));
                }
                let composite = CompositeType {
                    members,
                    base_types,
                    derived_types,
                    generic_parameters: generics.iter().map(|(_, id)| *id).collect(),
                    traits: compound.traits,
                };
                match compound.kind {
                    CompoundKind::Interface => TypeVariant::Interface(composite),
                    CompoundKind::Struct => TypeVariant::Struct(composite),
                    _ => TypeVariant::Class(composite),
                }
            }
            CompoundKind::Enum => TypeVariant::Enum(EnumType {
                values: compound
                    .enum_values
                    .iter()
                    .map(|v| EnumValue {
                        name: v.name.clone(),
                        initializer: v.initializer.clone(),
                        content: v.content.clone(),
                    })
                    .collect(),
                base_types,
            }),
            CompoundKind::Function => {
                let mut overloads = Vec::with_capacity(compound.members.len());
                for member in &compound.members {
                    overloads.push(self.resolve_member(member, scope, generics));
                }
                TypeVariant::Function(FunctionType { overloads })
            }
            CompoundKind::Unknown(raw) => {
                debug!("{} has unsupported kind '{}', kept as facade", compound.full_name, raw);
                TypeVariant::Facade
            }
        };

        CanonicalType {
            id,
            universe: self.universe,
            full_name: compound.full_name.clone(),
            name: compound.name.clone(),
            parent: Some(parent),
            children,
            content: compound.content.clone(),
            language: compound.language,
            variant,
        }
    }

    /// Explicit parent if interned, else the nearest interned enclosing
    /// scope, else the global namespace
    fn resolve_parent(&self, id: TypeId, compound: &CompoundNode) -> TypeId {
        let mut candidate = compound.parent_raw_name.as_deref();
        while let Some(name) = candidate {
            if let Some(&parent) = self.names.get(name) {
                if parent != id {
                    return parent;
                }
            }
            candidate = scope_of(name);
        }
        TypeId::GLOBAL
    }

    fn resolve_names(
        &mut self,
        raw_names: &[String],
        owner: TypeId,
        scope: &str,
        generics: &GenericScope,
    ) -> Vec<TypeId> {
        let mut out = Vec::with_capacity(raw_names.len());
        for raw in raw_names {
            let descriptor = self.parser.parse(raw);
            if let Some(target) = self.resolve_target(&descriptor, scope, generics) {
                if target != owner && !out.contains(&target) {
                    out.push(target);
                }
            }
        }
        out
    }

    fn resolve_member(
        &mut self,
        member: &MemberNode,
        scope: &str,
        generics: &GenericScope,
    ) -> Member {
        let declared_type = self.resolve_type_ref(&member.declared_type, scope, generics);
        let mut parameters = Vec::with_capacity(member.parameters.len());
        for param in &member.parameters {
            parameters.push(self.resolve_parameter(param, scope, generics));
        }
        Member {
            name: member.name.clone(),
            kind: member.kind,
            declared_type,
            parameters,
            content: member.content.clone(),
            is_static: member.is_static,
        }
    }

    fn resolve_parameter(
        &mut self,
        param: &ParameterNode,
        scope: &str,
        generics: &GenericScope,
    ) -> Parameter {
        Parameter {
            name: param.name.clone(),
            declared_type: self.resolve_type_ref(&param.declared_type, scope, generics),
            content: param.content.clone(),
        }
    }

    fn resolve_type_ref(
        &mut self,
        descriptor: &TypeDescriptor,
        scope: &str,
        generics: &GenericScope,
    ) -> TypeRef {
        let target = self.resolve_target(descriptor, scope, generics);
        let mut generic_arguments = Vec::with_capacity(descriptor.generic_arguments.len());
        for arg in &descriptor.generic_arguments {
            generic_arguments.push(self.resolve_type_ref(arg, scope, generics));
        }
        TypeRef {
            descriptor: descriptor.clone(),
            target,
            generic_arguments,
        }
    }

    fn resolve_target(
        &mut self,
        descriptor: &TypeDescriptor,
        scope: &str,
        generics: &GenericScope,
    ) -> Option<TypeId> {
        let key = descriptor.full_name.as_str();
        if key.is_empty() {
            return None;
        }

        if let Some((_, id)) = generics.iter().find(|(name, _)| name == key) {
            return Some(*id);
        }

        let mut enclosing = Some(scope).filter(|s| !s.is_empty());
        while let Some(current) = enclosing {
            if let Some(&id) = self.names.get(&qualify(current, key)) {
                return Some(id);
            }
            enclosing = scope_of(current);
        }

        Some(self.get_or_create(key))
    }

    /// Node for a slot that owns no compound
    fn leaf_node(&self, id: TypeId, slot: &Slot) -> CanonicalType {
        let (parent, variant) = match &slot.origin {
            SlotOrigin::GlobalNamespace => (None, TypeVariant::Namespace),
            SlotOrigin::Primitive => (None, TypeVariant::Primitive),
            SlotOrigin::GenericParameter { owner, position } => (
                Some(*owner),
                TypeVariant::GenericParameter(GenericParameterType {
                    owner: *owner,
                    position: *position,
                }),
            ),
            SlotOrigin::Facade | SlotOrigin::Compound(_) => (None, TypeVariant::Facade),
        };
        CanonicalType {
            id,
            universe: self.universe,
            full_name: slot.full_name.clone(),
            name: short_name(&slot.full_name).to_string(),
            parent,
            children: Vec::new(),
            content: Default::default(),
            language: default_language(self.universe),
            variant,
        }
    }
}

fn default_language(universe: Universe) -> Language {
    match universe {
        Universe::Managed => Language::CSharp,
        Universe::Native | Universe::Projected => Language::Cpp,
    }
}

/// `typename T` -> `T`, `class... Args` -> `Args`, `int N = 4` -> `N`
fn generic_parameter_name(parser: &DeclarationParser, raw: &str) -> String {
    let declaration = raw.split('=').next().unwrap_or_default();
    let parsed = parser.parse(declaration);
    parsed
        .full_name
        .rsplit(' ')
        .next()
        .unwrap_or_default()
        .trim_start_matches('.')
        .to_string()
}

/// Add parent -> child and base -> derived edges without duplicates
fn link_inverse_edges(nodes: &mut [CanonicalType]) {
    let mut child_edges = Vec::new();
    let mut adopted = Vec::new();
    let mut derived_edges = Vec::new();

    for node in nodes.iter() {
        if node.kind() != TypeKind::GenericParameter {
            if let Some(parent) = node.parent {
                child_edges.push((parent, node.id));
            }
        }
        for &child in &node.children {
            adopted.push((child, node.id));
        }
        if let Some(bases) = node.base_types() {
            for &base in bases {
                derived_edges.push((base, node.id));
            }
        }
    }

    for (child, parent) in adopted {
        if let Some(node) = nodes.get_mut(child.index()) {
            if node.parent.is_none() && child != TypeId::GLOBAL {
                node.parent = Some(parent);
            }
        }
    }

    for (parent, child) in child_edges {
        if let Some(node) = nodes.get_mut(parent.index()) {
            if !node.children.contains(&child) {
                node.children.push(child);
            }
        }
    }

    for (base, derived) in derived_edges {
        if let Some(composite) = nodes
            .get_mut(base.index())
            .and_then(|n| n.variant.composite_mut())
        {
            if !composite.derived_types.contains(&derived) {
                composite.derived_types.push(derived);
            }
        }
    }
}
