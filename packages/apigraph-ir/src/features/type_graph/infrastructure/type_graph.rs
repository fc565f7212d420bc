//! Immutable resolved graph of one universe
//!
//! Produced by the registry's resolve phase. Nodes are stored in an arena
//! indexed by [`TypeId`]; every edge is already an index.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::errors::{ApiGraphError, Result};
use crate::features::type_graph::domain::{CanonicalType, TypeId, TypeKind, Universe};

#[derive(Debug, Clone)]
pub struct TypeGraph {
    universe: Universe,
    nodes: Vec<CanonicalType>,
    names: FxHashMap<String, TypeId>,
    lowercase_names: FxHashMap<String, TypeId>,
    case_insensitive: bool,
}

impl TypeGraph {
    pub(crate) fn new(
        universe: Universe,
        nodes: Vec<CanonicalType>,
        names: FxHashMap<String, TypeId>,
        lowercase_names: FxHashMap<String, TypeId>,
        case_insensitive: bool,
    ) -> Self {
        Self {
            universe,
            nodes,
            names,
            lowercase_names,
            case_insensitive,
        }
    }

    pub fn universe(&self) -> Universe {
        self.universe
    }

    pub fn get(&self, id: TypeId) -> Option<&CanonicalType> {
        self.nodes.get(id.index())
    }

    /// Find a node by canonical full name (lowercase retry in a case-folding universe)
    pub fn lookup(&self, full_name: &str) -> Option<&CanonicalType> {
        self.lookup_id(full_name).and_then(|id| self.get(id))
    }

    pub fn lookup_id(&self, full_name: &str) -> Option<TypeId> {
        if let Some(&id) = self.names.get(full_name) {
            return Some(id);
        }
        if self.case_insensitive {
            return self.lowercase_names.get(&full_name.to_lowercase()).copied();
        }
        None
    }

    pub fn global_namespace(&self) -> &CanonicalType {
        &self.nodes[TypeId::GLOBAL.index()]
    }

    /// Direct children of the global namespace
    pub fn roots(&self) -> impl Iterator<Item = &CanonicalType> {
        self.global_namespace()
            .children
            .iter()
            .filter_map(|&id| self.get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CanonicalType> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn facades(&self) -> impl Iterator<Item = &CanonicalType> {
        self.nodes.iter().filter(|n| n.is_facade())
    }

    /// All nodes below `id` through child edges, depth-first pre-order
    pub fn descendants(&self, id: TypeId) -> Vec<TypeId> {
        let mut out = Vec::new();
        let mut stack: Vec<TypeId> = match self.get(id) {
            Some(node) => node.children.iter().rev().copied().collect(),
            None => return out,
        };
        let mut seen = vec![false; self.nodes.len()];
        seen[id.index()] = true;

        while let Some(current) = stack.pop() {
            if std::mem::replace(&mut seen[current.index()], true) {
                continue;
            }
            out.push(current);
            if let Some(node) = self.get(current) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    /// Parent chain of `id`, nearest first, ending at the global namespace
    pub fn ancestors(&self, id: TypeId) -> Vec<TypeId> {
        let mut out = Vec::new();
        let mut current = self.get(id).and_then(|n| n.parent);
        while let Some(parent) = current {
            if out.contains(&parent) {
                break;
            }
            out.push(parent);
            current = self.get(parent).and_then(|n| n.parent);
        }
        out
    }

    /// Run a query that may be unknown and turn "unknown" into an error.
    ///
    /// ```rust,ignore
    /// let members = graph.require(id, "members", |t| t.members())?;
    /// ```
    pub fn require<'a, T>(
        &'a self,
        id: TypeId,
        query: &str,
        answer: impl FnOnce(&'a CanonicalType) -> Option<T>,
    ) -> Result<T> {
        let node = self
            .get(id)
            .ok_or_else(|| ApiGraphError::invalid_access(id.to_string(), query))?;
        answer(node).ok_or_else(|| ApiGraphError::invalid_access(&node.full_name, query))
    }

    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            universe: Some(self.universe),
            total: self.nodes.len(),
            ..Default::default()
        };
        for node in &self.nodes {
            match node.kind() {
                TypeKind::Namespace => stats.namespaces += 1,
                TypeKind::Class => stats.classes += 1,
                TypeKind::Interface => stats.interfaces += 1,
                TypeKind::Struct => stats.structs += 1,
                TypeKind::Enum => stats.enums += 1,
                TypeKind::Function => stats.functions += 1,
                TypeKind::GenericParameter => stats.generic_parameters += 1,
                TypeKind::Primitive => stats.primitives += 1,
                TypeKind::Facade => stats.facades += 1,
            }
        }
        stats
    }
}

/// Node counts per variant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub universe: Option<Universe>,
    pub total: usize,
    pub namespaces: usize,
    pub classes: usize,
    pub interfaces: usize,
    pub structs: usize,
    pub enums: usize,
    pub functions: usize,
    pub generic_parameters: usize,
    pub primitives: usize,
    pub facades: usize,
}
