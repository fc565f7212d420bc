//! The projected universe

use rustc_hash::FxHashMap;

use crate::features::projection::domain::{ProjectedId, ProjectedType};
use crate::shared::models::names::scope_of;

#[derive(Debug, Clone, Default)]
pub struct ProjectionGraph {
    pub(crate) nodes: Vec<ProjectedType>,
    pub(crate) names: FxHashMap<String, ProjectedId>,
}

impl ProjectionGraph {
    pub fn get(&self, id: ProjectedId) -> Option<&ProjectedType> {
        self.nodes.get(id.index())
    }

    pub fn lookup(&self, full_name: &str) -> Option<&ProjectedType> {
        self.names.get(full_name).and_then(|&id| self.get(id))
    }

    /// Projected global namespace; `None` until the global pair is merged
    pub fn root(&self) -> Option<&ProjectedType> {
        self.lookup("")
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectedType> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn paired_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_paired()).count()
    }

    pub fn native_only_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| n.native.is_some() && n.managed.is_none())
            .count()
    }

    pub fn managed_only_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| n.managed.is_some() && n.native.is_none())
            .count()
    }

    /// Insert or overwrite by full name; the id of an existing name is kept
    /// together with its tree links
    pub(crate) fn upsert(&mut self, mut node: ProjectedType) -> ProjectedId {
        if let Some(&id) = self.names.get(&node.full_name) {
            let slot = &mut self.nodes[id.index()];
            node.id = id;
            node.parent = slot.parent;
            node.children = std::mem::take(&mut slot.children);
            *slot = node;
            return id;
        }
        let id = ProjectedId::from_index(self.nodes.len());
        node.id = id;
        self.names.insert(node.full_name.clone(), id);
        self.nodes.push(node);
        id
    }

    /// Attach `child` under `parent`. A node keeps a single parent; an
    /// existing one is only replaced by the node's enclosing scope.
    pub(crate) fn link(&mut self, parent: ProjectedId, child: ProjectedId) {
        if parent == child {
            return;
        }
        let current = match self.get(child) {
            Some(node) => node.parent,
            None => return,
        };
        if let Some(existing) = current.filter(|&p| p != parent) {
            if !self.is_scope_of(parent, child) || self.is_scope_of(existing, child) {
                return;
            }
            if let Some(old) = self.nodes.get_mut(existing.index()) {
                old.children.retain(|&c| c != child);
            }
        }

        if let Some(node) = self.nodes.get_mut(child.index()) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(parent.index()) {
            if !node.children.contains(&child) {
                node.children.push(child);
            }
        }
    }

    fn is_scope_of(&self, scope: ProjectedId, child: ProjectedId) -> bool {
        match (self.get(scope), self.get(child)) {
            (Some(scope), Some(child)) => {
                scope_of(&child.full_name).unwrap_or_default() == scope.full_name
            }
            _ => false,
        }
    }
}
