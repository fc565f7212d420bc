//! Compound cache
//!
//! Holds every compound built during a run, keyed by source id. Sibling
//! documents are linked here: explicit inner references win over the scope
//! prefix of a qualified name.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::features::compound_builder::domain::CompoundNode;

#[derive(Debug, Default)]
pub struct CompoundCache {
    nodes: Vec<CompoundNode>,
    by_id: FxHashMap<String, usize>,
    by_name: FxHashMap<String, usize>,
}

impl CompoundCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a compound; a second compound with a known id is ignored
    pub fn insert(&mut self, node: CompoundNode) -> bool {
        if self.by_id.contains_key(&node.id) {
            debug!("Compound {} already cached, keeping the first", node.id);
            return false;
        }
        let idx = self.nodes.len();
        self.by_id.insert(node.id.clone(), idx);
        self.by_name.entry(node.full_name.clone()).or_insert(idx);
        self.nodes.push(node);
        true
    }

    pub fn extend(&mut self, nodes: impl IntoIterator<Item = CompoundNode>) {
        for node in nodes {
            self.insert(node);
        }
    }

    pub fn get(&self, id: &str) -> Option<&CompoundNode> {
        self.by_id.get(id).map(|&idx| &self.nodes[idx])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompoundNode> {
        self.nodes.iter()
    }

    pub fn into_nodes(self) -> Vec<CompoundNode> {
        self.nodes
    }

    /// Link sibling documents.
    ///
    /// 1. A compound named in another compound's child list is re-parented
    ///    to that compound.
    /// 2. Every compound is listed as a child of its cached parent.
    ///
    /// Returns the number of re-parented compounds.
    pub fn attach_children(&mut self) -> usize {
        let mut reparented = 0;

        for idx in 0..self.nodes.len() {
            let parent_name = self.nodes[idx].full_name.clone();
            let children = self.nodes[idx].child_raw_names.clone();
            for child in children {
                let Some(&child_idx) = self.by_name.get(&child) else {
                    continue;
                };
                if child_idx == idx {
                    continue;
                }
                let slot = &mut self.nodes[child_idx].parent_raw_name;
                if slot.as_deref() != Some(parent_name.as_str()) {
                    *slot = Some(parent_name.clone());
                    reparented += 1;
                }
            }
        }

        for idx in 0..self.nodes.len() {
            let Some(parent) = self.nodes[idx].parent_raw_name.clone() else {
                continue;
            };
            if let Some(&parent_idx) = self.by_name.get(&parent) {
                if parent_idx != idx {
                    let child = self.nodes[idx].full_name.clone();
                    self.nodes[parent_idx].add_child(&child);
                }
            }
        }

        if reparented > 0 {
            debug!("Re-parented {} compounds from inner references", reparented);
        }
        reparented
    }
}
