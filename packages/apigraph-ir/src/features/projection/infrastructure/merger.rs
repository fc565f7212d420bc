//! Projection merger
//!
//! Pairs a native node with its managed counterpart and derives the
//! projected node from both. The managed side supplies the surface (kind,
//! name, members); documentation falls back to the native side where the
//! managed side has none:
//!
//! - node content: managed if non-empty, else native
//! - interface members: per member, from the native member of the same
//!   family and name
//! - method/constructor parameters: per parameter, by declared name
//! - enum values and fields: replaced wholesale by the native lists when
//!   the managed node has no content
//!
//! A merge is a pure function of the two immutable graphs, stored by full
//! name, so merging a pair again overwrites the node with identical data.

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::config::ProjectionConfig;
use crate::errors::{ApiGraphError, Result};
use crate::features::compound_builder::{MemberFamily, MemberKind};
use crate::features::projection::domain::{ProjectedId, ProjectedMember, ProjectedType};
use crate::features::projection::infrastructure::ProjectionGraph;
use crate::features::type_graph::{CanonicalType, Member, TypeGraph, TypeId, TypeKind, Universe};

type Pair<'g> = (Option<&'g CanonicalType>, Option<&'g CanonicalType>);

pub struct ProjectionMerger<'g> {
    config: ProjectionConfig,
    native: &'g TypeGraph,
    managed: &'g TypeGraph,
    graph: ProjectionGraph,
}

impl<'g> ProjectionMerger<'g> {
    pub fn new(config: &ProjectionConfig, native: &'g TypeGraph, managed: &'g TypeGraph) -> Self {
        Self {
            config: config.clone(),
            native,
            managed,
            graph: ProjectionGraph::default(),
        }
    }

    /// Merge one native/managed pair into a projected node
    pub fn merge(&mut self, native: TypeId, managed: TypeId) -> Result<ProjectedId> {
        let pair = self.pair(native, managed)?;
        Ok(self.store(pair).0)
    }

    /// Merge a pair, then pair their children by name, recursively.
    /// Children present on one side only are projected with that side alone.
    pub fn merge_namespaces(&mut self, native: TypeId, managed: TypeId) -> Result<ProjectedId> {
        let pair = self.pair(native, managed)?;
        let (id, pair) = self.store(pair);
        let mut expanded = FxHashSet::default();
        self.expand(id, pair, &mut expanded);
        Ok(id)
    }

    /// Project both universes starting from their global namespaces
    pub fn merge_all(mut self) -> Result<ProjectionGraph> {
        self.merge_namespaces(TypeId::GLOBAL, TypeId::GLOBAL)?;
        info!(
            "Projected {} nodes: {} paired, {} native-only, {} managed-only",
            self.graph.len(),
            self.graph.paired_count(),
            self.graph.native_only_count(),
            self.graph.managed_only_count()
        );
        Ok(self.graph)
    }

    pub fn graph(&self) -> &ProjectionGraph {
        &self.graph
    }

    pub fn into_graph(self) -> ProjectionGraph {
        self.graph
    }

    fn pair(&self, native: TypeId, managed: TypeId) -> Result<Pair<'g>> {
        let native_graph: &'g TypeGraph = self.native;
        let managed_graph: &'g TypeGraph = self.managed;
        let n = native_graph
            .get(native)
            .ok_or_else(|| ApiGraphError::invalid_access(native.to_string(), "merge (native)"))?;
        let m = managed_graph
            .get(managed)
            .ok_or_else(|| ApiGraphError::invalid_access(managed.to_string(), "merge (managed)"))?;
        Ok((Some(n), Some(m)))
    }

    /// Compose and upsert; returns the pair actually used
    fn store(&mut self, pair: Pair<'g>) -> (ProjectedId, Pair<'g>) {
        let (native, managed) = self.complete(pair);
        let node = self.compose(native, managed);
        debug!(
            "projected {} (native: {}, managed: {})",
            node.full_name,
            native.is_some(),
            managed.is_some()
        );
        (self.graph.upsert(node), (native, managed))
    }

    /// Fill a missing side from the node already projected under the same
    /// name, else from the other universe's node with the same full name.
    /// The two trees may nest a name at different depths.
    fn complete(&self, (native, managed): Pair<'g>) -> Pair<'g> {
        if native.is_some() && managed.is_some() {
            return (native, managed);
        }
        let native_graph: &'g TypeGraph = self.native;
        let managed_graph: &'g TypeGraph = self.managed;
        let existing = [native, managed]
            .into_iter()
            .flatten()
            .find_map(|node| self.graph.lookup(&node.full_name));

        let native = native
            .or_else(|| existing.and_then(|p| p.native).and_then(|id| native_graph.get(id)))
            .or_else(|| managed.and_then(|m| counterpart(native_graph, &m.full_name)));
        let managed = managed
            .or_else(|| existing.and_then(|p| p.managed).and_then(|id| managed_graph.get(id)))
            .or_else(|| native.and_then(|n| counterpart(managed_graph, &n.full_name)));
        (native, managed)
    }

    fn expand(
        &mut self,
        id: ProjectedId,
        (native, managed): Pair<'g>,
        expanded: &mut FxHashSet<ProjectedId>,
    ) {
        if !expanded.insert(id) {
            return;
        }

        let mut native_children = native
            .map(|n| projectable_children(self.native, n))
            .unwrap_or_default();
        let managed_children = managed
            .map(|m| projectable_children(self.managed, m))
            .unwrap_or_default();

        let mut pairs: Vec<Pair<'g>> = Vec::with_capacity(managed_children.len());
        for m in managed_children {
            let partner = native_children
                .iter()
                .position(|n| n.name.eq_ignore_ascii_case(&m.name))
                .map(|pos| native_children.remove(pos));
            pairs.push((partner, Some(m)));
        }
        pairs.extend(native_children.into_iter().map(|n| (Some(n), None)));

        for pair in pairs {
            let (child, pair) = self.store(pair);
            self.graph.link(id, child);
            self.expand(child, pair, expanded);
        }
    }

    fn compose(
        &self,
        native: Option<&CanonicalType>,
        managed: Option<&CanonicalType>,
    ) -> ProjectedType {
        let surface = managed.filter(|m| !m.is_facade()).or(native).or(managed);
        let full_name = surface.map(|s| s.full_name.clone()).unwrap_or_default();
        let name = surface.map(|s| s.name.clone()).unwrap_or_default();
        let kind = surface.map_or(TypeKind::Facade, CanonicalType::kind);

        let managed_content = managed.map(|m| &m.content).filter(|c| !c.is_empty());
        let content = managed_content
            .or(native.map(|n| &n.content))
            .cloned()
            .unwrap_or_default();

        let native_members = native.and_then(CanonicalType::members).unwrap_or_default();
        let mut members: Vec<ProjectedMember> = match managed.and_then(CanonicalType::members) {
            Some(list) => tag(list, Universe::Managed),
            None => tag(native_members, Universe::Native),
        };

        let mut enum_values = managed
            .and_then(CanonicalType::enum_values)
            .or_else(|| native.and_then(CanonicalType::enum_values))
            .unwrap_or_default()
            .to_vec();

        if let (Some(n), Some(m)) = (native, managed) {
            if self.config.copy_member_docs && m.is_interface() == Some(true) {
                copy_member_docs(&mut members, native_members);
            }
            if self.config.copy_parameter_docs {
                copy_parameter_docs(&mut members, native_members);
            }
            if self.config.copy_enum_values && m.content.is_empty() {
                if let Some(values) = n.enum_values().filter(|v| !v.is_empty()) {
                    enum_values = values.to_vec();
                }
                replace_fields(&mut members, native_members);
            }
        }

        ProjectedType {
            id: ProjectedId(0),
            full_name,
            name,
            native: native.map(|n| n.id),
            managed: managed.map(|m| m.id),
            kind,
            content,
            members,
            enum_values,
            children: Vec::new(),
            parent: None,
        }
    }
}

/// Facades and generic parameters are left out of the projection
fn is_projectable(node: &CanonicalType) -> bool {
    !node.is_facade() && node.kind() != TypeKind::GenericParameter
}

fn projectable_children<'g>(graph: &'g TypeGraph, node: &CanonicalType) -> Vec<&'g CanonicalType> {
    node.children
        .iter()
        .filter_map(|&id| graph.get(id))
        .filter(|c| is_projectable(c))
        .collect()
}

/// Same full name in the other universe, anywhere in its tree
fn counterpart<'g>(graph: &'g TypeGraph, full_name: &str) -> Option<&'g CanonicalType> {
    if full_name.is_empty() {
        return None;
    }
    graph.lookup(full_name).filter(|c| is_projectable(c))
}

fn tag(members: &[Member], origin: Universe) -> Vec<ProjectedMember> {
    members
        .iter()
        .map(|member| ProjectedMember {
            member: member.clone(),
            origin,
        })
        .collect()
}

fn copy_member_docs(members: &mut [ProjectedMember], native: &[Member]) {
    for projected in members.iter_mut().filter(|p| p.member.content.is_empty()) {
        let family = projected.member.kind.family();
        if let Some(source) = native.iter().find(|n| {
            n.kind.family() == family && n.name.eq_ignore_ascii_case(&projected.member.name)
        }) {
            projected.member.content = source.content.clone();
        }
    }
}

fn copy_parameter_docs(members: &mut [ProjectedMember], native: &[Member]) {
    let mut ctor_seen: Vec<usize> = Vec::new();
    for projected in members.iter_mut() {
        let source = match projected.member.kind {
            MemberKind::Constructor => {
                let arity = projected.member.parameters.len();
                let nth = ctor_seen.iter().filter(|&&a| a == arity).count();
                ctor_seen.push(arity);
                native
                    .iter()
                    .filter(|n| n.kind == MemberKind::Constructor && n.parameters.len() == arity)
                    .nth(nth)
            }
            MemberKind::Method => matching_method(&projected.member, native),
            _ => None,
        };
        let Some(source) = source else {
            continue;
        };
        for param in projected.member.parameters.iter_mut() {
            if !param.content.is_empty() {
                continue;
            }
            if let Some(native_param) = source.parameter(&param.name) {
                param.content = native_param.content.clone();
            }
        }
    }
}

/// Same name, preferring the overload with the same parameter count
fn matching_method<'a>(member: &Member, native: &'a [Member]) -> Option<&'a Member> {
    let mut candidates = native.iter().filter(|n| {
        n.kind.family() == MemberFamily::Callable && n.name.eq_ignore_ascii_case(&member.name)
    });
    let first = candidates.next()?;
    if first.parameters.len() == member.parameters.len() {
        return Some(first);
    }
    candidates
        .find(|n| n.parameters.len() == member.parameters.len())
        .or(Some(first))
}

fn replace_fields(members: &mut Vec<ProjectedMember>, native: &[Member]) {
    let native_fields: Vec<&Member> = native.iter().filter(|n| n.kind == MemberKind::Field).collect();
    if native_fields.is_empty() {
        return;
    }
    let rest: Vec<ProjectedMember> = std::mem::take(members)
        .into_iter()
        .filter(|p| p.member.kind != MemberKind::Field)
        .collect();
    members.extend(native_fields.into_iter().map(|field| ProjectedMember {
        member: field.clone(),
        origin: Universe::Native,
    }));
    members.extend(rest);
}
