//! Pipeline result types
//!
//! ```text
//! ApiGraph
//! ├── native:      TypeGraph                (resolved, immutable)
//! ├── managed:     TypeGraph                (resolved, immutable)
//! ├── projected:   Option<ProjectionGraph>  (None when projection is off)
//! └── diagnostics: Diagnostics              (every non-fatal anomaly of the run)
//! ```

use serde::{Deserialize, Serialize};

use crate::features::projection::ProjectionGraph;
use crate::features::type_graph::{CanonicalType, GraphStats, TypeGraph, TypeId, Universe};
use crate::shared::diagnostics::{DiagnosticKind, Diagnostics};

#[derive(Debug, Clone)]
pub struct ApiGraph {
    pub native: TypeGraph,
    pub managed: TypeGraph,
    pub projected: Option<ProjectionGraph>,
    pub diagnostics: Diagnostics,
}

impl ApiGraph {
    pub fn universe(&self, universe: Universe) -> Option<&TypeGraph> {
        match universe {
            Universe::Native => Some(&self.native),
            Universe::Managed => Some(&self.managed),
            Universe::Projected => None,
        }
    }

    /// Ask a node a question that a facade cannot answer.
    ///
    /// An unknown answer is recorded as an InvalidAccess diagnostic of this
    /// run and comes back as `None`.
    ///
    /// ```rust,ignore
    /// let is_class = graph.require(Universe::Native, id, "is_class", |t| t.is_class());
    /// ```
    pub fn require<'a, T>(
        &'a mut self,
        universe: Universe,
        id: TypeId,
        query: &str,
        answer: impl FnOnce(&'a CanonicalType) -> Option<T>,
    ) -> Option<T> {
        let graph: &'a TypeGraph = match universe {
            Universe::Native => &self.native,
            Universe::Managed => &self.managed,
            Universe::Projected => {
                self.diagnostics.report(
                    DiagnosticKind::InvalidAccess,
                    id.to_string(),
                    format!("'{}' has no canonical node in the projected universe", query),
                );
                return None;
            }
        };
        match graph.require(id, query, answer) {
            Ok(value) => Some(value),
            Err(err) => {
                let subject = graph
                    .get(id)
                    .map_or_else(|| id.to_string(), |node| node.full_name.clone());
                self.diagnostics
                    .report(DiagnosticKind::InvalidAccess, subject, err.to_string());
                None
            }
        }
    }

    pub fn summary(&self) -> GraphSummary {
        let projected = self.projected.as_ref();
        GraphSummary {
            native: self.native.stats(),
            managed: self.managed.stats(),
            projected_total: projected.map_or(0, ProjectionGraph::len),
            projected_paired: projected.map_or(0, ProjectionGraph::paired_count),
            projected_native_only: projected.map_or(0, ProjectionGraph::native_only_count),
            projected_managed_only: projected.map_or(0, ProjectionGraph::managed_only_count),
            parse_ambiguities: self.diagnostics.count(DiagnosticKind::ParseAmbiguity),
            unknown_references: self.diagnostics.count(DiagnosticKind::UnknownReference),
            malformed_inputs: self.diagnostics.count(DiagnosticKind::MalformedInput),
            invalid_accesses: self.diagnostics.count(DiagnosticKind::InvalidAccess),
        }
    }
}

/// Counts for one run, serializable for reports
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSummary {
    pub native: GraphStats,
    pub managed: GraphStats,
    pub projected_total: usize,
    pub projected_paired: usize,
    pub projected_native_only: usize,
    pub projected_managed_only: usize,
    pub parse_ambiguities: usize,
    pub unknown_references: usize,
    pub malformed_inputs: usize,
    pub invalid_accesses: usize,
}

impl GraphSummary {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
