//! End-to-end graph build
//!
//! ```rust,ignore
//! let graph = GraphPipeline::new(GraphConfig::default())?
//!     .add_native(native_records)
//!     .add_managed(managed_records)
//!     .build()?;
//! println!("{}", graph.summary().to_json()?);
//! ```

use tracing::{info, warn};

use crate::config::GraphConfig;
use crate::errors::{ApiGraphError, Result};
use crate::features::compound_builder::{
    CompoundCache, CompoundNode, ManagedCompoundBuilder, ManagedRecord, NativeCompoundBuilder,
    NativeRecord,
};
use crate::features::declaration_parser::DeclarationParser;
use crate::features::projection::ProjectionMerger;
use crate::features::type_graph::{TypeGraph, Universe};
use crate::features::type_registry::TypeRegistry;
use crate::pipeline::result::ApiGraph;
use crate::shared::diagnostics::{DiagnosticKind, Diagnostics};

pub struct GraphPipeline {
    config: GraphConfig,
    native: Vec<NativeRecord>,
    managed: Vec<ManagedRecord>,
}

impl GraphPipeline {
    /// Validates the configuration up front
    pub fn new(config: GraphConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            native: Vec::new(),
            managed: Vec::new(),
        })
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn add_native(mut self, records: impl IntoIterator<Item = NativeRecord>) -> Self {
        self.native.extend(records);
        self
    }

    pub fn add_managed(mut self, records: impl IntoIterator<Item = ManagedRecord>) -> Self {
        self.managed.extend(records);
        self
    }

    pub fn build(self) -> Result<ApiGraph> {
        info!(
            "Building API graph: {} native records, {} managed records ({})",
            self.native.len(),
            self.managed.len(),
            self.config.describe()
        );

        let parser = DeclarationParser::from_config(&self.config.parser);
        let mut diagnostics = Diagnostics::new();

        let native = self.build_native(&parser, &mut diagnostics)?;
        let managed = self.build_managed(&parser, &mut diagnostics)?;
        if native.is_empty() && managed.is_empty() {
            return Err(ApiGraphError::EmptyUniverse);
        }

        let native = self.resolve(Universe::Native, &parser, native, &mut diagnostics);
        let managed = self.resolve(Universe::Managed, &parser, managed, &mut diagnostics);

        let projected = if self.config.projection.enabled {
            Some(ProjectionMerger::new(&self.config.projection, &native, &managed).merge_all()?)
        } else {
            None
        };

        let graph = ApiGraph {
            native,
            managed,
            projected,
            diagnostics,
        };
        let summary = graph.summary();
        info!(
            "API graph built: {} native nodes, {} managed nodes, {} projected, {} diagnostics",
            summary.native.total,
            summary.managed.total,
            summary.projected_total,
            graph.diagnostics.len()
        );
        Ok(graph)
    }

    fn build_native(
        &self,
        parser: &DeclarationParser,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<CompoundNode>> {
        let builder = NativeCompoundBuilder::new(parser);
        let mut cache = CompoundCache::new();
        for record in &self.native {
            match builder.build(record, diagnostics) {
                Ok(nodes) => cache.extend(nodes),
                Err(err) => self.skip_or_fail(err, &record.id, diagnostics)?,
            }
        }
        cache.attach_children();
        info!("Native compounds: {}", cache.len());
        Ok(cache.into_nodes())
    }

    fn build_managed(
        &self,
        parser: &DeclarationParser,
        diagnostics: &mut Diagnostics,
    ) -> Result<Vec<CompoundNode>> {
        let nodes = ManagedCompoundBuilder::new(parser).build_all(
            &self.managed,
            self.config.fail_on_malformed,
            diagnostics,
        )?;
        let mut cache = CompoundCache::new();
        cache.extend(nodes);
        Ok(cache.into_nodes())
    }

    /// A document-local error is a diagnostic unless the run must fail on it
    fn skip_or_fail(
        &self,
        err: ApiGraphError,
        subject: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<()> {
        if !err.is_document_local() || self.config.fail_on_malformed {
            return Err(err);
        }
        let subject = match &err {
            ApiGraphError::MalformedInput { source_id, .. } => source_id.clone(),
            _ => subject.to_string(),
        };
        diagnostics.report(DiagnosticKind::MalformedInput, subject, err.to_string());
        Ok(())
    }

    fn resolve(
        &self,
        universe: Universe,
        parser: &DeclarationParser,
        compounds: Vec<CompoundNode>,
        diagnostics: &mut Diagnostics,
    ) -> TypeGraph {
        let mut registry =
            TypeRegistry::new(universe, &self.config.registry).with_parser(parser.clone());
        for compound in &compounds {
            registry.get_or_create_compound(compound);
        }
        if registry.is_empty() {
            warn!("{} universe is empty", universe);
        }
        registry.resolve(diagnostics)
    }
}
