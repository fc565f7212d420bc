/*
 * Apigraph IR - API Type Topology and Resolution Engine
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Diagnostics channel, documentation content, name helpers
 * - features/    : Vertical slices (declaration parsing → compounds → registry → graph → projection)
 * - pipeline/    : Orchestration (records → ApiGraph)
 * - config/      : Presets, overrides, versioned config files
 *
 * Build model:
 * - Phase 1 interns every compound into a per-universe arena, edges kept as raw names
 * - Phase 2 resolves every edge once; the resulting TypeGraph is immutable
 */

// Crate-level lint configuration
#![allow(clippy::should_implement_trait)] // from_str naming intentional
#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::upper_case_acronyms)] // IDL, SAL naming
#![allow(clippy::too_many_arguments)]

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules (parser → builders → registry → graph → projection)
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{GraphConfig, Preset};
pub use errors::{ApiGraphError, Result};
pub use features::compound_builder::{
    CompoundCache, CompoundKind, CompoundNode, ManagedCompoundBuilder, ManagedRecord,
    MemberKind, MemberNode, NativeCompoundBuilder, NativeRecord,
};
pub use features::declaration_parser::{parse, DeclarationParser, TypeDescriptor};
pub use features::projection::{ProjectedId, ProjectedType, ProjectionGraph, ProjectionMerger};
pub use features::type_graph::{CanonicalType, TypeGraph, TypeId, TypeKind, TypeVariant, Universe};
pub use features::type_registry::TypeRegistry;
pub use pipeline::{ApiGraph, GraphPipeline, GraphSummary};
pub use shared::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
