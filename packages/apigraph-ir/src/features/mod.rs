//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/         - Pure data (no algorithms beyond small helpers)
//! - infrastructure/ - Parsing, building, interning and merging logic

pub mod declaration_parser;

// Per-source compound trees with raw-name edges
pub mod compound_builder;

// Immutable resolved graph: CanonicalType + TypeVariant tagged union
pub mod type_graph;

// Arena + name interning, phase-2 resolution
pub mod type_registry;

// Native/managed pairing into the projected universe
pub mod projection;
