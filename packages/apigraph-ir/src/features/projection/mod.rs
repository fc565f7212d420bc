// Projection Merger
//
// Builds the projected universe: one node per native/managed pair that
// denotes the same API, with documentation resolved by precedence. Reads
// the two resolved TypeGraphs and never mutates them.

pub mod domain;
pub mod infrastructure;

pub use domain::{ProjectedId, ProjectedMember, ProjectedType};
pub use infrastructure::{ProjectionGraph, ProjectionMerger};
