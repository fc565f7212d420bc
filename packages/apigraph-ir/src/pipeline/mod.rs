//! Pipeline orchestration
//!
//! records → compounds → registries (intern, resolve) → projection → ApiGraph

pub mod graph_pipeline;
pub mod result;

pub use graph_pipeline::GraphPipeline;
pub use result::{ApiGraph, GraphSummary};
