pub mod merger;
pub mod projection_graph;

pub use merger::ProjectionMerger;
pub use projection_graph::ProjectionGraph;
