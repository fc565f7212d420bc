pub mod projected;

pub use projected::{ProjectedId, ProjectedMember, ProjectedType};
