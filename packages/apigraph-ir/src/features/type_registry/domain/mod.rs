pub mod primitives;
pub(crate) mod slot;

pub use primitives::{is_primitive, PRIMITIVE_TYPES};
