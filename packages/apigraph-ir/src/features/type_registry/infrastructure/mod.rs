pub mod registry;
pub mod resolver;

pub use registry::TypeRegistry;
