// Unified Type Graph
//
// The externally consumed node model: CanonicalType with a closed
// TypeVariant union {Namespace, Class, Interface, Struct, Enum, Function,
// GenericParameter, Primitive, Facade}, and the immutable TypeGraph arena
// that owns one universe's nodes.

pub mod domain;
pub mod infrastructure;

pub use domain::{
    CanonicalType, CompositeType, EnumType, EnumValue, FunctionType, GenericParameterType, Member,
    Parameter, TypeId, TypeKind, TypeRef, TypeVariant, Universe,
};
pub use infrastructure::{GraphStats, TypeGraph};
