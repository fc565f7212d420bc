pub mod canonical_type;
pub mod ids;
pub mod member;

pub use canonical_type::{
    CanonicalType, CompositeType, EnumType, FunctionType, GenericParameterType, TypeKind,
    TypeVariant,
};
pub use ids::{TypeId, Universe};
pub use member::{EnumValue, Member, Parameter, TypeRef};
