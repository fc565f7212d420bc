// Compound Builders
//
// Per-source compound trees. Each source document becomes one or more
// CompoundNodes whose relationships (parent, children, bases, derived,
// member types) are raw names; nothing is resolved here.
//
// ## Architecture
// - Domain: input records, CompoundNode / MemberNode model, kind enums
// - Infrastructure: kind folding, native builder, managed builder, cache

pub mod domain;
pub mod infrastructure;

pub use domain::{
    CompoundKind, CompoundNode, EnumValueNode, EnumValueRecord, Language, ManagedMemberRecord,
    ManagedParamRecord, ManagedRecord, MemberFamily, MemberKind, MemberNode, NativeMemberRecord,
    NativeParamRecord, NativeRecord, ParameterNode, SourceKind, TypeTraits,
};
pub use infrastructure::{
    synthesize_namespaces, CompoundCache, ManagedCompoundBuilder, NativeCompoundBuilder,
};
