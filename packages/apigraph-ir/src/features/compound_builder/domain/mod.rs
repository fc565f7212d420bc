pub mod compound;
pub mod records;

pub use compound::{
    CompoundKind, CompoundNode, EnumValueNode, Language, MemberFamily, MemberKind, MemberNode,
    ParameterNode, SourceKind, TypeTraits,
};
pub use records::{
    EnumValueRecord, ManagedMemberRecord, ManagedParamRecord, ManagedRecord, NativeMemberRecord,
    NativeParamRecord, NativeRecord,
};
