//! Compound builder infrastructure

pub mod cache;
pub mod kind_folding;
pub mod managed_builder;
pub mod native_builder;

pub use cache::CompoundCache;
pub use kind_folding::{bare_name, fold_managed_kind, fold_member_kind, fold_native_kind, FoldedKind};
pub use managed_builder::{synthesize_namespaces, ManagedCompoundBuilder};
pub use native_builder::NativeCompoundBuilder;
