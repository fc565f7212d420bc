//! Raw input records
//!
//! Already-deserialized documents handed over by the loaders. Field names
//! follow the loaders' JSON output, every field is optional on the wire.

use serde::{Deserialize, Serialize};

use crate::shared::models::DocText;

/// One native documentation compound (class, namespace, protocol, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeRecord {
    /// Unique id inside the documentation set (`class_foo_1_1_bar`)
    pub id: String,
    /// Raw kind tag as emitted by the extractor (`class`, `protocol`, `file`, ...)
    pub kind: String,
    /// Raw qualified name (`Foo::Bar`); required
    pub name: Option<String>,
    /// Source language tag (`C++`, `Objective-C`, `C++/CX`, `IDL`)
    pub language: Option<String>,
    pub members: Vec<NativeMemberRecord>,
    pub base_names: Vec<String>,
    pub derived_names: Vec<String>,
    pub inner_classes: Vec<String>,
    pub inner_namespaces: Vec<String>,
    pub template_params: Vec<String>,
    pub brief: DocText,
    pub detailed: DocText,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeMemberRecord {
    pub kind: String,
    pub name: String,
    /// Declared type as free text (`const Foo::Bar*`)
    pub raw_type: String,
    /// Argument string as written (`(int a, int b) const`)
    pub raw_args: String,
    pub params: Vec<NativeParamRecord>,
    pub enum_values: Vec<EnumValueRecord>,
    pub is_static: bool,
    pub brief: DocText,
    pub detailed: DocText,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NativeParamRecord {
    pub name: String,
    pub raw_type: String,
    /// IDL direction attribute (`[in]`, `[out, retval]`)
    pub attributes: String,
    pub description: DocText,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumValueRecord {
    pub name: String,
    pub initializer: Option<String>,
    pub brief: DocText,
    pub detailed: DocText,
}

/// One reflected managed type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagedRecord {
    /// Type name inside its namespace; nested types use `Outer+Inner`,
    /// generic types keep their arity suffix (``List`1``)
    pub name: Option<String>,
    pub namespace: String,
    /// `class`, `interface`, `struct`, `enum`, `delegate`, `attribute`
    pub kind: String,
    pub base_type: Option<String>,
    pub interfaces: Vec<String>,
    pub generic_params: Vec<String>,
    pub is_sealed: bool,
    pub is_static: bool,
    pub members: Vec<ManagedMemberRecord>,
    pub summary: DocText,
    pub remarks: DocText,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagedMemberRecord {
    /// `field`, `property`, `method`, `constructor`, `event`
    pub kind: String,
    pub name: String,
    pub type_name: String,
    pub params: Vec<ManagedParamRecord>,
    pub is_static: bool,
    /// Constant value of an enum field
    pub value: Option<String>,
    pub summary: DocText,
    pub remarks: DocText,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagedParamRecord {
    pub name: String,
    pub type_name: String,
    pub is_out: bool,
    pub is_optional: bool,
    pub description: DocText,
}
