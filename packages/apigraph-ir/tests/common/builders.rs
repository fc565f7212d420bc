//! Test data builders
//!
//! Fluent builders for the raw records the extractors hand over.

use apigraph_ir::features::compound_builder::{
    EnumValueRecord, ManagedMemberRecord, ManagedParamRecord, ManagedRecord, NativeMemberRecord,
    NativeParamRecord, NativeRecord,
};
use apigraph_ir::shared::models::DocText;

/// Builder for NativeRecord
#[derive(Debug)]
pub struct NativeRecordBuilder {
    record: NativeRecord,
}

impl NativeRecordBuilder {
    /// `kind` is the raw extractor tag, `name` the `::`-qualified name
    pub fn new(kind: &str, name: &str) -> Self {
        Self {
            record: NativeRecord {
                id: format!("{}_{}", kind, name.to_lowercase().replace("::", "_1_1")),
                kind: kind.into(),
                name: Some(name.into()),
                ..Default::default()
            },
        }
    }

    pub fn namespace(name: &str) -> Self {
        Self::new("namespace", name)
    }

    pub fn class(name: &str) -> Self {
        Self::new("class", name)
    }

    pub fn interface(name: &str) -> Self {
        Self::new("interface", name)
    }

    pub fn id(mut self, id: &str) -> Self {
        self.record.id = id.into();
        self
    }

    pub fn language(mut self, language: &str) -> Self {
        self.record.language = Some(language.into());
        self
    }

    pub fn brief(mut self, text: &str) -> Self {
        self.record.brief = DocText::plain(text);
        self
    }

    pub fn base(mut self, name: &str) -> Self {
        self.record.base_names.push(name.into());
        self
    }

    pub fn inner_class(mut self, name: &str) -> Self {
        self.record.inner_classes.push(name.into());
        self
    }

    pub fn inner_namespace(mut self, name: &str) -> Self {
        self.record.inner_namespaces.push(name.into());
        self
    }

    pub fn template_param(mut self, param: &str) -> Self {
        self.record.template_params.push(param.into());
        self
    }

    pub fn member(mut self, member: NativeMemberRecord) -> Self {
        self.record.members.push(member);
        self
    }

    pub fn enum_value(mut self, name: &str, brief: &str) -> Self {
        self.record.members.push(NativeMemberRecord {
            kind: "enumvalue".into(),
            name: name.into(),
            brief: DocText::plain(brief),
            ..Default::default()
        });
        self
    }

    pub fn build(self) -> NativeRecord {
        self.record
    }
}

/// Builder for NativeMemberRecord
#[derive(Debug)]
pub struct NativeMemberBuilder {
    member: NativeMemberRecord,
}

impl NativeMemberBuilder {
    pub fn new(kind: &str, name: &str, raw_type: &str) -> Self {
        Self {
            member: NativeMemberRecord {
                kind: kind.into(),
                name: name.into(),
                raw_type: raw_type.into(),
                ..Default::default()
            },
        }
    }

    pub fn function(name: &str, raw_type: &str) -> Self {
        Self::new("function", name, raw_type)
    }

    pub fn variable(name: &str, raw_type: &str) -> Self {
        Self::new("variable", name, raw_type)
    }

    pub fn property(name: &str, raw_type: &str) -> Self {
        Self::new("property", name, raw_type)
    }

    pub fn param(mut self, name: &str, raw_type: &str, description: &str) -> Self {
        self.member.params.push(NativeParamRecord {
            name: name.into(),
            raw_type: raw_type.into(),
            description: DocText::plain(description),
            ..Default::default()
        });
        self
    }

    pub fn attributed_param(mut self, attributes: &str, name: &str, raw_type: &str) -> Self {
        self.member.params.push(NativeParamRecord {
            name: name.into(),
            raw_type: raw_type.into(),
            attributes: attributes.into(),
            ..Default::default()
        });
        self
    }

    pub fn enum_value(mut self, name: &str, initializer: &str) -> Self {
        self.member.enum_values.push(EnumValueRecord {
            name: name.into(),
            initializer: Some(initializer.into()),
            ..Default::default()
        });
        self
    }

    pub fn brief(mut self, text: &str) -> Self {
        self.member.brief = DocText::plain(text);
        self
    }

    pub fn build(self) -> NativeMemberRecord {
        self.member
    }
}

/// Builder for ManagedRecord
#[derive(Debug)]
pub struct ManagedRecordBuilder {
    record: ManagedRecord,
}

impl ManagedRecordBuilder {
    pub fn new(kind: &str, namespace: &str, name: &str) -> Self {
        Self {
            record: ManagedRecord {
                name: Some(name.into()),
                namespace: namespace.into(),
                kind: kind.into(),
                ..Default::default()
            },
        }
    }

    pub fn class(namespace: &str, name: &str) -> Self {
        Self::new("class", namespace, name)
    }

    pub fn interface(namespace: &str, name: &str) -> Self {
        Self::new("interface", namespace, name)
    }

    pub fn enumeration(namespace: &str, name: &str) -> Self {
        Self::new("enum", namespace, name)
    }

    pub fn base(mut self, name: &str) -> Self {
        self.record.base_type = Some(name.into());
        self
    }

    pub fn implements(mut self, name: &str) -> Self {
        self.record.interfaces.push(name.into());
        self
    }

    pub fn generic_param(mut self, name: &str) -> Self {
        self.record.generic_params.push(name.into());
        self
    }

    pub fn summary(mut self, text: &str) -> Self {
        self.record.summary = DocText::plain(text);
        self
    }

    pub fn member(mut self, member: ManagedMemberRecord) -> Self {
        self.record.members.push(member);
        self
    }

    pub fn field(mut self, name: &str, value: &str) -> Self {
        self.record.members.push(ManagedMemberRecord {
            kind: "field".into(),
            name: name.into(),
            type_name: "System.Int32".into(),
            value: Some(value.into()),
            ..Default::default()
        });
        self
    }

    pub fn build(self) -> ManagedRecord {
        self.record
    }
}

/// Builder for ManagedMemberRecord
#[derive(Debug)]
pub struct ManagedMemberBuilder {
    member: ManagedMemberRecord,
}

impl ManagedMemberBuilder {
    pub fn new(kind: &str, name: &str, type_name: &str) -> Self {
        Self {
            member: ManagedMemberRecord {
                kind: kind.into(),
                name: name.into(),
                type_name: type_name.into(),
                ..Default::default()
            },
        }
    }

    pub fn method(name: &str, type_name: &str) -> Self {
        Self::new("method", name, type_name)
    }

    pub fn property(name: &str, type_name: &str) -> Self {
        Self::new("property", name, type_name)
    }

    pub fn constructor() -> Self {
        Self::new("method", ".ctor", "System.Void")
    }

    pub fn param(mut self, name: &str, type_name: &str) -> Self {
        self.member.params.push(ManagedParamRecord {
            name: name.into(),
            type_name: type_name.into(),
            ..Default::default()
        });
        self
    }

    pub fn summary(mut self, text: &str) -> Self {
        self.member.summary = DocText::plain(text);
        self
    }

    pub fn build(self) -> ManagedMemberRecord {
        self.member
    }
}
