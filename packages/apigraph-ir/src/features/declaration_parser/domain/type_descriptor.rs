//! TypeDescriptor domain model

use serde::{Deserialize, Serialize};

/// Structured form of one declaration string.
///
/// Pure value: parsing the same text twice yields equal descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Input exactly as received
    pub raw_declaration: String,
    /// Last name segment (`UIElement`)
    pub type_name: String,
    /// Dotted scope (`Windows.UI.Xaml`), empty at top level
    pub namespace: String,
    /// Canonical registry key: namespace + type name, no decorations or
    /// generic arguments. Holds the cleaned text when the grammar failed.
    pub full_name: String,

    pub is_array: bool,
    /// 1 for `[]`, 2 for `[,]`
    pub array_rank: u8,
    pub is_pointer: bool,
    pub pointer_depth: u8,
    pub is_reference: bool,
    /// ABI `^` hat
    pub is_runtime_class_reference: bool,
    pub is_const: bool,
    pub is_read_only: bool,
    pub is_nullable: bool,

    pub is_generic: bool,
    pub generic_arguments: Vec<TypeDescriptor>,
    /// Set on descriptors parsed as a generic argument of another type
    pub is_generic_parameter: bool,

    pub is_in_param: bool,
    pub is_out_param: bool,
    pub is_optional: bool,
    pub is_event_args: bool,
    pub is_event_token: bool,
    pub is_com_ptr: bool,

    pub is_typename: bool,
    pub is_ref: bool,
    pub is_this: bool,

    /// The grammar did not match; `full_name` is the cleaned text
    pub is_ambiguous: bool,
}

impl TypeDescriptor {
    /// Descriptor for an already-canonical name (no decorations)
    pub fn named(full_name: &str) -> Self {
        let (namespace, type_name) = match full_name.rfind('.') {
            Some(idx) => (&full_name[..idx], &full_name[idx + 1..]),
            None => ("", full_name),
        };
        Self {
            raw_declaration: full_name.to_string(),
            type_name: type_name.to_string(),
            namespace: namespace.to_string(),
            full_name: full_name.to_string(),
            ..Default::default()
        }
    }

    /// Full name with generic arguments rendered: `IVector<Windows.UI.Xaml.UIElement>`
    pub fn display_name(&self) -> String {
        if !self.is_generic || self.generic_arguments.is_empty() {
            return self.full_name.clone();
        }
        let args: Vec<String> = self
            .generic_arguments
            .iter()
            .map(TypeDescriptor::display_name)
            .collect();
        format!("{}<{}>", self.full_name, args.join(", "))
    }

    pub fn is_void(&self) -> bool {
        self.full_name == "void" && self.pointer_depth == 0
    }

    pub fn is_empty(&self) -> bool {
        self.full_name.is_empty()
    }
}

impl std::fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_const {
            write!(f, "const ")?;
        }
        write!(f, "{}", self.display_name())?;
        if self.is_runtime_class_reference {
            write!(f, "^")?;
        }
        for _ in 0..self.pointer_depth {
            write!(f, "*")?;
        }
        if self.is_reference {
            write!(f, "&")?;
        }
        if self.is_nullable {
            write!(f, "?")?;
        }
        match self.array_rank {
            0 => {}
            2 => write!(f, "[,]")?,
            _ => write!(f, "[]")?,
        }
        Ok(())
    }
}
