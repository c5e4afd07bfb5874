//! Core type definitions.

use serde::{Deserialize, Serialize};

/// The closed set of model variants.
///
/// Shared by the Meta-Model and the Constrained Meta-Model so that
/// per-language tables (safe kinds, split options) can name a variant
/// without holding a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    Object,
    Array,
    Tuple,
    Dictionary,
    Union,
    Enum,
    Reference,
    String,
    Integer,
    Float,
    Boolean,
    Any,
}

impl ModelKind {
    /// Every variant, in declaration order.
    pub const ALL: [ModelKind; 12] = [
        ModelKind::Object,
        ModelKind::Array,
        ModelKind::Tuple,
        ModelKind::Dictionary,
        ModelKind::Union,
        ModelKind::Enum,
        ModelKind::Reference,
        ModelKind::String,
        ModelKind::Integer,
        ModelKind::Float,
        ModelKind::Boolean,
        ModelKind::Any,
    ];

    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Object => "object",
            ModelKind::Array => "array",
            ModelKind::Tuple => "tuple",
            ModelKind::Dictionary => "dictionary",
            ModelKind::Union => "union",
            ModelKind::Enum => "enum",
            ModelKind::Reference => "reference",
            ModelKind::String => "string",
            ModelKind::Integer => "integer",
            ModelKind::Float => "float",
            ModelKind::Boolean => "boolean",
            ModelKind::Any => "any",
        }
    }

    /// Returns true if nodes of this kind hold edges to other nodes.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            ModelKind::Object
                | ModelKind::Array
                | ModelKind::Tuple
                | ModelKind::Dictionary
                | ModelKind::Union
                | ModelKind::Reference
        )
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a dictionary is laid out when serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SerializationType {
    /// The dictionary is a regular nested field.
    #[default]
    Normal,
    /// The dictionary entries are flattened into the parent object.
    Unwrap,
}
