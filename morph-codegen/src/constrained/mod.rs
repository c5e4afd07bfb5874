//! The Constrained Meta-Model.
//!
//! Mirrors the Meta-Model variant for variant, adding a legal identifier
//! (`name`) and a resolved literal type (`ty`) to every node. A
//! [`ConstrainedGraph`] is built fresh for every (root, language) pair and
//! never aliases the Meta-Model it was built from.

mod dependencies;
mod display;
mod graph;

use indexmap::IndexMap;
use morphgen_ir::{ModelKind, SerializationType};
use serde_json::Value;

pub use display::GraphDisplay;
pub use graph::{ConstrainedGraph, ConstrainedId, Edge, GraphNote};

/// A Constrained Meta-Model node.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstrainedModel {
    /// Legal, constrained identifier.
    pub name: String,
    /// The input fragment the Meta-Model node was derived from.
    pub original_input: Value,
    /// Literal type in the target language, once resolved.
    pub ty: Option<String>,
    /// Options mirrored from the Meta-Model node.
    pub options: ConstrainedOptions,
    /// The variant payload.
    pub kind: ConstrainedKind,
}

impl ConstrainedModel {
    /// Create an untyped node.
    pub fn new(
        name: impl Into<String>,
        original_input: Value,
        options: ConstrainedOptions,
        kind: ConstrainedKind,
    ) -> Self {
        Self {
            name: name.into(),
            original_input,
            ty: None,
            options,
            kind,
        }
    }

    /// The variant tag of this node.
    pub fn kind(&self) -> ModelKind {
        self.kind.kind()
    }

    /// The resolved type, or an empty string if not resolved yet.
    pub fn ty(&self) -> &str {
        self.ty.as_deref().unwrap_or_default()
    }
}

/// The variant payload of a constrained node.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstrainedKind {
    Object(ConstrainedObject),
    Array(ConstrainedArray),
    Tuple(ConstrainedTuple),
    Dictionary(ConstrainedDictionary),
    Union(ConstrainedUnion),
    Enum(ConstrainedEnum),
    Reference(ConstrainedReference),
    String,
    Integer,
    Float,
    Boolean,
    Any,
}

impl ConstrainedKind {
    /// The variant tag.
    pub fn kind(&self) -> ModelKind {
        match self {
            ConstrainedKind::Object(_) => ModelKind::Object,
            ConstrainedKind::Array(_) => ModelKind::Array,
            ConstrainedKind::Tuple(_) => ModelKind::Tuple,
            ConstrainedKind::Dictionary(_) => ModelKind::Dictionary,
            ConstrainedKind::Union(_) => ModelKind::Union,
            ConstrainedKind::Enum(_) => ModelKind::Enum,
            ConstrainedKind::Reference(_) => ModelKind::Reference,
            ConstrainedKind::String => ModelKind::String,
            ConstrainedKind::Integer => ModelKind::Integer,
            ConstrainedKind::Float => ModelKind::Float,
            ConstrainedKind::Boolean => ModelKind::Boolean,
            ConstrainedKind::Any => ModelKind::Any,
        }
    }
}

/// A constrained object or union property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstrainedProperty {
    /// The raw name from the input.
    pub unconstrained_property_name: String,
    /// The constrained property key.
    pub property_name: String,
    /// Whether the property must be present.
    pub required: bool,
    /// The property's model.
    pub property: ConstrainedId,
}

/// Properties keyed by constrained property name, in declaration order.
pub type ConstrainedProperties = IndexMap<String, ConstrainedProperty>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstrainedObject {
    pub properties: ConstrainedProperties,
}

impl ConstrainedObject {
    /// Find a property by its raw input name.
    pub fn property_by_unconstrained_name(&self, name: &str) -> Option<&ConstrainedProperty> {
        self.properties
            .values()
            .find(|p| p.unconstrained_property_name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstrainedArray {
    pub value_model: ConstrainedId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstrainedTupleValue {
    pub index: usize,
    pub value: ConstrainedId,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstrainedTuple {
    pub tuple: Vec<ConstrainedTupleValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstrainedDictionary {
    pub key: ConstrainedId,
    pub value: ConstrainedId,
    pub serialization_type: SerializationType,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstrainedUnion {
    pub union: Vec<ConstrainedId>,
    pub properties: ConstrainedProperties,
}

/// A constrained enum entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstrainedEnumValue {
    /// Constrained key.
    pub key: String,
    /// Constrained literal.
    pub value: String,
    /// The raw value.
    pub original_input: Value,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstrainedEnum {
    pub values: Vec<ConstrainedEnumValue>,
}

impl ConstrainedEnum {
    /// Find the entry whose raw value equals `value`.
    pub fn value_for(&self, value: &Value) -> Option<&ConstrainedEnumValue> {
        self.values.iter().find(|v| &v.original_input == value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstrainedReference {
    pub ref_model: ConstrainedId,
}

/// A constant with its formatted literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstrainedConstant {
    pub original_input: Value,
    /// Literal in the target language, once the node type is known.
    pub value: Option<String>,
}

/// A discriminator with its common resolved type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstrainedDiscriminator {
    pub discriminator: String,
    /// Type shared by the discriminator property of every member, if they agree.
    pub ty: Option<String>,
}

/// Options mirrored from the Meta-Model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstrainedOptions {
    pub is_nullable: bool,
    pub constant: Option<ConstrainedConstant>,
    pub discriminator: Option<ConstrainedDiscriminator>,
    pub format: Option<String>,
    pub extend: Vec<ConstrainedId>,
}

impl ConstrainedOptions {
    /// Mirror Meta-Model options. Extended parents are filled in by the factory.
    pub fn from_meta(options: &morphgen_ir::MetaModelOptions) -> Self {
        Self {
            is_nullable: options.is_nullable,
            constant: options.constant.as_ref().map(|c| ConstrainedConstant {
                original_input: c.original_input.clone(),
                value: None,
            }),
            discriminator: options
                .discriminator
                .as_ref()
                .map(|d| ConstrainedDiscriminator {
                    discriminator: d.discriminator.clone(),
                    ty: None,
                }),
            format: options.format.clone(),
            extend: Vec::new(),
        }
    }
}
