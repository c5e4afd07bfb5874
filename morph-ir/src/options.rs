//! Options shared by every Meta-Model node.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::MetaModelId;

/// A fixed value the model is constrained to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaModelConstant {
    /// The raw value as it appeared in the input.
    pub original_input: Value,
}

/// Discriminator settings for a union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discriminator {
    /// Name of the property that distinguishes union members.
    pub discriminator: String,
}

/// Options carried by every Meta-Model node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaModelOptions {
    /// Whether `null` is an accepted value.
    #[serde(default)]
    pub is_nullable: bool,
    /// Fixed value, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constant: Option<MetaModelConstant>,
    /// Discriminator for unions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<Discriminator>,
    /// Free-form format hint (e.g., "int64", "binary").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Parent models this model extends.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extend: Vec<MetaModelId>,
}

impl MetaModelOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the model as nullable.
    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    /// Constrain the model to a fixed value.
    pub fn with_constant(mut self, value: Value) -> Self {
        self.constant = Some(MetaModelConstant {
            original_input: value,
        });
        self
    }

    /// Set the discriminator property name.
    pub fn with_discriminator(mut self, property: impl Into<String>) -> Self {
        self.discriminator = Some(Discriminator {
            discriminator: property.into(),
        });
        self
    }

    /// Set the format hint.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Add an extended parent model.
    pub fn with_extend(mut self, parent: MetaModelId) -> Self {
        self.extend.push(parent);
        self
    }
}
