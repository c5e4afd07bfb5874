//! Constraint functions.
//!
//! A target language turns raw names and values into legal, unique
//! identifiers and literals through the [`Constraints`] trait. The stock
//! implementation, [`DefaultConstraints`], runs every name through a
//! [`NamePipeline`] of independently replaceable stages.

mod default;
mod pipeline;
pub mod stages;

use eyre::Result;
use serde_json::Value;

use crate::constrained::{ConstrainedGraph, ConstrainedId, ConstrainedModel};

pub use default::{ConstantFn, DefaultConstraints, EnumValueFn};
pub use pipeline::{DuplicateCheck, NamePipeline, NamePipelineBuilder};

/// Input to [`Constraints::model_name`].
#[derive(Debug)]
pub struct ModelNameContext<'a, O> {
    /// The raw model name.
    pub model_name: &'a str,
    pub options: &'a O,
}

/// Input to [`Constraints::property_key`].
#[derive(Debug)]
pub struct PropertyKeyContext<'a, O> {
    /// The raw property name.
    pub property_name: &'a str,
    /// Every raw property name of the owning object, in declaration order.
    pub raw_names: &'a [String],
    /// Constrained keys assigned to earlier siblings.
    pub assigned: &'a [String],
    pub options: &'a O,
}

/// Input to [`Constraints::enum_key`].
#[derive(Debug)]
pub struct EnumKeyContext<'a, O> {
    /// The raw enum key.
    pub enum_key: &'a str,
    /// Every raw key of the owning enum, in declaration order.
    pub raw_keys: &'a [String],
    /// Constrained keys assigned to earlier entries.
    pub assigned: &'a [String],
    pub options: &'a O,
}

/// Input to [`Constraints::enum_value`].
#[derive(Debug)]
pub struct EnumValueContext<'a, O> {
    /// The already constrained key of this entry.
    pub enum_key: &'a str,
    /// The raw value.
    pub enum_value: &'a Value,
    /// Every raw key of the owning enum, in declaration order.
    pub raw_keys: &'a [String],
    pub options: &'a O,
}

/// Input to [`Constraints::constant`].
///
/// Only handed out once the node's type has been assigned.
#[derive(Debug)]
pub struct ConstantContext<'a, O> {
    pub graph: &'a ConstrainedGraph,
    /// The node owning the constant.
    pub id: ConstrainedId,
    pub options: &'a O,
}

impl<O> ConstantContext<'_, O> {
    /// The node owning the constant.
    pub fn model(&self) -> &ConstrainedModel {
        self.graph.get(self.id)
    }

    /// The raw constant value, if the node has one.
    pub fn constant(&self) -> Option<&Value> {
        self.model()
            .options
            .constant
            .as_ref()
            .map(|c| &c.original_input)
    }
}

/// The five constraint functions of a target language.
///
/// Every function may fail; errors are propagated to the caller of the
/// factory unchanged and abort the build of the current root.
pub trait Constraints<O> {
    /// Constrain a model name.
    fn model_name(&self, ctx: &ModelNameContext<'_, O>) -> Result<String>;

    /// Constrain an object or union property key.
    fn property_key(&self, ctx: &PropertyKeyContext<'_, O>) -> Result<String>;

    /// Constrain an enum key.
    fn enum_key(&self, ctx: &EnumKeyContext<'_, O>) -> Result<String>;

    /// Constrain an enum value into a literal.
    fn enum_value(&self, ctx: &EnumValueContext<'_, O>) -> Result<String>;

    /// Format a constant value for a typed node.
    fn constant(&self, ctx: &ConstantContext<'_, O>) -> Result<Option<String>>;
}
