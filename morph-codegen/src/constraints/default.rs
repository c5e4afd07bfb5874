//! Pipeline-backed constraint functions.

use eyre::Result;
use morphgen_core::{json_value_to_string, quote_literal};
use serde_json::Value;

use super::{
    ConstantContext, Constraints, EnumKeyContext, EnumValueContext, ModelNameContext, NamePipeline,
    PropertyKeyContext, stages,
};

/// Formats an enum value.
pub type EnumValueFn<O> = fn(&EnumValueContext<'_, O>) -> String;
/// Formats a constant.
pub type ConstantFn<O> = fn(&ConstantContext<'_, O>) -> Option<String>;

/// [`Constraints`] built from one [`NamePipeline`] per name role.
///
/// Every transform is infallible, so the trait methods never return an
/// error.
pub struct DefaultConstraints<O> {
    model_name: NamePipeline,
    property_key: NamePipeline,
    enum_key: NamePipeline,
    enum_value: EnumValueFn<O>,
    constant: ConstantFn<O>,
}

impl<O> Clone for DefaultConstraints<O> {
    fn clone(&self) -> Self {
        Self {
            model_name: self.model_name,
            property_key: self.property_key,
            enum_key: self.enum_key,
            enum_value: self.enum_value,
            constant: self.constant,
        }
    }
}

impl<O> std::fmt::Debug for DefaultConstraints<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultConstraints")
            .field("model_name", &self.model_name)
            .field("property_key", &self.property_key)
            .field("enum_key", &self.enum_key)
            .finish_non_exhaustive()
    }
}

impl<O> Default for DefaultConstraints<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> DefaultConstraints<O> {
    /// Default stages for every role.
    pub fn new() -> Self {
        Self {
            model_name: NamePipeline::default(),
            property_key: NamePipeline::default(),
            enum_key: NamePipeline::default(),
            enum_value: default_enum_value,
            constant: default_constant,
        }
    }

    pub fn with_model_name(mut self, pipeline: NamePipeline) -> Self {
        self.model_name = pipeline;
        self
    }

    pub fn with_property_key(mut self, pipeline: NamePipeline) -> Self {
        self.property_key = pipeline;
        self
    }

    pub fn with_enum_key(mut self, pipeline: NamePipeline) -> Self {
        self.enum_key = pipeline;
        self
    }

    pub fn with_enum_value(mut self, format: EnumValueFn<O>) -> Self {
        self.enum_value = format;
        self
    }

    pub fn with_constant(mut self, format: ConstantFn<O>) -> Self {
        self.constant = format;
        self
    }

    /// The model name pipeline.
    pub fn model_name_pipeline(&self) -> &NamePipeline {
        &self.model_name
    }

    /// The property key pipeline.
    pub fn property_key_pipeline(&self) -> &NamePipeline {
        &self.property_key
    }

    /// The enum key pipeline.
    pub fn enum_key_pipeline(&self) -> &NamePipeline {
        &self.enum_key
    }
}

impl<O> Constraints<O> for DefaultConstraints<O> {
    fn model_name(&self, ctx: &ModelNameContext<'_, O>) -> Result<String> {
        Ok(self.model_name.apply(ctx.model_name))
    }

    fn property_key(&self, ctx: &PropertyKeyContext<'_, O>) -> Result<String> {
        Ok(self
            .property_key
            .apply_with_siblings(ctx.property_name, ctx.raw_names, ctx.assigned))
    }

    fn enum_key(&self, ctx: &EnumKeyContext<'_, O>) -> Result<String> {
        Ok(self
            .enum_key
            .apply_with_siblings(ctx.enum_key, ctx.raw_keys, ctx.assigned))
    }

    fn enum_value(&self, ctx: &EnumValueContext<'_, O>) -> Result<String> {
        Ok((self.enum_value)(ctx))
    }

    fn constant(&self, ctx: &ConstantContext<'_, O>) -> Result<Option<String>> {
        Ok((self.constant)(ctx))
    }
}

fn default_enum_value<O>(ctx: &EnumValueContext<'_, O>) -> String {
    stages::quote_enum_value(ctx.enum_value)
}

fn default_constant<O>(ctx: &ConstantContext<'_, O>) -> Option<String> {
    match ctx.constant()? {
        Value::String(s) => Some(quote_literal(s, '"')),
        Value::Array(_) | Value::Object(_) => None,
        other => Some(json_value_to_string(other)),
    }
}
