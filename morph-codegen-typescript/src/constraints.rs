//! TypeScript constraint functions.

use eyre::Result;
use morphgen_codegen::{
    constrained::ConstrainedKind,
    constraints::{
        ConstantContext, Constraints, DefaultConstraints, EnumKeyContext, EnumValueContext,
        ModelNameContext, PropertyKeyContext,
    },
};
use morphgen_config::{EnumType, TypeScriptOptions};
use morphgen_core::quote_literal;
use serde_json::Value;
use tracing::trace;

use crate::naming::{enum_key_pipeline, model_name_pipeline, property_key_pipeline};

/// Constraints used by [`TypeScriptLanguage`](crate::TypeScriptLanguage)
/// unless replaced.
///
/// Wraps [`DefaultConstraints`] and honors
/// [`TypeScriptOptions::raw_property_names`].
#[derive(Debug, Clone)]
pub struct TypeScriptConstraints {
    inner: DefaultConstraints<TypeScriptOptions>,
}

impl TypeScriptConstraints {
    /// Wrap custom pipelines.
    pub fn new(inner: DefaultConstraints<TypeScriptOptions>) -> Self {
        Self { inner }
    }

    /// The wrapped pipelines.
    pub fn inner(&self) -> &DefaultConstraints<TypeScriptOptions> {
        &self.inner
    }
}

impl Default for TypeScriptConstraints {
    fn default() -> Self {
        Self::new(
            DefaultConstraints::new()
                .with_model_name(model_name_pipeline())
                .with_property_key(property_key_pipeline())
                .with_enum_key(enum_key_pipeline())
                .with_enum_value(typescript_enum_value)
                .with_constant(typescript_constant),
        )
    }
}

impl Constraints<TypeScriptOptions> for TypeScriptConstraints {
    fn model_name(&self, ctx: &ModelNameContext<'_, TypeScriptOptions>) -> Result<String> {
        self.inner.model_name(ctx)
    }

    fn property_key(&self, ctx: &PropertyKeyContext<'_, TypeScriptOptions>) -> Result<String> {
        if ctx.options.raw_property_names {
            trace!(property = ctx.property_name, "keeping raw property name");
            return Ok(ctx.property_name.to_string());
        }
        self.inner.property_key(ctx)
    }

    fn enum_key(&self, ctx: &EnumKeyContext<'_, TypeScriptOptions>) -> Result<String> {
        self.inner.enum_key(ctx)
    }

    fn enum_value(&self, ctx: &EnumValueContext<'_, TypeScriptOptions>) -> Result<String> {
        self.inner.enum_value(ctx)
    }

    fn constant(&self, ctx: &ConstantContext<'_, TypeScriptOptions>) -> Result<Option<String>> {
        self.inner.constant(ctx)
    }
}

/// Strings and booleans are double quoted, objects become a single quoted
/// JSON string.
fn typescript_enum_value(ctx: &EnumValueContext<'_, TypeScriptOptions>) -> String {
    match ctx.enum_value {
        Value::String(s) => quote_literal(s, '"'),
        Value::Bool(b) => format!("\"{b}\""),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        other @ (Value::Array(_) | Value::Object(_)) => quote_literal(&other.to_string(), '\''),
    }
}

fn typescript_constant(ctx: &ConstantContext<'_, TypeScriptOptions>) -> Option<String> {
    let constant = ctx.constant()?;

    if let ConstrainedKind::Reference(reference) = &ctx.model().kind {
        let target = ctx.graph.get(reference.ref_model);
        if let ConstrainedKind::Enum(enumeration) = &target.kind {
            let entry = enumeration.value_for(constant)?;
            return Some(match ctx.options.enum_type {
                EnumType::Enum => format!("{}.{}", target.name, entry.key),
                EnumType::Union => entry.value.clone(),
            });
        }
    }

    match constant {
        Value::String(s) => Some(quote_literal(s, '\'')),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use morphgen_codegen::constrained::{
        ConstrainedConstant, ConstrainedEnum, ConstrainedEnumValue, ConstrainedGraph,
        ConstrainedId, ConstrainedModel, ConstrainedOptions, ConstrainedReference,
    };
    use serde_json::json;

    use super::*;

    fn value(raw: Value) -> String {
        TypeScriptConstraints::default()
            .enum_value(&EnumValueContext {
                enum_key: "KEY",
                enum_value: &raw,
                raw_keys: &[],
                options: &TypeScriptOptions::default(),
            })
            .unwrap()
    }

    fn property_key(name: &str, options: &TypeScriptOptions) -> String {
        let raw = vec![name.to_string()];
        TypeScriptConstraints::default()
            .property_key(&PropertyKeyContext {
                property_name: name,
                raw_names: &raw,
                assigned: &[],
                options,
            })
            .unwrap()
    }

    fn with_constant(constant: Value) -> ConstrainedOptions {
        ConstrainedOptions {
            constant: Some(ConstrainedConstant {
                original_input: constant,
                value: None,
            }),
            ..Default::default()
        }
    }

    /// An enum `Color` and a reference to it carrying `constant`.
    fn enum_reference(constant: Value) -> (ConstrainedGraph, ConstrainedId) {
        let mut graph = ConstrainedGraph::new();
        let color = graph.alloc(ConstrainedModel::new(
            "Color",
            Value::Null,
            ConstrainedOptions::default(),
            ConstrainedKind::Enum(ConstrainedEnum {
                values: vec![ConstrainedEnumValue {
                    key: "RED".into(),
                    value: "\"red\"".into(),
                    original_input: json!("red"),
                }],
            }),
        ));
        let reference = graph.alloc(ConstrainedModel::new(
            "color",
            Value::Null,
            with_constant(constant),
            ConstrainedKind::Reference(ConstrainedReference { ref_model: color }),
        ));
        (graph, reference)
    }

    fn constant(
        graph: &ConstrainedGraph,
        id: ConstrainedId,
        options: &TypeScriptOptions,
    ) -> Option<String> {
        TypeScriptConstraints::default()
            .constant(&ConstantContext { graph, id, options })
            .unwrap()
    }

    #[test]
    fn test_ts_enum_values() {
        assert_eq!(value(json!("cat")), "\"cat\"");
        assert_eq!(value(json!(true)), "\"true\"");
        assert_eq!(value(json!(2.5)), "2.5");
        assert_eq!(value(json!({"a": 1})), r#"'{"a":1}'"#);
    }

    #[test]
    fn test_ts_enum_values_are_escaped() {
        assert_eq!(value(json!(r#"say "hi""#)), r#""say \"hi\"""#);
        assert_eq!(value(json!(r"a\b")), r#""a\\b""#);
        assert_eq!(value(json!({"k": "it's"})), r#"'{"k":"it\'s"}'"#);
    }

    #[test]
    fn test_ts_raw_property_names() {
        let raw = TypeScriptOptions {
            raw_property_names: true,
            ..Default::default()
        };
        assert_eq!(property_key("user-name", &TypeScriptOptions::default()), "username");
        assert_eq!(property_key("user_name", &TypeScriptOptions::default()), "userName");
        assert_eq!(property_key("user-name", &raw), "user-name");
    }

    #[test]
    fn test_ts_enum_constant_by_enum_type() {
        let (graph, reference) = enum_reference(json!("red"));

        let options = TypeScriptOptions::default();
        assert_eq!(constant(&graph, reference, &options).as_deref(), Some("Color.RED"));

        let options = TypeScriptOptions {
            enum_type: EnumType::Union,
            ..Default::default()
        };
        assert_eq!(constant(&graph, reference, &options).as_deref(), Some("\"red\""));
    }

    #[test]
    fn test_ts_enum_constant_without_entry() {
        let (graph, reference) = enum_reference(json!("blue"));
        assert_eq!(constant(&graph, reference, &TypeScriptOptions::default()), None);
    }

    #[test]
    fn test_ts_plain_constants() {
        let mut graph = ConstrainedGraph::new();
        let kind = graph.alloc(ConstrainedModel::new(
            "kind",
            Value::Null,
            with_constant(json!("cat")),
            ConstrainedKind::String,
        ));
        let version = graph.alloc(ConstrainedModel::new(
            "version",
            Value::Null,
            with_constant(json!(3)),
            ConstrainedKind::Integer,
        ));
        let quoted = graph.alloc(ConstrainedModel::new(
            "note",
            Value::Null,
            with_constant(json!("it's")),
            ConstrainedKind::String,
        ));
        let options = TypeScriptOptions::default();

        assert_eq!(constant(&graph, kind, &options).as_deref(), Some("'cat'"));
        assert_eq!(constant(&graph, version, &options).as_deref(), Some("3"));
        assert_eq!(constant(&graph, quoted, &options).as_deref(), Some(r"'it\'s'"));
    }
}
