//! Rust constraint functions.

use morphgen_codegen::{
    constrained::ConstrainedKind,
    constraints::{ConstantContext, DefaultConstraints, EnumValueContext},
};
use morphgen_config::RustOptions;
use morphgen_core::json_value_to_string;
use serde_json::Value;

use crate::naming::{enum_key_pipeline, model_name_pipeline, property_key_pipeline};

/// Constraints used by [`RustLanguage`](crate::RustLanguage) unless replaced.
pub type RustConstraints = DefaultConstraints<RustOptions>;

/// The default Rust constraints.
pub fn rust_constraints() -> RustConstraints {
    DefaultConstraints::new()
        .with_model_name(model_name_pipeline())
        .with_property_key(property_key_pipeline())
        .with_enum_key(enum_key_pipeline())
        .with_enum_value(rust_enum_value)
        .with_constant(rust_constant)
}

/// Enum values become string literals, numbers and booleans stay bare.
/// Anything else is rendered as a JSON string literal.
fn rust_enum_value(ctx: &EnumValueContext<'_, RustOptions>) -> String {
    match ctx.enum_value {
        Value::String(s) => format!("{s:?}"),
        Value::Number(_) | Value::Bool(_) => json_value_to_string(ctx.enum_value),
        other => format!("{:?}", other.to_string()),
    }
}

fn rust_constant(ctx: &ConstantContext<'_, RustOptions>) -> Option<String> {
    let constant = ctx.constant()?;

    if let ConstrainedKind::Reference(reference) = &ctx.model().kind {
        let target = ctx.graph.get(reference.ref_model);
        if let ConstrainedKind::Enum(enumeration) = &target.kind {
            let entry = enumeration.value_for(constant)?;
            return Some(format!("{}::{}", target.name, entry.key));
        }
    }

    match constant {
        Value::String(s) => Some(format!("{s:?}")),
        Value::Number(_) | Value::Bool(_) => Some(json_value_to_string(constant)),
        _ => None,
    }
}
