//! Rust type mapping.

use morphgen_codegen::{
    constrained::{
        ConstrainedArray, ConstrainedDictionary, ConstrainedEnum, ConstrainedId, ConstrainedKind,
        ConstrainedObject, ConstrainedReference, ConstrainedTuple, ConstrainedUnion,
    },
    language::{TypeContext, TypeMapping},
};
use morphgen_config::RustOptions;
use morphgen_core::upper_first;

/// Import registered by dictionary types.
pub const HASH_MAP_IMPORT: &str = "use std::collections::HashMap;";

/// Rust type mapping.
///
/// Named models (objects, enums, unions, tuples) are typed by their own
/// name; containers qualify referenced models with the configured module
/// path.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustTypeMapping;

impl RustTypeMapping {
    fn format<'a>(ctx: &'a TypeContext<'_, RustOptions>) -> Option<&'a str> {
        ctx.model().options.format.as_deref()
    }

    /// Module prefix for container children that point at another model.
    fn prefix(ctx: &TypeContext<'_, RustOptions>, child: ConstrainedId) -> String {
        if matches!(ctx.get(child).kind, ConstrainedKind::Reference(_)) {
            format!("{}::", ctx.options.module_path)
        } else {
            String::new()
        }
    }
}

impl TypeMapping<RustOptions> for RustTypeMapping {
    fn map_object(
        &self,
        ctx: &mut TypeContext<'_, RustOptions>,
        _: &ConstrainedObject,
    ) -> String {
        ctx.model().name.clone()
    }

    fn map_reference(
        &self,
        ctx: &mut TypeContext<'_, RustOptions>,
        reference: &ConstrainedReference,
    ) -> String {
        ctx.get(reference.ref_model).name.clone()
    }

    fn map_any(&self, ctx: &mut TypeContext<'_, RustOptions>) -> String {
        ctx.options.any_type.clone()
    }

    fn map_float(&self, ctx: &mut TypeContext<'_, RustOptions>) -> String {
        let ty = match Self::format(ctx) {
            Some("fp32" | "f32" | "float32") => "f32",
            _ => "f64",
        };
        ty.to_string()
    }

    fn map_integer(&self, ctx: &mut TypeContext<'_, RustOptions>) -> String {
        let ty = match Self::format(ctx) {
            Some("int8" | "i8") => "i8",
            Some("int16" | "i16") => "i16",
            Some("int64" | "long" | "i64") => "i64",
            Some("int128" | "i128") => "i128",
            Some("uint8" | "u8") => "u8",
            Some("uint16" | "u16") => "u16",
            Some("uint32" | "u32") => "u32",
            Some("uint64" | "u64") => "u64",
            Some("uint128" | "u128") => "u128",
            // int32, integer, i32 and no format at all
            _ => "i32",
        };
        ty.to_string()
    }

    fn map_string(&self, ctx: &mut TypeContext<'_, RustOptions>) -> String {
        let ty = match Self::format(ctx) {
            Some("bytes" | "bytes[]" | "binary") => "Vec<u8>",
            _ => "String",
        };
        ty.to_string()
    }

    fn map_boolean(&self, _: &mut TypeContext<'_, RustOptions>) -> String {
        "bool".to_string()
    }

    fn map_tuple(&self, ctx: &mut TypeContext<'_, RustOptions>, _: &ConstrainedTuple) -> String {
        ctx.model().name.clone()
    }

    fn map_array(
        &self,
        ctx: &mut TypeContext<'_, RustOptions>,
        array: &ConstrainedArray,
    ) -> String {
        let prefix = Self::prefix(ctx, array.value_model);
        format!("Vec<{}{}>", prefix, upper_first(ctx.ty_of(array.value_model)))
    }

    fn map_enum(&self, ctx: &mut TypeContext<'_, RustOptions>, _: &ConstrainedEnum) -> String {
        ctx.model().name.clone()
    }

    fn map_union(&self, ctx: &mut TypeContext<'_, RustOptions>, _: &ConstrainedUnion) -> String {
        ctx.model().name.clone()
    }

    fn map_dictionary(
        &self,
        ctx: &mut TypeContext<'_, RustOptions>,
        dictionary: &ConstrainedDictionary,
    ) -> String {
        ctx.dependencies.add_dependency(HASH_MAP_IMPORT);
        format!(
            "HashMap<{}{}, {}{}>",
            Self::prefix(ctx, dictionary.key),
            ctx.ty_of(dictionary.key),
            Self::prefix(ctx, dictionary.value),
            ctx.ty_of(dictionary.value),
        )
    }
}
