//! TypeScript type mapping.

use morphgen_codegen::{
    constrained::{
        ConstrainedArray, ConstrainedDictionary, ConstrainedEnum, ConstrainedObject,
        ConstrainedReference, ConstrainedTuple, ConstrainedUnion,
    },
    language::{TypeContext, TypeMapping},
};
use morphgen_config::{MapType, TypeScriptOptions};

/// TypeScript type mapping.
///
/// Objects and enums are typed by name, unions and tuples inline.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptTypeMapping;

impl TypeMapping<TypeScriptOptions> for TypeScriptTypeMapping {
    fn map_object(
        &self,
        ctx: &mut TypeContext<'_, TypeScriptOptions>,
        _: &ConstrainedObject,
    ) -> String {
        ctx.model().name.clone()
    }

    fn map_reference(
        &self,
        ctx: &mut TypeContext<'_, TypeScriptOptions>,
        reference: &ConstrainedReference,
    ) -> String {
        ctx.get(reference.ref_model).name.clone()
    }

    fn map_any(&self, _: &mut TypeContext<'_, TypeScriptOptions>) -> String {
        "any".to_string()
    }

    fn map_float(&self, _: &mut TypeContext<'_, TypeScriptOptions>) -> String {
        "number".to_string()
    }

    fn map_integer(&self, _: &mut TypeContext<'_, TypeScriptOptions>) -> String {
        "number".to_string()
    }

    fn map_string(&self, _: &mut TypeContext<'_, TypeScriptOptions>) -> String {
        "string".to_string()
    }

    fn map_boolean(&self, _: &mut TypeContext<'_, TypeScriptOptions>) -> String {
        "boolean".to_string()
    }

    fn map_tuple(
        &self,
        ctx: &mut TypeContext<'_, TypeScriptOptions>,
        tuple: &ConstrainedTuple,
    ) -> String {
        let types: Vec<&str> = tuple.tuple.iter().map(|slot| ctx.ty_of(slot.value)).collect();
        format!("[{}]", types.join(", "))
    }

    fn map_array(
        &self,
        ctx: &mut TypeContext<'_, TypeScriptOptions>,
        array: &ConstrainedArray,
    ) -> String {
        let ty = ctx.ty_of(array.value_model);
        if ty.contains(" | ") {
            format!("({ty})[]")
        } else {
            format!("{ty}[]")
        }
    }

    fn map_enum(
        &self,
        ctx: &mut TypeContext<'_, TypeScriptOptions>,
        _: &ConstrainedEnum,
    ) -> String {
        ctx.model().name.clone()
    }

    fn map_union(
        &self,
        ctx: &mut TypeContext<'_, TypeScriptOptions>,
        union: &ConstrainedUnion,
    ) -> String {
        let types: Vec<&str> = union.union.iter().map(|member| ctx.ty_of(*member)).collect();
        types.join(" | ")
    }

    fn map_dictionary(
        &self,
        ctx: &mut TypeContext<'_, TypeScriptOptions>,
        dictionary: &ConstrainedDictionary,
    ) -> String {
        let key = ctx.ty_of(dictionary.key);
        let value = ctx.ty_of(dictionary.value);
        match ctx.options.map_type {
            MapType::Map => format!("Map<{key}, {value}>"),
            MapType::Record => format!("Record<{key}, {value}>"),
            MapType::IndexedObject => format!("{{ [name: {key}]: {value} }}"),
        }
    }
}
