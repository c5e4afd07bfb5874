//! The type-mapping table.

use crate::{
    constrained::{
        ConstrainedArray, ConstrainedDictionary, ConstrainedEnum, ConstrainedGraph, ConstrainedId,
        ConstrainedKind, ConstrainedModel, ConstrainedObject, ConstrainedReference,
        ConstrainedTuple, ConstrainedUnion,
    },
    generation::DependencyManager,
};

/// Everything a type-mapping function may look at.
pub struct TypeContext<'a, O> {
    pub graph: &'a ConstrainedGraph,
    /// The node being typed.
    pub id: ConstrainedId,
    pub options: &'a O,
    /// Receives the imports the produced type needs.
    pub dependencies: &'a mut DependencyManager,
}

impl<'a, O> TypeContext<'a, O> {
    /// The node being typed.
    pub fn model(&self) -> &'a ConstrainedModel {
        self.graph.get(self.id)
    }

    /// Another node of the same graph.
    pub fn get(&self, id: ConstrainedId) -> &'a ConstrainedModel {
        self.graph.get(id)
    }

    /// The resolved type of another node, or an empty string.
    pub fn ty_of(&self, id: ConstrainedId) -> &'a str {
        self.graph.get(id).ty()
    }
}

/// Twelve functions, one per variant, turning a constrained node into a
/// literal type of the target language.
///
/// Functions may be called more than once for the same node; registering a
/// dependency twice has no effect.
pub trait TypeMapping<O> {
    fn map_object(&self, ctx: &mut TypeContext<'_, O>, object: &ConstrainedObject) -> String;
    fn map_reference(
        &self,
        ctx: &mut TypeContext<'_, O>,
        reference: &ConstrainedReference,
    ) -> String;
    fn map_any(&self, ctx: &mut TypeContext<'_, O>) -> String;
    fn map_float(&self, ctx: &mut TypeContext<'_, O>) -> String;
    fn map_integer(&self, ctx: &mut TypeContext<'_, O>) -> String;
    fn map_string(&self, ctx: &mut TypeContext<'_, O>) -> String;
    fn map_boolean(&self, ctx: &mut TypeContext<'_, O>) -> String;
    fn map_tuple(&self, ctx: &mut TypeContext<'_, O>, tuple: &ConstrainedTuple) -> String;
    fn map_array(&self, ctx: &mut TypeContext<'_, O>, array: &ConstrainedArray) -> String;
    fn map_enum(&self, ctx: &mut TypeContext<'_, O>, enumeration: &ConstrainedEnum) -> String;
    fn map_union(&self, ctx: &mut TypeContext<'_, O>, union: &ConstrainedUnion) -> String;
    fn map_dictionary(
        &self,
        ctx: &mut TypeContext<'_, O>,
        dictionary: &ConstrainedDictionary,
    ) -> String;
}

/// Dispatch to the mapping function for the node's variant.
pub fn map_type<O>(mapping: &dyn TypeMapping<O>, ctx: &mut TypeContext<'_, O>) -> String {
    let model = ctx.model();
    match &model.kind {
        ConstrainedKind::Object(object) => mapping.map_object(ctx, object),
        ConstrainedKind::Reference(reference) => mapping.map_reference(ctx, reference),
        ConstrainedKind::Any => mapping.map_any(ctx),
        ConstrainedKind::Float => mapping.map_float(ctx),
        ConstrainedKind::Integer => mapping.map_integer(ctx),
        ConstrainedKind::String => mapping.map_string(ctx),
        ConstrainedKind::Boolean => mapping.map_boolean(ctx),
        ConstrainedKind::Tuple(tuple) => mapping.map_tuple(ctx, tuple),
        ConstrainedKind::Array(array) => mapping.map_array(ctx, array),
        ConstrainedKind::Enum(enumeration) => mapping.map_enum(ctx, enumeration),
        ConstrainedKind::Union(union) => mapping.map_union(ctx, union),
        ConstrainedKind::Dictionary(dictionary) => mapping.map_dictionary(ctx, dictionary),
    }
}
