//! Minimal language used by the engine's own tests.

use eyre::{Result, bail};
use morphgen_core::{to_constant_case, to_pascal_case, to_snake_case};
use morphgen_ir::ModelKind;

use crate::{
    constrained::{
        ConstrainedArray, ConstrainedDictionary, ConstrainedEnum, ConstrainedGraph, ConstrainedId,
        ConstrainedKind, ConstrainedObject, ConstrainedReference, ConstrainedTuple,
        ConstrainedUnion,
    },
    constraints::{
        ConstantContext, Constraints, DefaultConstraints, EnumKeyContext, EnumValueContext,
        ModelNameContext, NamePipeline, PropertyKeyContext, stages,
    },
    language::{Language, TypeContext, TypeMapping},
    split::SplitOptions,
};

pub(crate) const EAGER_SAFE: &[ModelKind] = &[
    ModelKind::Object,
    ModelKind::Enum,
    ModelKind::Union,
    ModelKind::Tuple,
    ModelKind::Any,
    ModelKind::String,
    ModelKind::Integer,
    ModelKind::Float,
    ModelKind::Boolean,
];

pub(crate) const DEFERRED_SAFE: &[ModelKind] = &[
    ModelKind::Any,
    ModelKind::Boolean,
    ModelKind::Float,
    ModelKind::Integer,
    ModelKind::String,
    ModelKind::Reference,
    ModelKind::Object,
    ModelKind::Enum,
];

fn reserved_return(name: &str) -> String {
    stages::prefix_reserved(name, &["return"])
}

pub(crate) struct TestLanguage {
    eager: bool,
    safe: &'static [ModelKind],
    split: SplitOptions,
    union_keys: bool,
    constraints: Box<dyn Constraints<()>>,
}

impl TestLanguage {
    /// Types while building; containers are safe.
    pub(crate) fn eager() -> Self {
        Self::new(true, EAGER_SAFE)
    }

    /// Types in a separate pass; references are safe.
    pub(crate) fn deferred() -> Self {
        Self::new(false, DEFERRED_SAFE)
    }

    fn new(eager: bool, safe: &'static [ModelKind]) -> Self {
        let constraints = DefaultConstraints::<()>::new()
            .with_model_name(
                NamePipeline::builder()
                    .naming_formatter(to_pascal_case)
                    .build(),
            )
            .with_property_key(
                NamePipeline::builder()
                    .naming_formatter(to_snake_case)
                    .no_reserved_keywords(reserved_return)
                    .build(),
            )
            .with_enum_key(
                NamePipeline::builder()
                    .naming_formatter(to_constant_case)
                    .no_reserved_keywords(reserved_return)
                    .build(),
            );
        Self {
            eager,
            safe,
            split: SplitOptions::for_kinds(&[ModelKind::Object, ModelKind::Enum]),
            union_keys: true,
            constraints: Box::new(constraints),
        }
    }

    pub(crate) fn without_union_keys(mut self) -> Self {
        self.union_keys = false;
        self
    }

    pub(crate) fn with_constraints(mut self, constraints: impl Constraints<()> + 'static) -> Self {
        self.constraints = Box::new(constraints);
        self
    }
}

impl Language for TestLanguage {
    type Options = ();

    fn name(&self) -> &'static str {
        "test"
    }

    fn options(&self) -> &() {
        &()
    }

    fn constraints(&self) -> &dyn Constraints<()> {
        self.constraints.as_ref()
    }

    fn type_mapping(&self) -> &dyn TypeMapping<()> {
        &TestMapping
    }

    fn resolves_types_eagerly(&self) -> bool {
        self.eager
    }

    fn safe_kinds(&self) -> &'static [ModelKind] {
        self.safe
    }

    fn split_options(&self) -> SplitOptions {
        self.split
    }

    fn model_dependency(&self, graph: &ConstrainedGraph, reference: ConstrainedId) -> String {
        match &graph.get(reference).kind {
            ConstrainedKind::Reference(r) => format!("import {}", graph.get(r.ref_model).name),
            _ => format!("import {}", graph.get(reference).name),
        }
    }

    fn allows_union_dictionary_keys(&self) -> bool {
        self.union_keys
    }
}

struct TestMapping;

impl TypeMapping<()> for TestMapping {
    fn map_object(&self, ctx: &mut TypeContext<'_, ()>, _: &ConstrainedObject) -> String {
        ctx.model().name.clone()
    }

    fn map_reference(&self, ctx: &mut TypeContext<'_, ()>, r: &ConstrainedReference) -> String {
        ctx.get(r.ref_model).name.clone()
    }

    fn map_any(&self, _: &mut TypeContext<'_, ()>) -> String {
        "any".into()
    }

    fn map_float(&self, _: &mut TypeContext<'_, ()>) -> String {
        "float".into()
    }

    fn map_integer(&self, _: &mut TypeContext<'_, ()>) -> String {
        "int".into()
    }

    fn map_string(&self, _: &mut TypeContext<'_, ()>) -> String {
        "string".into()
    }

    fn map_boolean(&self, _: &mut TypeContext<'_, ()>) -> String {
        "bool".into()
    }

    fn map_tuple(&self, ctx: &mut TypeContext<'_, ()>, _: &ConstrainedTuple) -> String {
        ctx.model().name.clone()
    }

    fn map_array(&self, ctx: &mut TypeContext<'_, ()>, array: &ConstrainedArray) -> String {
        format!("{}[]", ctx.ty_of(array.value_model))
    }

    fn map_enum(&self, ctx: &mut TypeContext<'_, ()>, _: &ConstrainedEnum) -> String {
        ctx.model().name.clone()
    }

    fn map_union(&self, ctx: &mut TypeContext<'_, ()>, _: &ConstrainedUnion) -> String {
        ctx.model().name.clone()
    }

    fn map_dictionary(
        &self,
        ctx: &mut TypeContext<'_, ()>,
        dictionary: &ConstrainedDictionary,
    ) -> String {
        ctx.dependencies.add_dependency("import Map");
        format!(
            "Map<{}, {}>",
            ctx.ty_of(dictionary.key),
            ctx.ty_of(dictionary.value)
        )
    }
}

/// Constraints that refuse one model name.
pub(crate) struct RejectingConstraints {
    pub(crate) rejected: &'static str,
    pub(crate) inner: DefaultConstraints<()>,
}

impl Constraints<()> for RejectingConstraints {
    fn model_name(&self, ctx: &ModelNameContext<'_, ()>) -> Result<String> {
        if ctx.model_name == self.rejected {
            bail!("model name `{}` is not allowed", ctx.model_name);
        }
        self.inner.model_name(ctx)
    }

    fn property_key(&self, ctx: &PropertyKeyContext<'_, ()>) -> Result<String> {
        self.inner.property_key(ctx)
    }

    fn enum_key(&self, ctx: &EnumKeyContext<'_, ()>) -> Result<String> {
        self.inner.enum_key(ctx)
    }

    fn enum_value(&self, ctx: &EnumValueContext<'_, ()>) -> Result<String> {
        self.inner.enum_value(ctx)
    }

    fn constant(&self, ctx: &ConstantContext<'_, ()>) -> Result<Option<String>> {
        self.inner.constant(ctx)
    }
}
