//! The Rust target.

use morphgen_codegen::{
    constrained::{ConstrainedGraph, ConstrainedId, ConstrainedKind},
    constraints::Constraints,
    language::{Language, TypeMapping},
    split::SplitOptions,
};
use morphgen_config::{GeneratorConfig, RustOptions};
use morphgen_ir::ModelKind;

use crate::{constraints::rust_constraints, type_mapper::RustTypeMapping};

/// Kinds typed without looking at their children.
///
/// Named Rust types are referred to by name only, so the containers that
/// become their own item are safe as well.
pub const RUST_SAFE_KINDS: &[ModelKind] = &[
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

/// Kinds rendered as their own item.
pub const RUST_SPLIT_KINDS: &[ModelKind] = &[
    ModelKind::Enum,
    ModelKind::Object,
    ModelKind::Tuple,
    ModelKind::Union,
];

/// The Rust target language.
///
/// Types are assigned while constraining.
pub struct RustLanguage {
    options: RustOptions,
    constraints: Box<dyn Constraints<RustOptions>>,
    type_mapping: Box<dyn TypeMapping<RustOptions>>,
}

impl RustLanguage {
    /// Create the Rust target with the default constraints and type mapping.
    pub fn new(options: RustOptions) -> Self {
        Self {
            options,
            constraints: Box::new(rust_constraints()),
            type_mapping: Box::new(RustTypeMapping),
        }
    }

    /// Create the Rust target from the `[rust]` section of a config.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.rust.clone())
    }

    /// Replace the constraint functions.
    pub fn with_constraints(
        mut self,
        constraints: impl Constraints<RustOptions> + 'static,
    ) -> Self {
        self.constraints = Box::new(constraints);
        self
    }

    /// Replace the type mapping.
    pub fn with_type_mapping(mut self, mapping: impl TypeMapping<RustOptions> + 'static) -> Self {
        self.type_mapping = Box::new(mapping);
        self
    }
}

impl Default for RustLanguage {
    fn default() -> Self {
        Self::new(RustOptions::default())
    }
}

impl std::fmt::Debug for RustLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RustLanguage")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Language for RustLanguage {
    type Options = RustOptions;

    fn name(&self) -> &'static str {
        "rust"
    }

    fn options(&self) -> &RustOptions {
        &self.options
    }

    fn constraints(&self) -> &dyn Constraints<RustOptions> {
        self.constraints.as_ref()
    }

    fn type_mapping(&self) -> &dyn TypeMapping<RustOptions> {
        self.type_mapping.as_ref()
    }

    fn resolves_types_eagerly(&self) -> bool {
        true
    }

    fn safe_kinds(&self) -> &'static [ModelKind] {
        RUST_SAFE_KINDS
    }

    fn split_options(&self) -> SplitOptions {
        SplitOptions::for_kinds(RUST_SPLIT_KINDS)
    }

    fn model_dependency(&self, graph: &ConstrainedGraph, reference: ConstrainedId) -> String {
        let name = match &graph.get(reference).kind {
            ConstrainedKind::Reference(r) => &graph.get(r.ref_model).name,
            _ => &graph.get(reference).name,
        };
        format!("use {}::{};", self.options.module_path, name)
    }
}
