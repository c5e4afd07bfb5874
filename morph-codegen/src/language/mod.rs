//! Language-specific abstractions.
//!
//! This module provides the traits a target language implements:
//! - [`Language`] - Bundle of everything the engine needs from a target
//! - [`TypeMapping`] - Table mapping constrained nodes to literal types
//! - [`TypeContext`] - Input handed to every type-mapping function

mod type_mapping;

use morphgen_ir::ModelKind;

use crate::{
    constrained::{ConstrainedGraph, ConstrainedId},
    constraints::Constraints,
    split::SplitOptions,
};

pub use type_mapping::{TypeContext, TypeMapping, map_type};

/// A target language.
///
/// Implement this trait to constrain Meta-Models for a new language.
pub trait Language {
    /// Generator options passed through to every constraint and mapping call.
    type Options;

    /// Language identifier (e.g., "rust", "typescript")
    fn name(&self) -> &'static str;

    fn options(&self) -> &Self::Options;

    fn constraints(&self) -> &dyn Constraints<Self::Options>;

    fn type_mapping(&self) -> &dyn TypeMapping<Self::Options>;

    /// Whether types are assigned while the factory builds the graph.
    ///
    /// Languages returning false get their types from a separate pass once
    /// the whole graph exists.
    fn resolves_types_eagerly(&self) -> bool;

    /// Kinds whose type can be computed without looking at any child.
    fn safe_kinds(&self) -> &'static [ModelKind];

    /// Which kinds are rendered as separate models.
    fn split_options(&self) -> SplitOptions;

    /// The import/include token for a referenced model.
    ///
    /// `reference` is a Reference node of `graph`.
    fn model_dependency(&self, graph: &ConstrainedGraph, reference: ConstrainedId) -> String;

    /// Whether a Union may be used as a dictionary key.
    ///
    /// When false, union keys are constrained as Any.
    fn allows_union_dictionary_keys(&self) -> bool {
        true
    }

    /// Check if `kind` is in [`Language::safe_kinds`].
    fn is_safe(&self, kind: ModelKind) -> bool {
        self.safe_kinds().contains(&kind)
    }
}
