//! Constraining engine for the morph model generator.
//!
//! This crate turns a language-neutral Meta-Model graph into Constrained
//! Meta-Models: the same graph with every name legal in the target language,
//! every node carrying a literal type, and every cycle the target cannot
//! express widened to Any. Language crates (e.g., `morphgen-codegen-rust`)
//! plug in through the [`language::Language`] trait.
//!
//! # Module Organization
//!
//! - [`constrained`] - The Constrained Meta-Model graph and its payloads
//! - [`constraints`] - Constraint functions and name-constraining stages
//! - [`factory`] - Builds a constrained graph from one Meta-Model root
//! - [`resolve`] - Deferred type assignment with cycle resolution
//! - [`split`] - Picks the models rendered separately
//! - [`generation`] - Output bookkeeping (DependencyManager)
//! - [`language`] - Language trait and type-mapping table
//! - [`pipeline`] - Phase orchestration, plugins and diagnostics

pub mod constrained;
pub mod constraints;
pub mod factory;
pub mod generation;
pub mod language;
pub mod pipeline;
pub mod resolve;
pub mod split;
mod typing;

#[cfg(test)]
mod testing;

pub use factory::constrain_meta_model;
pub use resolve::apply_types;
pub use split::{SplitOptions, split};
