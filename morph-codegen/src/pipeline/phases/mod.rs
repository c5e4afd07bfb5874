//! Built-in pipeline phases.
//!
//! This module provides the standard phases that run in every pipeline:
//!
//! - [`SplitPhase`] - picks the models rendered separately
//! - [`ConstrainPhase`] - builds one constrained graph per split model
//! - [`ResolvePhase`] - assigns types for languages that defer typing
//! - [`DependenciesPhase`] - collects the models each artifact refers to

mod constrain;
mod dependencies;
mod resolve;
mod split;

pub use constrain::ConstrainPhase;
pub use dependencies::DependenciesPhase;
pub use resolve::ResolvePhase;
pub use split::SplitPhase;
