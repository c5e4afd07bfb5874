//! Meta-Model intermediate representation for the morph model generator.
//!
//! This crate provides the source-agnostic graph that input processors
//! produce and the constraining engine consumes. It carries no behavior
//! beyond storage and identity: every shape, even a self-contradictory one,
//! is valid data.
//!
//! # Architecture
//!
//! ```text
//! schema → input processor → InputMetaModel (morph-ir) → constrain → ConstrainedGraph
//! ```
//!
//! Nodes live in a [`MetaModelArena`] and point at each other through
//! [`MetaModelId`] handles, so the graph is free to contain cycles.

mod arena;
mod model;
mod options;
mod types;

pub use arena::{InputMetaModel, MetaModelArena, MetaModelId};
pub use model::{
    ArrayModel, DictionaryModel, EnumModel, EnumValue, MetaModel, MetaModelKind, ObjectModel,
    ObjectProperty, ReferenceModel, TupleModel, TupleValue, UnionModel,
};
pub use options::{Discriminator, MetaModelConstant, MetaModelOptions};
pub use types::{ModelKind, SerializationType};
