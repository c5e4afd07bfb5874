//! Rust target for the morph model generator.
//!
//! Provides the [`RustLanguage`] bundle consumed by the constraining engine:
//! identifier constraints following Rust conventions (`PascalCase` types,
//! `snake_case` fields, keywords prefixed with `reserved_`), a type mapping
//! producing Rust type expressions, and the analysis of which standard
//! traits a generated type can derive.
//!
//! # Example
//!
//! ```ignore
//! use morphgen_codegen::pipeline::Pipeline;
//! use morphgen_codegen_rust::RustLanguage;
//!
//! let ctx = Pipeline::new(RustLanguage::default()).run(input)?;
//! for artifact in &ctx.artifacts {
//!     println!("{}: {}", artifact.name, artifact.graph.root_model().ty());
//! }
//! ```

mod constraints;
mod derives;
mod language;
mod naming;
mod type_mapper;

pub use constraints::{RustConstraints, rust_constraints};
pub use derives::{DeriveTrait, can_derive, derivable_traits};
pub use language::{RUST_SAFE_KINDS, RUST_SPLIT_KINDS, RustLanguage};
pub use naming::{
    RUST_RESERVED_WORDS, enum_key_pipeline, is_reserved_rust_word, model_name_pipeline,
    property_key_pipeline,
};
pub use type_mapper::{HASH_MAP_IMPORT, RustTypeMapping};
