//! TypeScript target for the morph model generator.
//!
//! Provides the [`TypeScriptLanguage`] bundle consumed by the constraining
//! engine: identifier constraints following TypeScript conventions
//! (`PascalCase` types, `camelCase` properties, `CONSTANT_CASE` enum
//! members) and a type mapping producing TypeScript type expressions.
//! Types are assigned by the resolution pass, so cyclic unions and arrays
//! are widened to `any` instead of recursing.
//!
//! # Example
//!
//! ```ignore
//! use morphgen_codegen::pipeline::Pipeline;
//! use morphgen_codegen_typescript::TypeScriptLanguage;
//!
//! let ctx = Pipeline::new(TypeScriptLanguage::default()).run(input)?;
//! for warning in ctx.warnings() {
//!     eprintln!("{warning}");
//! }
//! ```

mod constraints;
mod language;
mod naming;
mod type_mapper;

pub use constraints::TypeScriptConstraints;
pub use language::{TYPESCRIPT_SAFE_KINDS, TYPESCRIPT_SPLIT_KINDS, TypeScriptLanguage};
pub use naming::{
    TS_RESERVED_WORDS, enum_key_pipeline, is_reserved_typescript_word, model_name_pipeline,
    property_key_pipeline,
};
pub use type_mapper::TypeScriptTypeMapping;
