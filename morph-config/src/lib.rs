// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Generator options for the morph model generator.
//!
//! Options are read from a TOML document with one table per target
//! language. Every field has a default, so an empty document is valid:
//!
//! ```toml
//! [rust]
//! module_path = "crate::models"
//!
//! [typescript]
//! map_type = "record"
//! enum_type = "union"
//! ```

mod config;
mod error;
mod options;
mod validate;

pub use config::GeneratorConfig;
pub use error::{Error, Result, SourceContext};
pub use options::{EnumType, MapType, RustOptions, TypeScriptOptions};
