//! Constraining pipeline.
//!
//! This module provides a [`Pipeline`] orchestrator that takes an
//! [`InputMetaModel`](morphgen_ir::InputMetaModel) to one constrained artifact
//! per rendered model. The pipeline provides:
//!
//! - Explicit phase boundaries (split → constrain → resolve → dependencies)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//!
//! # Example
//!
//! ```ignore
//! use morphgen_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new(RustLanguage::default()).run(input)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{diag}");
//! }
//! for artifact in &ctx.artifacts {
//!     println!("{}: {:?}", artifact.name, artifact.dependencies.dependencies());
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::{CompilationContext, ConstrainedArtifact};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
