//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// Name and description of a phase, for listing a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// One step of the constraining pipeline.
///
/// A phase is generic over the target language so it can call the
/// language's constraints, type mapping and split options.
///
/// Built-in phases:
/// - `SplitPhase` - picks the models rendered separately
/// - `ConstrainPhase` - builds one constrained graph per split model
/// - `ResolvePhase` - assigns types for languages that defer typing
/// - `DependenciesPhase` - collects the models each artifact refers to
///
/// Custom phases can be added to the pipeline for additional processing.
pub trait Phase<L>: Send + Sync {
    /// Used as the `phase` of diagnostics and passed to plugin hooks.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Errors abort the run; lossy but recoverable decisions are recorded
    /// as warnings in `ctx.diagnostics` instead.
    fn run(&self, language: &L, ctx: &mut CompilationContext) -> Result<()>;

    fn info(&self) -> PhaseInfo {
        PhaseInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}
