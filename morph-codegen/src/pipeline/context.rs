//! Compilation context passed through pipeline phases.

use morphgen_ir::{InputMetaModel, MetaModelId};

use super::diagnostic::{Diagnostic, Severity};
use crate::{constrained::ConstrainedGraph, generation::DependencyManager};

/// One separately rendered model.
#[derive(Debug, Clone)]
pub struct ConstrainedArtifact {
    /// Constrained name of the model.
    pub name: String,
    /// The Meta-Model node the artifact was built from.
    pub meta_model: MetaModelId,
    /// The constrained graph rooted at the model.
    pub graph: ConstrainedGraph,
    /// Import tokens registered while typing and resolving dependencies.
    pub dependencies: DependencyManager,
    /// Names of the models this one refers to directly.
    pub model_dependencies: Vec<String>,
}

/// Context passed through all pipeline phases.
///
/// This struct carries the state of a run through each phase, accumulating
/// results and diagnostics along the way.
#[derive(Debug)]
pub struct CompilationContext {
    /// The input being constrained. Splitting rewrites its arena in place.
    pub input: InputMetaModel,
    /// Models to render separately (populated by SplitPhase).
    pub split_models: Vec<MetaModelId>,
    /// One entry per split model (populated by ConstrainPhase).
    pub artifacts: Vec<ConstrainedArtifact>,
    /// Diagnostics collected during the run.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context from an input model.
    pub fn new(input: InputMetaModel) -> Self {
        Self {
            input,
            split_models: Vec::new(),
            artifacts: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Find an artifact by constrained name.
    pub fn artifact(&self, name: &str) -> Option<&ConstrainedArtifact> {
        self.artifacts.iter().find(|a| a.name == name)
    }

    /// Count the diagnostics of `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics_of(severity).count()
    }

    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.count(Severity::Warning) > 0
    }

    /// Record a diagnostic.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Diagnostics of `severity`, in the order they were recorded.
    pub fn diagnostics_of(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }

    /// Warnings, which mark lossy decisions such as widened cycle edges.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics_of(Severity::Warning)
    }
}
