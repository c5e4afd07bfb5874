//! Pipeline orchestrator.

use eyre::Result;
use morphgen_ir::InputMetaModel;
use tracing::debug;

use super::{
    CompilationContext, Phase, PhaseInfo, Plugin,
    phases::{ConstrainPhase, DependenciesPhase, ResolvePhase, SplitPhase},
};
use crate::language::Language;

/// The constraining pipeline orchestrator.
///
/// The pipeline owns the target language and manages the execution of
/// phases and plugin hooks. It runs the built-in phases (split, constrain,
/// resolve, dependencies) followed by any user phases, calling plugin hooks
/// before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new(TypeScriptLanguage::default())
///     .plugin(MyPlugin::new())
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(input)?;
/// ```
pub struct Pipeline<L: Language> {
    language: L,
    phases: Vec<Box<dyn Phase<L>>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl<L: Language> Pipeline<L> {
    /// Create a new pipeline for `language` with the built-in phases.
    pub fn new(language: L) -> Self {
        Self {
            language,
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// The target language.
    pub fn language(&self) -> &L {
        &self.language
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase<L> + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on an input model.
    ///
    /// Executes all phases in order:
    /// 1. SplitPhase - picks the models rendered separately
    /// 2. ConstrainPhase - builds one constrained graph per model
    /// 3. ResolvePhase - assigns types when the language defers typing
    /// 4. DependenciesPhase - collects each artifact's imports
    /// 5. User phases (if any)
    ///
    /// Plugin hooks are called before and after each phase.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase or plugin hook fails.
    pub fn run(&self, input: InputMetaModel) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(input);

        let builtin_phases = Self::builtin_phases();
        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    /// Every phase [`Pipeline::run`] executes, in order.
    pub fn phase_infos(&self) -> Vec<PhaseInfo> {
        Self::builtin_phases()
            .iter()
            .chain(self.phases.iter())
            .map(|phase| phase.info())
            .collect()
    }

    fn builtin_phases() -> Vec<Box<dyn Phase<L>>> {
        vec![
            Box::new(SplitPhase),
            Box::new(ConstrainPhase),
            Box::new(ResolvePhase),
            Box::new(DependenciesPhase),
        ]
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase<L>, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        debug!(phase = phase_name, language = self.language.name(), "running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(&self.language, ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}
