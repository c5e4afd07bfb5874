//! Constrain phase - builds one constrained graph per split model.

use eyre::{Result, WrapErr};

use crate::{
    factory::constrain_meta_model,
    generation::DependencyManager,
    language::Language,
    pipeline::{CompilationContext, ConstrainedArtifact, Diagnostic, Phase},
};

/// Phase that runs the Constrained-Model factory on every split model.
///
/// Cycles widened while building, and union dictionary keys replaced by
/// Any, are reported as warnings.
pub struct ConstrainPhase;

impl<L: Language> Phase<L> for ConstrainPhase {
    fn name(&self) -> &'static str {
        "constrain"
    }

    fn description(&self) -> &'static str {
        "Build constrained models for the target language"
    }

    fn run(&self, language: &L, ctx: &mut CompilationContext) -> Result<()> {
        let phase = <Self as Phase<L>>::name(self);
        for &model in &ctx.split_models {
            let mut dependencies = DependencyManager::new();
            let graph = constrain_meta_model(language, &ctx.input.arena, model, &mut dependencies)
                .wrap_err_with(|| {
                    format!("failed to constrain `{}`", ctx.input.arena.get(model).name)
                })?;

            for note in graph.notes() {
                ctx.diagnostics.push(Diagnostic::from_note(phase, &graph, note));
            }

            ctx.artifacts.push(ConstrainedArtifact {
                name: graph.root_model().name.clone(),
                meta_model: model,
                graph,
                dependencies,
                model_dependencies: Vec::new(),
            });
        }
        Ok(())
    }
}
