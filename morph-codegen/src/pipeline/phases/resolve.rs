//! Resolve phase - assigns types for languages that defer typing.

use eyre::{Result, WrapErr};

use crate::{
    language::Language,
    pipeline::{CompilationContext, Diagnostic, Phase},
    resolve::apply_types,
};

/// Phase that runs the cyclic-resolution pass on every artifact.
///
/// Does nothing for languages that type their models while constraining.
pub struct ResolvePhase;

impl<L: Language> Phase<L> for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Assign types to constrained models"
    }

    fn run(&self, language: &L, ctx: &mut CompilationContext) -> Result<()> {
        if language.resolves_types_eagerly() {
            return Ok(());
        }

        let phase = <Self as Phase<L>>::name(self);
        for artifact in &mut ctx.artifacts {
            let before = artifact.graph.notes().len();
            apply_types(language, &mut artifact.graph, &mut artifact.dependencies)
                .wrap_err_with(|| format!("failed to resolve types of `{}`", artifact.name))?;

            for note in &artifact.graph.notes()[before..] {
                ctx.diagnostics.push(Diagnostic::from_note(phase, &artifact.graph, note));
            }
        }
        Ok(())
    }
}
