//! Dependencies phase - collects the models each artifact refers to.

use eyre::Result;

use crate::{
    constrained::ConstrainedKind,
    language::Language,
    pipeline::{CompilationContext, Diagnostic, Phase},
};

/// Phase that registers one import token per directly referenced model.
pub struct DependenciesPhase;

impl<L: Language> Phase<L> for DependenciesPhase {
    fn name(&self) -> &'static str {
        "dependencies"
    }

    fn description(&self) -> &'static str {
        "Collect the models each artifact depends on"
    }

    fn run(&self, language: &L, ctx: &mut CompilationContext) -> Result<()> {
        let phase = <Self as Phase<L>>::name(self);

        for artifact in &mut ctx.artifacts {
            let graph = &artifact.graph;
            for reference in graph.nearest_dependencies(graph.root()) {
                let ConstrainedKind::Reference(target) = &graph.get(reference).kind else {
                    continue;
                };
                artifact
                    .dependencies
                    .add_dependency(language.model_dependency(graph, reference));
                artifact
                    .model_dependencies
                    .push(graph.get(target.ref_model).name.clone());
            }

            ctx.diagnostics.push(
                Diagnostic::info(
                    phase,
                    format!(
                        "{} model dependencies, {} imports",
                        artifact.model_dependencies.len(),
                        artifact.dependencies.len()
                    ),
                )
                .at(artifact.name.clone()),
            );
        }
        Ok(())
    }
}
