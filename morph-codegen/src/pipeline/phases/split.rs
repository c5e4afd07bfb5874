//! Split phase - picks the models rendered separately.

use eyre::Result;
use tracing::debug;

use crate::{
    language::Language,
    pipeline::{CompilationContext, Phase},
    split::split,
};

/// Phase that splits every root of the input.
///
/// Nested models the language renders on their own are replaced by
/// references, and every model to render ends up in
/// [`CompilationContext::split_models`] in first-seen order.
pub struct SplitPhase;

impl<L: Language> Phase<L> for SplitPhase {
    fn name(&self) -> &'static str {
        "split"
    }

    fn description(&self) -> &'static str {
        "Pick the models rendered separately"
    }

    fn run(&self, language: &L, ctx: &mut CompilationContext) -> Result<()> {
        let options = language.split_options();
        let roots: Vec<_> = ctx.input.roots().collect();

        for root in roots {
            for model in split(&mut ctx.input.arena, root, &options) {
                if !ctx.split_models.contains(&model) {
                    ctx.split_models.push(model);
                }
            }
        }

        debug!(models = ctx.split_models.len(), "split input");
        Ok(())
    }
}
