//! Plugin hooks around pipeline phases.

use eyre::Result;

use super::CompilationContext;

/// Observer called around every phase of a [`Pipeline`](super::Pipeline).
///
/// Plugins see the built-in phases and user phases alike, by name, and may
/// edit the context between them.
///
/// # Example
///
/// ```ignore
/// struct ArtifactCounter {
///     seen: AtomicUsize,
/// }
///
/// impl Plugin for ArtifactCounter {
///     fn name(&self) -> &'static str { "artifact-counter" }
///
///     fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
///         if phase == "constrain" {
///             self.seen.store(ctx.artifacts.len(), Ordering::SeqCst);
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    /// Runs before `phase`; an error stops the pipeline before the phase
    /// starts.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    /// Runs once `phase` has succeeded. Artifacts added by the phase are
    /// already in `ctx`.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
