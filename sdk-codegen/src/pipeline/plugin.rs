//! Pipeline plugin trait for extensibility.

use eyre::Result;

use super::GenerationContext;

/// A plugin that can hook into the generation pipeline.
///
/// Plugins receive callbacks before and after each phase runs, allowing
/// them to inspect or modify the generation context.
///
/// # Example
///
/// ```
/// use eyre::Result;
/// use sirasdk_codegen::pipeline::{GenerationContext, Plugin};
///
/// struct RequireModels;
///
/// impl Plugin for RequireModels {
///     fn name(&self) -> &'static str { "require-models" }
///
///     fn on_after_phase(&self, phase: &str, ctx: &mut GenerationContext) -> Result<()> {
///         if phase == "describe" && ctx.models().is_some_and(|m| m.is_empty()) {
///             eyre::bail!("registry has no models");
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    /// The name of this plugin (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Called before a phase runs.
    ///
    /// # Errors
    ///
    /// Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut GenerationContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes successfully.
    ///
    /// # Errors
    ///
    /// Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut GenerationContext) -> Result<()> {
        Ok(())
    }
}
