//! Pipeline phase trait.

use eyre::Result;

use super::GenerationContext;

/// A phase in the generation pipeline.
///
/// Phases are executed in order by the pipeline. Each phase can read and
/// modify the generation context, filling in model descriptions or adding
/// diagnostics.
///
/// Built-in phases:
/// - `DescribePhase` - describes the registry's models
///
/// Custom phases can be added to the pipeline for additional processing.
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and plugin hooks).
    fn name(&self) -> &'static str;

    /// A human-readable description of what this phase does.
    fn description(&self) -> &'static str;

    /// Run this phase on the generation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the phase fails fatally. Non-fatal issues should
    /// be recorded as diagnostics instead.
    fn run(&self, ctx: &mut GenerationContext) -> Result<()>;
}
