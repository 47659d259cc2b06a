//! Pipeline orchestrator.

use eyre::Result;
use sirasdk_ir::RestClass;
use sirasdk_registry::RestRegistry;

use super::{GenerationContext, Phase, Plugin, phases::DescribePhase};

/// The generation pipeline orchestrator.
///
/// Runs the built-in describe phase followed by any user phases, calling
/// plugin hooks before and after each phase.
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with the built-in phases.
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Names of all phases in execution order.
    pub fn phase_names(&self) -> Vec<&'static str> {
        std::iter::once(DescribePhase.name())
            .chain(self.phases.iter().map(|p| p.name()))
            .collect()
    }

    /// Build the registry's classes and run the pipeline over them.
    ///
    /// # Errors
    ///
    /// Registry failures are returned as `Box<RegistryError>` reports.
    pub fn run_registry<R>(&self, registry: &R) -> Result<GenerationContext>
    where
        R: RestRegistry + ?Sized,
    {
        let classes = registry.build_classes()?;
        self.run(classes, registry.resultful())
    }

    /// Run the pipeline on already built classes.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase or plugin fails fatally.
    pub fn run(&self, classes: Vec<RestClass>, resultful: Option<bool>) -> Result<GenerationContext> {
        let mut ctx = GenerationContext::new(classes, resultful);

        let builtin_phases: [&dyn Phase; 1] = [&DescribePhase];
        let user_phases = self.phases.iter().map(|p| p.as_ref());

        for phase in builtin_phases.into_iter().chain(user_phases) {
            self.run_phase(phase, &mut ctx)?;
        }

        Ok(ctx)
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut GenerationContext) -> Result<()> {
        let phase_name = phase.name();
        tracing::debug!(phase = phase_name, "Running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
