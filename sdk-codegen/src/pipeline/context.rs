//! Generation context passed through pipeline phases.

use sirasdk_ir::{ModelDescriptions, RestClass};

use super::diagnostic::{Diagnostic, Severity};

/// Context passed through all pipeline phases.
#[derive(Debug)]
pub struct GenerationContext {
    /// Classes built by the registry, in registry order.
    pub classes: Vec<RestClass>,
    /// The application's `resultful` setting.
    pub resultful: Option<bool>,
    /// Model descriptions (populated by DescribePhase).
    pub models: Option<ModelDescriptions>,
    /// Diagnostics collected during generation.
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationContext {
    pub fn new(classes: Vec<RestClass>, resultful: Option<bool>) -> Self {
        Self {
            classes,
            resultful,
            models: None,
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Add a diagnostic with a location.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// The described models, once DescribePhase has run.
    pub fn models(&self) -> Option<&ModelDescriptions> {
        self.models.as_ref()
    }

    /// Take the model descriptions out of the context.
    pub fn take_models(&mut self) -> Option<ModelDescriptions> {
        self.models.take()
    }
}
