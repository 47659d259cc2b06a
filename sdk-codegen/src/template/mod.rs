//! Template boundary.
//!
//! A [`Template`] renders [`ModelDescriptions`] into one source file. The
//! describer never looks at templates; templates never look at the
//! registry.

mod registry;

use indexmap::IndexMap;
use miette::Diagnostic;
pub use registry::TemplateRegistry;
use sirasdk_ir::{ModelDescription, ModelDescriptions};
use thiserror::Error;

/// Errors raised while rendering a template.
#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    /// Two names in one scope (models, parameters or client keys) map to
    /// the same generated identifier.
    #[error("'{first}' and '{second}' both map to identifier '{identifier}'")]
    #[diagnostic(
        code(sira::render::identifier_conflict),
        help("rename one of them so their generated names differ")
    )]
    IdentifierConflict {
        identifier: String,
        first: String,
        second: String,
    },

    /// The module name cannot be used.
    #[error("invalid module name '{name}'")]
    #[diagnostic(
        code(sira::render::invalid_module_name),
        help("pass a non-empty name with --module-name")
    )]
    InvalidModuleName { name: String },

    /// A model cannot be rendered.
    #[error("cannot render model '{model}': {message}")]
    #[diagnostic(code(sira::render::malformed))]
    Malformed { model: String, message: String },
}

/// Everything a template needs to render.
#[derive(Debug, Clone, Copy)]
pub struct TemplateContext<'a> {
    /// Name of the generated module.
    pub module_name: &'a str,
    /// Models to render, in registry order.
    pub models: &'a ModelDescriptions,
    /// API base URL without trailing slashes.
    pub url_base: &'a str,
    /// Whether responses are wrapped in a `{ result }` envelope.
    pub resultful: Option<bool>,
}

impl<'a> TemplateContext<'a> {
    pub fn new(module_name: &'a str, models: &'a ModelDescriptions, url_base: &'a str) -> Self {
        Self {
            module_name,
            models,
            url_base,
            resultful: None,
        }
    }

    pub fn with_resultful(mut self, resultful: Option<bool>) -> Self {
        self.resultful = resultful;
        self
    }

    /// Returns true when responses must be unwrapped.
    pub fn is_resultful(&self) -> bool {
        self.resultful.unwrap_or(false)
    }

    /// Check the module name is usable.
    ///
    /// # Errors
    ///
    /// Blank names are rejected.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.module_name.trim().is_empty() {
            return Err(RenderError::InvalidModuleName {
                name: self.module_name.to_string(),
            });
        }
        Ok(())
    }

    /// Map every model to a generated identifier, failing on collisions.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::IdentifierConflict`] when two models share an
    /// identifier.
    pub fn model_identifiers(
        &self,
        to_identifier: impl Fn(&str) -> String,
    ) -> Result<Vec<(String, &'a ModelDescription)>, RenderError> {
        let models: &'a ModelDescriptions = self.models;
        let mut owners: IndexMap<String, &'a ModelDescription> = IndexMap::new();
        for model in models.iter() {
            let identifier = to_identifier(model.name());
            if let Some(first) = owners.get(&identifier) {
                return Err(RenderError::IdentifierConflict {
                    identifier,
                    first: first.name().to_string(),
                    second: model.name().to_string(),
                });
            }
            owners.insert(identifier, model);
        }
        Ok(owners.into_iter().collect())
    }
}

/// A client service template.
pub trait Template: Send + Sync {
    /// Template name used for lookup (e.g. "angular").
    fn name(&self) -> &'static str;

    /// One-line description shown by `sira-sdk templates`.
    fn description(&self) -> &'static str;

    /// File extension of the rendered source (e.g. "js", "ts").
    fn file_extension(&self) -> &'static str;

    /// Render the models into source text.
    ///
    /// # Errors
    ///
    /// See [`RenderError`].
    fn render(&self, ctx: &TemplateContext<'_>) -> Result<String, RenderError>;
}
