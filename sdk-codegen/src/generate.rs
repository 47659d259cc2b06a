//! Top-level generation entry point.

use miette::Diagnostic as MietteDiagnostic;
use sirasdk_registry::{RegistryError, RestRegistry};
use thiserror::Error;

use crate::{
    describe::DescribeError,
    options::GenerateOptions,
    pipeline::{Diagnostic, Pipeline},
    template::{RenderError, TemplateContext, TemplateRegistry},
};

/// Errors that abort a generation request.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum GenerateError {
    #[error(transparent)]
    Registry(#[from] Box<RegistryError>),

    #[error(transparent)]
    Describe(#[from] DescribeError),

    #[error("template '{name}' not found")]
    #[diagnostic(
        code(sira::template_not_found),
        help("available templates: {available}")
    )]
    TemplateNotFound { name: String, available: String },

    #[error(transparent)]
    Render(#[from] RenderError),

    /// A plugin or user phase aborted the pipeline.
    #[error("generation pipeline aborted: {message}")]
    #[diagnostic(code(sira::pipeline))]
    Pipeline { message: String },
}

impl GenerateError {
    /// Recover the typed error behind a pipeline report.
    fn from_report(report: eyre::Report) -> Self {
        let report = match report.downcast::<Box<RegistryError>>() {
            Ok(err) => return GenerateError::Registry(err),
            Err(report) => report,
        };
        match report.downcast::<DescribeError>() {
            Ok(err) => GenerateError::Describe(err),
            Err(report) => GenerateError::Pipeline {
                message: format!("{:#}", report),
            },
        }
    }
}

/// The result of a successful generation request.
#[derive(Debug, Clone)]
pub struct Generated {
    /// Rendered source text.
    pub source: String,
    /// Non-fatal diagnostics, in the order they were raised.
    pub diagnostics: Vec<Diagnostic>,
    /// Name of the template that rendered `source`.
    pub template: String,
    /// File extension of the rendered source.
    pub file_extension: &'static str,
    pub module_name: String,
    /// Number of models rendered.
    pub model_count: usize,
}

/// Runs generation requests against a set of templates.
pub struct Generator<'t> {
    templates: &'t TemplateRegistry,
    pipeline: Pipeline,
}

impl<'t> Generator<'t> {
    pub fn new(templates: &'t TemplateRegistry) -> Self {
        Self {
            templates,
            pipeline: Pipeline::new(),
        }
    }

    /// Use a custom pipeline (extra phases or plugins).
    pub fn with_pipeline(mut self, pipeline: Pipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Describe the registry's models and render them.
    ///
    /// Fails without partial output; the template is looked up before the
    /// registry is touched.
    ///
    /// # Errors
    ///
    /// See [`GenerateError`].
    pub fn generate<R>(&self, registry: &R, options: &GenerateOptions) -> Result<Generated, GenerateError>
    where
        R: RestRegistry + ?Sized,
    {
        let options = options.resolve();
        let template =
            self.templates
                .get(&options.template)
                .ok_or_else(|| GenerateError::TemplateNotFound {
                    name: options.template.clone(),
                    available: self.templates.names().join(", "),
                })?;

        let classes = registry.build_classes()?;
        let mut ctx = self
            .pipeline
            .run(classes, registry.resultful())
            .map_err(GenerateError::from_report)?;

        let models = ctx.take_models().ok_or_else(|| GenerateError::Pipeline {
            message: "no model descriptions were produced".to_string(),
        })?;

        let template_ctx = TemplateContext::new(&options.module_name, &models, &options.url_base)
            .with_resultful(ctx.resultful);
        template_ctx.validate()?;
        let source = template.render(&template_ctx)?;

        tracing::info!(
            template = template.name(),
            module = %options.module_name,
            models = models.len(),
            "Generated client services"
        );

        Ok(Generated {
            source,
            diagnostics: ctx.diagnostics,
            template: template.name().to_string(),
            file_extension: template.file_extension(),
            module_name: options.module_name,
            model_count: models.len(),
        })
    }
}

/// Generate client services with the default pipeline.
///
/// # Errors
///
/// See [`GenerateError`].
pub fn generate_services<R>(
    registry: &R,
    templates: &TemplateRegistry,
    options: &GenerateOptions,
) -> Result<Generated, GenerateError>
where
    R: RestRegistry + ?Sized,
{
    Generator::new(templates).generate(registry, options)
}
