//! Model describer.
//!
//! Turns the registry's REST classes into [`ModelDescriptions`]: classes
//! without a shared constructor are skipped, and every prototype method
//! gets its model's constructor parameters prepended to `accepts`, so the
//! generated bindings always ask for the instance identity.

use std::collections::HashMap;

use miette::Diagnostic;
use sirasdk_ir::{ModelDescription, ModelDescriptions, RestClass, RestMethod, SharedCtor};
use sirasdk_registry::{RegistryError, RestRegistry};
use thiserror::Error;

/// Errors raised while describing models.
#[derive(Debug, Error, Diagnostic)]
pub enum DescribeError {
    /// The registry failed to produce its classes.
    #[error(transparent)]
    Registry(#[from] Box<RegistryError>),

    /// Two qualifying classes share a name.
    #[error("duplicate model name '{name}'")]
    #[diagnostic(
        code(sira::describe::duplicate_model),
        help("model names are the keys of the generated bindings and must be unique")
    )]
    DuplicateModel { name: String },
}

/// Receives notifications from the describer.
pub trait DescribeListener {
    /// Called once for every class skipped because it has no shared
    /// constructor.
    fn on_skipped_model(&mut self, name: &str);
}

impl<F: FnMut(&str)> DescribeListener for F {
    fn on_skipped_model(&mut self, name: &str) {
        self(name)
    }
}

/// A listener that records the names of skipped classes in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkippedModels(Vec<String>);

impl SkippedModels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_names(self) -> Vec<String> {
        self.0
    }
}

impl DescribeListener for SkippedModels {
    fn on_skipped_model(&mut self, name: &str) {
        self.0.push(name.to_string());
    }
}

/// Describe every model of a registry.
///
/// # Example
///
/// ```
/// use sirasdk_codegen::describe_models;
/// use sirasdk_ir::{ParamDescriptor, ParamSource};
/// use sirasdk_registry::{ClassBuilder, MethodBuilder, StaticRegistry};
///
/// let registry = StaticRegistry::new()
///     .class(
///         ClassBuilder::model("Product")
///             .ctor_param(ParamDescriptor::new("id").source(ParamSource::Path))
///             .method(MethodBuilder::prototype("updateAttributes"))
///             .build(),
///     )
///     .class(ClassBuilder::service("Mailer").build());
///
/// let models = describe_models(&registry).unwrap();
/// assert_eq!(models.names().collect::<Vec<_>>(), ["Product"]);
/// assert_eq!(models.get("Product").unwrap().methods()[0].accepts[0].arg, "id");
/// ```
///
/// # Errors
///
/// Fails when the registry cannot build its classes or when two models
/// share a name.
pub fn describe_models<R>(registry: &R) -> Result<ModelDescriptions, DescribeError>
where
    R: RestRegistry + ?Sized,
{
    describe_models_with(registry, &mut |_: &str| {})
}

/// Describe every model of a registry, reporting skipped classes to
/// `listener`.
pub fn describe_models_with<R, L>(
    registry: &R,
    listener: &mut L,
) -> Result<ModelDescriptions, DescribeError>
where
    R: RestRegistry + ?Sized,
    L: DescribeListener + ?Sized,
{
    let classes = registry.build_classes()?;
    describe_classes(&classes, listener)
}

/// Describe an already built list of classes.
///
/// The input is left untouched; descriptions own fresh copies of the
/// classes and their methods.
pub fn describe_classes<L>(
    classes: &[RestClass],
    listener: &mut L,
) -> Result<ModelDescriptions, DescribeError>
where
    L: DescribeListener + ?Sized,
{
    let ctors = constructors_by_name(classes);
    let mut models = ModelDescriptions::new();

    for class in classes {
        if !class.is_model() {
            tracing::warn!(model = %class.name, "Skipping class as it is not a Sira model");
            listener.on_skipped_model(&class.name);
            continue;
        }

        if models.contains(&class.name) {
            return Err(DescribeError::DuplicateModel {
                name: class.name.clone(),
            });
        }

        let methods = class
            .methods
            .iter()
            .map(|method| merge_ctor_params(method, ctors.get(method.rest_class.as_str()).copied()))
            .collect();

        models.insert(ModelDescription::new(RestClass {
            name: class.name.clone(),
            ctor: class.ctor.clone(),
            http_path: class.http_path.clone(),
            methods,
        }));
    }

    tracing::debug!(models = models.len(), "Described models");
    Ok(models)
}

/// Index shared constructors by class name. The first class with a given
/// name wins; ctor-less classes are not indexed.
fn constructors_by_name(classes: &[RestClass]) -> HashMap<&str, &SharedCtor> {
    let mut ctors = HashMap::new();
    for class in classes {
        if let Some(ctor) = &class.ctor {
            ctors.entry(class.name.as_str()).or_insert(ctor);
        }
    }
    ctors
}

/// Copy a method, prepending the owning ctor's params when the method is
/// an instance method.
fn merge_ctor_params(method: &RestMethod, ctor: Option<&SharedCtor>) -> RestMethod {
    let mut merged = method.clone();
    match ctor {
        Some(ctor) if !method.is_static() => {
            merged.accepts = ctor
                .accepts
                .iter()
                .chain(method.accepts.iter())
                .cloned()
                .collect();
        }
        _ => {}
    }
    merged
}
