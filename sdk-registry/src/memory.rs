//! In-memory registries.

use sirasdk_ir::RestClass;

use crate::{RestRegistry, Result};

/// A registry over a fixed list of classes.
///
/// # Example
///
/// ```
/// use sirasdk_registry::{ClassBuilder, RestRegistry, StaticRegistry};
///
/// let registry = StaticRegistry::new()
///     .class(ClassBuilder::model("Product").build())
///     .with_resultful(true);
///
/// assert_eq!(registry.build_classes().unwrap().len(), 1);
/// assert_eq!(registry.resultful(), Some(true));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    classes: Vec<RestClass>,
    resultful: Option<bool>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a class.
    pub fn class(mut self, class: RestClass) -> Self {
        self.classes.push(class);
        self
    }

    /// Append several classes.
    pub fn classes(mut self, classes: impl IntoIterator<Item = RestClass>) -> Self {
        self.classes.extend(classes);
        self
    }

    /// Set the application's `resultful` setting.
    pub fn with_resultful(mut self, resultful: bool) -> Self {
        self.resultful = Some(resultful);
        self
    }
}

impl RestRegistry for StaticRegistry {
    fn build_classes(&self) -> Result<Vec<RestClass>> {
        Ok(self.classes.clone())
    }

    fn resultful(&self) -> Option<bool> {
        self.resultful
    }
}
