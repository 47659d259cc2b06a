//! Named template lookup.

use indexmap::IndexMap;

use super::Template;

/// Templates keyed by name, in registration order.
#[derive(Default)]
pub struct TemplateRegistry {
    templates: IndexMap<&'static str, Box<dyn Template>>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template, replacing any template with the same name.
    pub fn register(mut self, template: impl Template + 'static) -> Self {
        self.templates.insert(template.name(), Box::new(template));
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn Template> {
        self.templates.get(name).map(|t| t.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Template names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.templates.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Template> {
        self.templates.values().map(|t| t.as_ref())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl std::fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("templates", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{RenderError, TemplateContext};

    struct Named(&'static str);

    impl Template for Named {
        fn name(&self) -> &'static str {
            self.0
        }

        fn description(&self) -> &'static str {
            "test template"
        }

        fn file_extension(&self) -> &'static str {
            "txt"
        }

        fn render(&self, ctx: &TemplateContext<'_>) -> Result<String, RenderError> {
            Ok(format!("{}:{}", self.0, ctx.module_name))
        }
    }

    #[test]
    fn test_lookup_and_order() {
        let registry = TemplateRegistry::new()
            .register(Named("b"))
            .register(Named("a"));

        assert_eq!(registry.names(), ["b", "a"]);
        assert!(registry.contains("a"));
        assert!(registry.get("missing").is_none());
        assert_eq!(registry.get("a").map(|t| t.name()), Some("a"));
    }

    #[test]
    fn test_register_replaces_same_name() {
        let registry = TemplateRegistry::new()
            .register(Named("a"))
            .register(Named("a"));

        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_debug_lists_names() {
        let registry = TemplateRegistry::new().register(Named("a"));
        assert_eq!(format!("{:?}", registry), "TemplateRegistry { templates: [\"a\"] }");
    }
}
