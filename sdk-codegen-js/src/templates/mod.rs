//! Built-in client templates.
//!
//! - [`AngularTemplate`] - AngularJS module with `$resource` services
//! - [`FetchTemplate`] - dependency-free TypeScript client

mod angular;
mod fetch;
mod keys;
mod routes;

pub use angular::AngularTemplate;
pub use fetch::FetchTemplate;
use sirasdk_codegen::TemplateRegistry;

/// All built-in templates, the default one first.
pub fn builtin_templates() -> TemplateRegistry {
    TemplateRegistry::new()
        .register(AngularTemplate)
        .register(FetchTemplate)
}

#[cfg(test)]
mod tests {
    use sirasdk_codegen::DEFAULT_TEMPLATE;

    use super::*;

    #[test]
    fn test_default_template_is_registered_first() {
        let templates = builtin_templates();
        assert_eq!(templates.names(), [DEFAULT_TEMPLATE, "fetch"]);
    }
}
