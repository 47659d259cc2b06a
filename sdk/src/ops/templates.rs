//! Templates operation - list the available templates.

use sirasdk_codegen::{DEFAULT_TEMPLATE, TemplateRegistry};

use crate::reports::{TemplateInfo, TemplatesReport};

/// Describe every registered template, in registration order.
pub fn templates(registry: &TemplateRegistry) -> TemplatesReport {
    TemplatesReport {
        templates: registry
            .iter()
            .map(|template| TemplateInfo {
                name: template.name().to_string(),
                description: template.description().to_string(),
                extension: template.file_extension().to_string(),
                is_default: template.name() == DEFAULT_TEMPLATE,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use sirasdk_codegen_js::builtin_templates;

    use super::*;

    #[test]
    fn test_builtin_templates() {
        let report = templates(&builtin_templates());

        let names: Vec<_> = report.templates.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["angular", "fetch"]);
        assert!(report.templates[0].is_default);
        assert_eq!(report.templates[0].extension, "js");
        assert!(!report.templates[1].is_default);
        assert_eq!(report.templates[1].extension, "ts");
    }
}
