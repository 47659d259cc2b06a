//! Templates command report data structures.

use super::output::{Output, Report};

/// One built-in template.
#[derive(Debug)]
pub struct TemplateInfo {
    pub name: String,
    pub description: String,
    /// File extension of the rendered source.
    pub extension: String,
    pub is_default: bool,
}

/// Report listing the available templates.
#[derive(Debug)]
pub struct TemplatesReport {
    pub templates: Vec<TemplateInfo>,
}

impl Report for TemplatesReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Templates");
        let width = self
            .templates
            .iter()
            .map(|t| t.name.len())
            .max()
            .unwrap_or(0);
        for template in &self.templates {
            let default = if template.is_default { " (default)" } else { "" };
            out.list_item(&format!(
                "{:width$}  .{:<3} {}{}",
                template.name,
                template.extension,
                template.description,
                default,
                width = width
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_templates_are_aligned() {
        let report = TemplatesReport {
            templates: vec![
                TemplateInfo {
                    name: "angular".to_string(),
                    description: "AngularJS services".to_string(),
                    extension: "js".to_string(),
                    is_default: true,
                },
                TemplateInfo {
                    name: "fetch".to_string(),
                    description: "TypeScript client".to_string(),
                    extension: "ts".to_string(),
                    is_default: false,
                },
            ],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.stdout,
            [
                "Templates:",
                "  - angular  .js  AngularJS services (default)",
                "  - fetch    .ts  TypeScript client",
            ]
        );
    }
}
