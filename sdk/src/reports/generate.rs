//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Template that rendered the services.
    pub template: String,
    /// AngularJS module / client module name.
    pub module_name: String,
    /// Number of models rendered.
    pub model_count: usize,
    /// Classes skipped because they are not models.
    pub skipped: Vec<String>,
    pub result: GenerationResult,
}

/// Where the generated source went.
#[derive(Debug)]
pub enum GenerationResult {
    /// Written to a file.
    Written(PathBuf),
    /// Printed to stdout.
    Stdout(String),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// File that would be written, if any.
    pub path: Option<PathBuf>,
    /// Source that would be written, including the generated-file header.
    pub content: String,
}

fn models(count: usize) -> String {
    format!("{} model{}", count, if count == 1 { "" } else { "s" })
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.model_count == 0 {
            out.warning("the registry has no models, the services will be empty");
        }
        match &self.result {
            GenerationResult::Written(path) => {
                out.status(&format!(
                    "✓ Generated {} with the '{}' template: {}",
                    models(self.model_count),
                    self.template,
                    path.display()
                ));
                if !self.skipped.is_empty() {
                    out.status(&format!("  skipped: {}", self.skipped.join(", ")));
                }
            }
            GenerationResult::Stdout(source) => out.source(source),
            GenerationResult::Preview(preview) => {
                let label = preview
                    .path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "stdout".to_string());
                out.divider(&label);
                out.source(&preview.content);
                out.divider("Summary");
                out.preformatted(&format!(
                    "{} would be rendered with the '{}' template as module '{}'",
                    models(self.model_count),
                    self.template,
                    self.module_name
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            template: "angular".to_string(),
            module_name: "siras".to_string(),
            model_count: 2,
            skipped: vec!["Helper".to_string()],
            result,
        }
    }

    #[test]
    fn test_written_report_goes_to_stderr() {
        let mut out = RecordingOutput::default();
        report(GenerationResult::Written(PathBuf::from("js/services.js"))).render(&mut out);

        assert!(out.stdout.is_empty());
        assert_eq!(
            out.stderr,
            [
                "✓ Generated 2 models with the 'angular' template: js/services.js",
                "  skipped: Helper",
            ]
        );
    }

    #[test]
    fn test_stdout_report_is_only_source() {
        let mut out = RecordingOutput::default();
        report(GenerationResult::Stdout("var a;\n".to_string())).render(&mut out);

        assert_eq!(out.stdout, ["var a;\n"]);
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn test_empty_registry_warns() {
        let mut out = RecordingOutput::default();
        let mut empty = report(GenerationResult::Stdout(String::new()));
        empty.model_count = 0;
        empty.render(&mut out);

        assert_eq!(
            out.stderr,
            ["warning: the registry has no models, the services will be empty"]
        );
    }

    #[test]
    fn test_preview_report() {
        let mut out = RecordingOutput::default();
        let mut preview = report(GenerationResult::Preview(PreviewResult {
            path: None,
            content: "var a;\n".to_string(),
        }));
        preview.model_count = 1;
        preview.render(&mut out);

        assert_eq!(
            out.stdout,
            [
                "── stdout ──",
                "var a;\n",
                "── Summary ──",
                "1 model would be rendered with the 'angular' template as module 'siras'",
            ]
        );
    }
}
