//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from registry validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the registry document.
    pub registry_path: PathBuf,
    /// Names of the classes that describe as models.
    pub models: Vec<String>,
    /// Classes skipped because they have no shared constructor.
    pub skipped: Vec<String>,
    /// The document's `resultful` setting.
    pub resultful: Option<bool>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.registry_path.display()));
        out.newline();

        out.section(&format!("Models ({})", self.models.len()));
        for name in &self.models {
            out.list_item(name);
        }

        if !self.skipped.is_empty() {
            out.newline();
            out.section(&format!("Skipped, not models ({})", self.skipped.len()));
            for name in &self.skipped {
                out.list_item(name);
            }
        }

        if let Some(resultful) = self.resultful {
            out.newline();
            out.section("Settings");
            out.key_value_indented("resultful", &resultful.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_valid_report() {
        let report = CheckReport {
            registry_path: PathBuf::from("registry.json"),
            models: vec!["Product".to_string(), "User".to_string()],
            skipped: vec!["Helper".to_string()],
            resultful: Some(true),
            errors: Vec::new(),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.stdout,
            [
                "✓ registry.json is valid",
                "",
                "Models (2):",
                "  - Product",
                "  - User",
                "",
                "Skipped, not models (1):",
                "  - Helper",
                "",
                "Settings:",
                "  resultful: true",
            ]
        );
    }

    #[test]
    fn test_invalid_report_lists_errors_only() {
        let report = CheckReport {
            registry_path: PathBuf::from("registry.json"),
            models: Vec::new(),
            skipped: Vec::new(),
            resultful: None,
            errors: vec!["duplicate model 'Product'".to_string()],
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert!(!report.is_valid());
        assert!(out.stdout.is_empty());
        assert_eq!(out.stderr, ["error: duplicate model 'Product'"]);
    }
}
