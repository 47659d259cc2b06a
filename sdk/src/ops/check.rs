//! Check operation - registry validation.

use eyre::Result;
use sirasdk_codegen::{DescribeError, pipeline::Pipeline};
use sirasdk_registry::{RegistryFile, RestRegistry};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the pipeline over an already parsed registry document. Duplicate
/// models are reported as errors; other failures propagate.
pub fn check(file: &RegistryFile) -> Result<CheckReport> {
    let mut report = CheckReport {
        registry_path: file.path().to_path_buf(),
        models: Vec::new(),
        skipped: Vec::new(),
        resultful: file.resultful(),
        errors: Vec::new(),
    };

    let ctx = match Pipeline::new().run_registry(file) {
        Ok(ctx) => ctx,
        Err(err) => match err.downcast::<DescribeError>() {
            Ok(err) => {
                report.errors.push(err.to_string());
                return Ok(report);
            }
            Err(err) => return Err(err),
        },
    };

    for diag in &ctx.diagnostics {
        if diag.severity.is_error() {
            report.errors.push(diag.to_string());
        } else if diag.severity.is_warning() {
            if let Some(name) = &diag.location {
                report.skipped.push(name.clone());
            }
        }
    }
    if let Some(models) = ctx.models() {
        report.models = models.names().map(str::to_string).collect();
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn open(content: &str) -> (TempDir, RegistryFile) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("registry.json");
        std::fs::write(&path, content).unwrap();
        let file = RegistryFile::open(&path).unwrap();
        (temp, file)
    }

    #[test]
    fn test_check_lists_models_and_skipped() {
        let (_temp, file) = open(
            r#"{
              "settings": { "resultful": false },
              "classes": [
                { "name": "Product", "ctor": {} },
                { "name": "Helper" },
                { "name": "User", "ctor": { "accepts": [{ "arg": "id" }] } }
              ]
            }"#,
        );

        let report = check(&file).unwrap();

        assert!(report.is_valid());
        assert_eq!(report.models, ["Product", "User"]);
        assert_eq!(report.skipped, ["Helper"]);
        assert_eq!(report.resultful, Some(false));
    }

    #[test]
    fn test_duplicate_models_are_errors() {
        let (_temp, file) = open(
            r#"{ "classes": [ { "name": "Product", "ctor": {} }, { "name": "Product", "ctor": {} } ] }"#,
        );

        let report = check(&file).unwrap();

        assert!(!report.is_valid());
        assert_eq!(report.errors, ["duplicate model name 'Product'"]);
        assert!(report.models.is_empty());
    }
}
