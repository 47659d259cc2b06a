//! Generate operation - client services from a registry.

use std::path::Path;

use eyre::{Context, Result};
use sirasdk_codegen::{GenerateOptions, Generated, generate_services, pipeline::Severity};
use sirasdk_codegen_js::builtin_templates;
use sirasdk_core::{File, FileRules};
use sirasdk_registry::RestRegistry;

use crate::reports::{GenerateReport, GenerationResult, PreviewResult};

/// Where generated source should go.
pub struct GenerateTarget<'a> {
    /// Output file; stdout when absent.
    pub output: Option<&'a Path>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Nothing is written unless generation succeeds as a whole.
pub fn generate<R>(
    registry: &R,
    options: &GenerateOptions,
    target: GenerateTarget<'_>,
) -> Result<GenerateReport>
where
    R: RestRegistry + ?Sized,
{
    let generated = generate_services(registry, &builtin_templates(), options)?;
    let skipped = skipped_classes(&generated);

    let file = target
        .output
        .map(|path| File::new(path, generated.source.as_str()).with_rules(FileRules::generated()));

    let result = match (file, target.dry_run) {
        (file, true) => GenerationResult::Preview(PreviewResult {
            path: file.as_ref().map(|f| f.path().to_path_buf()),
            content: file
                .as_ref()
                .map(File::content)
                .unwrap_or_else(|| generated.source.clone()),
        }),
        (Some(file), false) => {
            file.write().wrap_err_with(|| {
                format!("Failed to write services to '{}'", file.path().display())
            })?;
            tracing::debug!(path = %file.path().display(), "Wrote generated services");
            GenerationResult::Written(file.path().to_path_buf())
        }
        (None, false) => GenerationResult::Stdout(generated.source.clone()),
    };

    Ok(GenerateReport {
        template: generated.template,
        module_name: generated.module_name,
        model_count: generated.model_count,
        skipped,
        result,
    })
}

fn skipped_classes(generated: &Generated) -> Vec<String> {
    generated
        .diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Warning && d.phase == "describe")
        .filter_map(|d| d.location.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use sirasdk_codegen::GenerateError;
    use sirasdk_registry::{ClassBuilder, MethodBuilder, StaticRegistry};
    use tempfile::TempDir;

    use super::*;

    fn registry() -> StaticRegistry {
        StaticRegistry::new()
            .class(
                ClassBuilder::model("Product")
                    .method(MethodBuilder::static_method("find").route("get", "/"))
                    .build(),
            )
            .class(ClassBuilder::service("Mailer").build())
    }

    #[test]
    fn test_generate_to_stdout() {
        let target = GenerateTarget {
            output: None,
            dry_run: false,
        };

        let report = generate(&registry(), &GenerateOptions::new(), target).unwrap();

        assert_eq!(report.template, "angular");
        assert_eq!(report.model_count, 1);
        assert_eq!(report.skipped, ["Mailer"]);
        match report.result {
            GenerationResult::Stdout(source) => {
                assert!(source.starts_with("(function(window, angular, undefined) {"))
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_generate_writes_file_with_header() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("js").join("services.ts");
        let target = GenerateTarget {
            output: Some(&path),
            dry_run: false,
        };
        let options = GenerateOptions::new().template("fetch");

        let report = generate(&registry(), &options, target).unwrap();

        assert!(matches!(report.result, GenerationResult::Written(ref p) if p == &path));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("// Generated by sira-sdk. Do not edit.\n"));
        assert!(content.contains("export const Product = {"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("services.js");
        let target = GenerateTarget {
            output: Some(&path),
            dry_run: true,
        };

        let report = generate(&registry(), &GenerateOptions::new(), target).unwrap();

        assert!(!path.exists());
        match report.result {
            GenerationResult::Preview(preview) => {
                assert_eq!(preview.path.as_deref(), Some(path.as_path()));
                assert!(preview.content.starts_with("// Generated by sira-sdk."));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_failed_generation_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("services.js");
        let target = GenerateTarget {
            output: Some(&path),
            dry_run: false,
        };
        let options = GenerateOptions::new().template("missing");

        let err = generate(&registry(), &options, target).unwrap_err();

        assert!(!path.exists());
        assert!(matches!(
            err.downcast_ref::<GenerateError>(),
            Some(GenerateError::TemplateNotFound { .. })
        ));
    }
}
