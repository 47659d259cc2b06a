//! Describe phase - runs the model describer over the built classes.

use eyre::Result;

use crate::{
    describe::{SkippedModels, describe_classes},
    pipeline::{Diagnostic, GenerationContext, Phase},
};

/// Phase that describes the registry's models.
///
/// Each class skipped for lacking a shared constructor becomes a warning
/// located at the class name.
pub struct DescribePhase;

impl Phase for DescribePhase {
    fn name(&self) -> &'static str {
        "describe"
    }

    fn description(&self) -> &'static str {
        "Describe models and merge constructor parameters"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let mut skipped = SkippedModels::new();
        let models = describe_classes(&ctx.classes, &mut skipped)?;

        for name in skipped.into_names() {
            ctx.add_diagnostic(
                Diagnostic::warning(
                    self.name(),
                    format!("skipping '{}' as it is not a Sira model", name),
                )
                .at(name),
            );
        }

        ctx.models = Some(models);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sirasdk_registry::ClassBuilder;

    use super::*;
    use crate::describe::DescribeError;

    #[test]
    fn test_skips_become_warnings() {
        let mut ctx = GenerationContext::new(
            vec![
                ClassBuilder::service("Mailer").build(),
                ClassBuilder::model("Product").build(),
            ],
            None,
        );

        DescribePhase.run(&mut ctx).unwrap();

        assert_eq!(ctx.models().map(|m| m.len()), Some(1));
        assert_eq!(ctx.warning_count(), 1);
        let warning = &ctx.diagnostics[0];
        assert_eq!(warning.phase, "describe");
        assert_eq!(warning.location.as_deref(), Some("Mailer"));
    }

    #[test]
    fn test_duplicate_model_is_fatal() {
        let mut ctx = GenerationContext::new(
            vec![
                ClassBuilder::model("Product").build(),
                ClassBuilder::model("Product").build(),
            ],
            None,
        );

        let report = DescribePhase.run(&mut ctx).unwrap_err();

        assert!(report.downcast_ref::<DescribeError>().is_some());
        assert!(ctx.models().is_none());
    }
}
