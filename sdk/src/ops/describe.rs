//! Describe operation - model descriptions as JSON.

use eyre::{Context, Result};
use sirasdk_codegen::{SkippedModels, describe_models_with};
use sirasdk_registry::RestRegistry;

/// Describe the registry's models as pretty-printed JSON.
pub fn describe<R>(registry: &R) -> Result<String>
where
    R: RestRegistry + ?Sized,
{
    let mut skipped = SkippedModels::new();
    let models = describe_models_with(registry, &mut skipped)?;
    tracing::debug!(
        models = models.len(),
        skipped = skipped.len(),
        "Described registry"
    );

    serde_json::to_string_pretty(&models).wrap_err("Failed to serialize model descriptions")
}
