//! Generation options and their defaults.

use serde::Deserialize;
use sirasdk_core::strip_trailing_slashes;

/// Template used when none is requested.
pub const DEFAULT_TEMPLATE: &str = "angular";
/// Module name used when none is requested.
pub const DEFAULT_MODULE_NAME: &str = "siras";
/// API URL used when none is requested.
pub const DEFAULT_API_URL: &str = "/";

/// User supplied generation options.
///
/// Unset and empty values fall back to the defaults. The same shape is
/// read from the `[generate]` table of `sira-sdk.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GenerateOptions {
    pub template: Option<String>,
    pub module_name: Option<String>,
    pub api_url: Option<String>,
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn module_name(mut self, module_name: impl Into<String>) -> Self {
        self.module_name = Some(module_name.into());
        self
    }

    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Fill unset values from `fallback`; values already set win.
    pub fn or(self, fallback: GenerateOptions) -> Self {
        Self {
            template: self.template.or(fallback.template),
            module_name: self.module_name.or(fallback.module_name),
            api_url: self.api_url.or(fallback.api_url),
        }
    }

    /// Apply defaults and normalize the API URL.
    pub fn resolve(&self) -> ResolvedOptions {
        let api_url = non_empty(&self.api_url).unwrap_or(DEFAULT_API_URL);
        ResolvedOptions {
            template: non_empty(&self.template)
                .unwrap_or(DEFAULT_TEMPLATE)
                .to_string(),
            module_name: non_empty(&self.module_name)
                .unwrap_or(DEFAULT_MODULE_NAME)
                .to_string(),
            url_base: strip_trailing_slashes(api_url).to_string(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Options with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub template: String,
    pub module_name: String,
    /// API URL without trailing slashes.
    pub url_base: String,
}
