//! `sira-sdk.toml` project configuration.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use serde::Deserialize;
use sirasdk_codegen::GenerateOptions;

/// Looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "sira-sdk.toml";

/// Contents of `sira-sdk.toml`.
///
/// ```toml
/// [generate]
/// template = "angular"
/// module-name = "shop"
/// api-url = "http://localhost:3000/api"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SdkConfig {
    #[serde(default)]
    pub generate: GenerateOptions,
}

impl SdkConfig {
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn open(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        Self::parse(&content).wrap_err_with(|| format!("invalid config '{}'", path.display()))
    }

    /// Load an explicit config file, or `sira-sdk.toml` from `dir` when it
    /// exists. Missing implicit config means defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::open(path),
            None => {
                let implicit: PathBuf = dir.join(CONFIG_FILE);
                if implicit.is_file() {
                    tracing::debug!(path = %implicit.display(), "Using project config");
                    Self::open(&implicit)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
