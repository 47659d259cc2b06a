use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use sirasdk_codegen::GenerateOptions;
use sirasdk_registry::RegistryFile;

use super::UnwrapOrExit;
use crate::{
    config::SdkConfig,
    ops::{self, GenerateTarget},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the registry document
    #[arg(short, long, default_value = "registry.json")]
    pub registry: PathBuf,

    /// Path to sira-sdk.toml (defaults to ./sira-sdk.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Template to render
    #[arg(short, long)]
    pub template: Option<String>,

    /// Name of the generated module
    #[arg(short, long)]
    pub module_name: Option<String>,

    /// Base URL of the REST API
    #[arg(short = 'u', long, env = "SIRA_API_URL")]
    pub api_url: Option<String>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let cwd = std::env::current_dir().wrap_err("Failed to read the working directory")?;
        let config = SdkConfig::load(self.config.as_deref(), &cwd)?;
        let options = self.options().or(config.generate);

        let registry = RegistryFile::open(&self.registry).unwrap_or_exit();
        let target = GenerateTarget {
            output: self.output.as_deref(),
            dry_run: self.dry_run,
        };
        let report = ops::generate(&registry, &options, target).unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Options given on the command line; they win over the config file.
    fn options(&self) -> GenerateOptions {
        GenerateOptions {
            template: self.template.clone(),
            module_name: self.module_name.clone(),
            api_url: self.api_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        cmd: GenerateCommand,
    }

    #[test]
    fn test_flags_win_over_config() {
        let harness = Harness::parse_from(["generate", "-t", "fetch", "-u", "http://localhost/api"]);
        let config = SdkConfig::parse(
            "[generate]\ntemplate = \"angular\"\nmodule-name = \"shop\"\n",
        )
        .unwrap();

        let options = harness.cmd.options().or(config.generate);

        assert_eq!(
            options,
            GenerateOptions::new()
                .template("fetch")
                .module_name("shop")
                .api_url("http://localhost/api")
        );
    }

    #[test]
    fn test_defaults() {
        let harness = Harness::parse_from(["generate"]);

        assert_eq!(harness.cmd.registry, PathBuf::from("registry.json"));
        assert!(harness.cmd.output.is_none());
        assert!(!harness.cmd.dry_run);
    }
}
