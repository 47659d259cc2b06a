use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sirasdk_registry::RegistryFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the registry document
    #[arg(short, long, default_value = "registry.json")]
    pub registry: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let registry = RegistryFile::open(&self.registry).unwrap_or_exit();
        let report = ops::check(&registry)?;

        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
