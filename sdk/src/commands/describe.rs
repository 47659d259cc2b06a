use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use sirasdk_registry::RegistryFile;

use super::UnwrapOrExit;
use crate::ops;

#[derive(Args)]
pub struct DescribeCommand {
    /// Path to the registry document
    #[arg(short, long, default_value = "registry.json")]
    pub registry: PathBuf,
}

impl DescribeCommand {
    pub fn run(&self) -> Result<()> {
        let registry = RegistryFile::open(&self.registry).unwrap_or_exit();
        let json = ops::describe(&registry)?;
        println!("{}", json);
        Ok(())
    }
}
