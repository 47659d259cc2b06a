use clap::Args;
use eyre::Result;
use sirasdk_codegen_js::builtin_templates;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct TemplatesCommand {}

impl TemplatesCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::templates(&builtin_templates());
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
