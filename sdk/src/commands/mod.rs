mod check;
mod completions;
mod describe;
mod generate;
mod templates;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use describe::DescribeCommand;
use eyre::Result;
use generate::GenerateCommand;
use sirasdk_codegen::GenerateError;
use templates::TemplatesCommand;
use tracing::Level;

/// Extension trait for exiting on registry errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for sirasdk_registry::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for Result<T> {
    /// Generation errors carry miette diagnostics; anything else is left to
    /// color-eyre.
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(report) => match report.downcast::<GenerateError>() {
                Ok(err) => {
                    eprintln!("{:?}", miette::Report::new(err));
                    std::process::exit(1);
                }
                Err(report) => {
                    eprintln!("{:?}", report);
                    std::process::exit(1);
                }
            },
        }
    }
}

#[derive(Parser)]
#[command(name = "sira-sdk")]
#[command(version)]
#[command(about = "Generate client services for Sira REST models")]
pub(crate) struct Cli {
    /// Show debug logs
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Describe(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Templates(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate client services from a registry document
    Generate(GenerateCommand),

    /// Print the model descriptions as JSON
    Describe(DescribeCommand),

    /// Validate a registry document without generating code
    Check(CheckCommand),

    /// List the built-in templates
    Templates(TemplatesCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
