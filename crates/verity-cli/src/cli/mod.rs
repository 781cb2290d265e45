use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `verity` binary.
#[derive(Debug, Parser)]
#[command(name = "verity", version, about = "Verity - fake news detection from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json, raw
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Name shown in reports (defaults to Guest)
    #[arg(short, long, global = true)]
    pub user: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            user: self.user.clone(),
        }
    }
}
