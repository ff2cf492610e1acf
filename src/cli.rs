use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::DEFAULT_CONFIG_NAME;
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "fcc")]
#[command(author, version, about)]
#[command(long_about = "Verify that base files and their copies in mirror directories stay \
    content-identical.\n\n\
    Exit codes:\n  \
    0 - Check completed\n  \
    1 - Drift or missing copies found (with --strict)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate a starter configuration file
    Init(InitArgs),

    /// Hash base files and their copies, write the report and print a summary
    Check(CheckArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Path of the configuration file to create
    #[arg(short, long, default_value = DEFAULT_CONFIG_NAME)]
    pub config: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Path to the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_NAME)]
    pub config: PathBuf,

    /// Summary format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Exit with code 1 when any copy is drifted or missing
    #[arg(long)]
    pub strict: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
