//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Verify sources against resource bundles
//! - `export`: Write a translation table (CSV) for one language
//! - `import`: Regenerate translated bundles from a translation table
//! - `init`: Initialize the bundlecheck configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Export(cmd)) => cmd.common.verbose,
            Some(Command::Import(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by the scanning commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Repository root directory
    #[arg(long, default_value = ".", env = "BUNDLECHECK_ROOT")]
    pub root: PathBuf,

    /// Only modules whose directory name contains this text (overrides config file)
    #[arg(long)]
    pub module_filter: Option<String>,

    /// Verify every resource bundle, not only the primary one (overrides config file)
    #[arg(long)]
    pub all_bundles: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Known problem counts per module; fail only when a module exceeds its count
    #[arg(long)]
    pub baseline: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Target language (e.g. `ja`, `zh_CN`)
    #[arg(long, short = 'l')]
    pub language: String,

    /// CSV file to write
    #[arg(long, short = 'o')]
    pub output: PathBuf,
}

#[derive(Debug, Args)]
pub struct ImportCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Target language (e.g. `ja`, `zh_CN`)
    #[arg(long, short = 'l')]
    pub language: String,

    /// CSV file to read
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Actually write bundles (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check sources for strings missing from resource bundles and unused bundle keys
    Check(CheckCommand),
    /// Export primary bundle entries and existing translations to a CSV table
    Export(ExportCommand),
    /// Regenerate translated bundles from a CSV table
    Import(ImportCommand),
    /// Initialize a new .bundlecheckrc.json configuration file
    Init,
}
