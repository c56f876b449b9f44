//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run every phase in one process and report
//! - `analyze`: Run the per-unit phase for one module and write its partial result
//! - `merge`: Merge previously written partial results and report
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::checks::CheckType;

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
            Some(Command::Analyze(cmd)) => cmd.common.verbose,
            Some(Command::Merge(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Checks to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckType>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct AnalyzeCommand {
    /// Module to analyze, relative to the workspace root (`.` for the
    /// workspace itself)
    pub module: String,

    /// Where to write the module's partial result
    #[arg(long, short)]
    pub out: PathBuf,

    /// Checks to run (default: all)
    #[arg(long, value_enum)]
    pub checks: Vec<CheckType>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct MergeCommand {
    /// Partial result files written by `analyze`
    pub partials: Vec<PathBuf>,

    /// Merge every partial result in a directory instead
    #[arg(long)]
    pub dir: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check every module's resources and report cross-module issues
    Check(CheckCommand),
    /// Analyze one module and write its partial result to disk
    Analyze(AnalyzeCommand),
    /// Merge partial results from `analyze` runs and report
    Merge(MergeCommand),
    /// Initialize a new .reslintrc.json configuration file
    Init,
}
