//! Command-line front end: argument parsing, dispatch, and exit codes.

use std::fs;
use std::path::Path;

use anyhow::Result;

mod args;
mod exit_status;

pub use args::{
    AnalyzeCommand, Arguments, CheckCommand, Command, CommonArgs, MergeCommand, OutputFormat,
};
pub use exit_status::ExitStatus;

use crate::checks::CheckSet;
use crate::commands::{self, RunResult};
use crate::config::{CONFIG_FILE_NAME, default_config_json};
use crate::reporter;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let (result, common) = match args.command {
        Some(Command::Check(cmd)) => {
            let set = CheckSet::from_selection(&cmd.checks);
            let result = commands::check::run(&cmd.common.workspace, &set, verbose)?;
            (result, cmd.common)
        }
        Some(Command::Analyze(cmd)) => {
            let set = CheckSet::from_selection(&cmd.checks);
            let result =
                commands::analyze::run(&cmd.common.workspace, &cmd.module, &cmd.out, &set, verbose)?;
            (result, cmd.common)
        }
        Some(Command::Merge(cmd)) => {
            let result = commands::merge::run(&cmd.partials, cmd.dir.as_deref(), verbose)?;
            (result, cmd.common)
        }
        Some(Command::Init) => {
            init()?;
            println!("Created {}", CONFIG_FILE_NAME);
            return Ok(ExitStatus::Success);
        }
        None => return Ok(ExitStatus::Success),
    };

    print(&result, common.format)?;

    if result.error_count > 0 || result.warning_count > 0 {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

fn print(result: &RunResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            reporter::print_report(&result.issues);
            reporter::print_summary(result.error_count, result.warning_count, result.files_checked);
        }
        OutputFormat::Json => println!("{}", reporter::to_json(&result.issues)?),
    }
    Ok(())
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
