//! Command-line interface layer.
//!
//! Parses nothing itself; `main` hands over the parsed [`Arguments`] and maps
//! the returned [`ExitStatus`] (or error) to a process exit code.

use anyhow::Result;

pub mod args;
mod commands;
pub mod exit_status;
pub mod style;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Some(Command::Validate(cmd)) => commands::validate::validate(cmd),
        Some(Command::Fix(cmd)) => commands::fix::fix(cmd),
        Some(Command::Init(cmd)) => commands::init::init(cmd),
        None => Ok(ExitStatus::Success),
    }
}
