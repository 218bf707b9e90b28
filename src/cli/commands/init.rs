use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{args::InitCommand, exit_status::ExitStatus};
use crate::{
    config::{CONFIG_FILE_NAME, default_config_json},
    report::SUCCESS_MARK,
};

pub fn init(cmd: InitCommand) -> Result<ExitStatus> {
    let config_path = cmd.common.root.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
        return Ok(ExitStatus::Failure);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );

    Ok(ExitStatus::Success)
}
