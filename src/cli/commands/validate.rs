//! Validate command - run every rule and report.
//!
//! Structural rules run first, then source rules, then the configured
//! linter. Exits with `Failure` when any finding is an error.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;

use super::super::{args::ValidateCommand, exit_status::ExitStatus, style::Colored};
use crate::{
    project::ProjectContext,
    report::{ValidationReport, write_validation_report},
    rules::{
        check_all,
        lint::{CommandLintRunner, check_lint_issues},
    },
};

pub fn validate(cmd: ValidateCommand) -> Result<ExitStatus> {
    let ctx = ProjectContext::new(&cmd.common)?;

    let mut report = ValidationReport::from_findings(check_all(&ctx));

    match CommandLintRunner::from_command(&ctx.config.lint_command) {
        Some(runner) => {
            for finding in check_lint_issues(&ctx, &runner) {
                report.record(finding);
            }
        }
        None => {
            if ctx.verbose {
                eprintln!(
                    "{} lintCommand is empty, skipping lint",
                    "note:".bold().cyan()
                );
            }
        }
    }

    if ctx.verbose {
        eprintln!(
            "{} checked {} source files and {} route handlers",
            "note:".bold().cyan(),
            ctx.source_files().len(),
            ctx.route_files().len()
        );
    }

    let mut stdout = io::stdout().lock();
    write_validation_report(&report, &Colored, &mut stdout)?;
    stdout.flush()?;

    Ok(if report.has_errors() {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    })
}
