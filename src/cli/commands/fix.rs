//! Fix command - apply the fix action of every fixable finding.
//!
//! The linter is not run. Findings are fixed in discovery order, so
//! structural files exist before source files are touched. Conflicts are
//! reported, never fatal.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;

use super::super::{args::FixCommand, exit_status::ExitStatus, style::Colored};
use crate::{
    actions::apply_fixes, project::ProjectContext, report::write_fix_summary, rules::check_all,
};

pub fn fix(cmd: FixCommand) -> Result<ExitStatus> {
    let ctx = ProjectContext::new(&cmd.common)?;

    let findings = check_all(&ctx);
    let summary = apply_fixes(&findings);

    if ctx.verbose {
        eprintln!(
            "{} {} findings, {} already satisfied",
            "note:".bold().cyan(),
            findings.len(),
            summary.unchanged
        );
    }

    let mut stdout = io::stdout().lock();
    write_fix_summary(&summary, &Colored, &mut stdout)?;
    stdout.flush()?;

    Ok(ExitStatus::Success)
}
