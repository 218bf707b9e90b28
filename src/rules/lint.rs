//! External linter passthrough.
//!
//! The linter runs as a blocking subprocess with zero tolerated warnings. Its
//! output is matched against known complaint categories; anything it reports
//! that matches none of them is surfaced verbatim rather than dropped.
//!
//! There is no timeout: a linter that never exits stalls the run.

use std::{path::Path, process::Command, sync::LazyLock};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use regex::Regex;

use crate::{
    issues::{Finding, RuleId},
    project::ProjectContext,
};

/// Number of trailing lines kept from output no category accounts for.
const UNRECOGNIZED_TAIL_LINES: usize = 20;

/// Captured result of one linter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintOutput {
    pub success: bool,
    /// stdout followed by stderr.
    pub output: String,
}

/// The I/O boundary of the lint rule.
pub trait LintRunner {
    /// Human-readable command line, used in messages.
    fn describe(&self) -> String;

    fn run(&self, root: &Path) -> Result<LintOutput>;
}

/// Runs a configured command line in the project root.
pub struct CommandLintRunner {
    program: String,
    args: Vec<String>,
}

impl CommandLintRunner {
    /// `None` when the configured command is empty (lint disabled).
    pub fn from_command(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl LintRunner for CommandLintRunner {
    fn describe(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .cloned()
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn run(&self, root: &Path) -> Result<LintOutput> {
        if !root.is_dir() {
            bail!("Project root is not a directory: {}", root.display());
        }
        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(root)
            .output()
            .with_context(|| format!("Failed to run `{}`", self.describe()))?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(LintOutput {
            success: output.status.success(),
            output: text,
        })
    }
}

/// Known categories of linter complaints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintComplaint {
    UnusedSymbol,
    ExplicitAny,
    MissingBraces,
}

impl LintComplaint {
    pub const ALL: [LintComplaint; 3] = [
        LintComplaint::UnusedSymbol,
        LintComplaint::ExplicitAny,
        LintComplaint::MissingBraces,
    ];

    pub fn message(&self) -> &'static str {
        match self {
            LintComplaint::UnusedSymbol => "Linter reports unused variables or imports",
            LintComplaint::ExplicitAny => "Linter reports values typed as `any`",
            LintComplaint::MissingBraces => "Linter reports control statements without braces",
        }
    }

    pub fn suggestion(&self) -> &'static str {
        match self {
            LintComplaint::UnusedSymbol => {
                "Remove unused variables and imports, or prefix intentionally unused names with `_`"
            }
            LintComplaint::ExplicitAny => "Replace `any` with a specific type or `unknown`",
            LintComplaint::MissingBraces => "Wrap if/else and loop bodies in braces",
        }
    }

    fn regex(&self) -> &'static Regex {
        match self {
            LintComplaint::UnusedSymbol => &UNUSED_SYMBOL_REGEX,
            LintComplaint::ExplicitAny => &EXPLICIT_ANY_REGEX,
            LintComplaint::MissingBraces => &MISSING_BRACES_REGEX,
        }
    }
}

static UNUSED_SYMBOL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"no-unused-vars|is (?:defined|assigned a value) but never used").unwrap()
});

static EXPLICIT_ANY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"no-explicit-any|Unexpected any").unwrap());

static MISSING_BRACES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bcurly\b|Expected \{ after").unwrap());

/// Complaint categories present in linter output, in a fixed order.
pub fn lint_complaints(output: &str) -> Vec<LintComplaint> {
    LintComplaint::ALL
        .into_iter()
        .filter(|c| c.regex().is_match(output))
        .collect()
}

/// `./src/app/page.tsx` style file headers that group diagnostics.
static FILE_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+\.[cm]?[jt]sx?$").unwrap());

/// Summary, hint and banner lines that carry no diagnostic of their own.
static SUMMARY_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:info\s+-|\S\s+\d+ problems?\b|\d+ problems?\b|ESLint found too many warnings)")
        .unwrap()
});

/// Output lines that no complaint category accounts for.
///
/// Blank lines, file headers and summary lines are not diagnostics and are
/// left out.
pub fn unmatched_lines(output: &str) -> Vec<&str> {
    output
        .lines()
        .map(str::trim_end)
        .filter(|line| {
            let trimmed = line.trim_start();
            !trimmed.is_empty()
                && !FILE_HEADER_REGEX.is_match(trimmed)
                && !SUMMARY_LINE_REGEX.is_match(trimmed)
                && !LintComplaint::ALL.iter().any(|c| c.regex().is_match(line))
        })
        .collect()
}

fn output_tail(output: &str) -> String {
    let lines: Vec<&str> = output.trim_end().lines().collect();
    let start = lines.len().saturating_sub(UNRECOGNIZED_TAIL_LINES);
    lines[start..].join("\n")
}

/// Turn one linter run into findings.
pub fn lint_findings(command: &str, result: Result<LintOutput>) -> Vec<Finding> {
    let output = match result {
        Ok(output) => output,
        Err(e) => {
            return vec![
                Finding::warning(
                    RuleId::Lint,
                    ".",
                    format!("Could not run linter `{}`: {:#}", command, e),
                )
                .with_suggestion("Install the linter or set \"lintCommand\" in .buildguardrc.json"),
            ];
        }
    };
    if output.success {
        return Vec::new();
    }

    let complaints = lint_complaints(&output.output);
    if complaints.is_empty() {
        let tail = output_tail(&output.output);
        let message = if tail.is_empty() {
            format!("`{}` failed without output", command)
        } else {
            format!("`{}` failed:\n{}", command, tail)
        };
        return vec![Finding::error(RuleId::Lint, ".", message)];
    }

    let mut findings: Vec<Finding> = complaints
        .into_iter()
        .map(|c| Finding::error(RuleId::Lint, ".", c.message()).with_suggestion(c.suggestion()))
        .collect();

    let rest = unmatched_lines(&output.output);
    if !rest.is_empty() {
        findings.push(Finding::error(
            RuleId::Lint,
            ".",
            format!(
                "`{}` also reported:\n{}",
                command,
                output_tail(&rest.join("\n"))
            ),
        ));
    }

    findings
}

pub fn check_lint_issues(ctx: &ProjectContext, runner: &dyn LintRunner) -> Vec<Finding> {
    let command = runner.describe();
    let result = runner.run(&ctx.root);

    if ctx.verbose
        && let Ok(output) = &result
        && !output.success
    {
        eprintln!("{} `{}` output:", "note:".bold().cyan(), command);
        eprintln!("{}", output.output.trim_end());
    }

    lint_findings(&command, result)
}
