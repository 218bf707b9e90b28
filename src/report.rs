//! Validation and fix reports.
//!
//! Rendering goes through a [`Style`] so this module has no terminal
//! dependency; the CLI supplies a colored style, tests use [`Plain`].

use std::io::{self, Write};

use crate::{
    actions::FixSummary,
    issues::{Finding, Severity},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Warning mark for consistent output formatting.
pub const WARNING_MARK: &str = "!";

/// How report text is decorated.
pub trait Style {
    fn error(&self, text: &str) -> String;
    fn warning(&self, text: &str) -> String;
    fn success(&self, text: &str) -> String;
    fn header(&self, text: &str) -> String;
    /// De-emphasized text such as rule ids.
    fn dim(&self, text: &str) -> String;
}

/// Undecorated output.
pub struct Plain;

impl Style for Plain {
    fn error(&self, text: &str) -> String {
        text.to_string()
    }

    fn warning(&self, text: &str) -> String {
        text.to_string()
    }

    fn success(&self, text: &str) -> String {
        text.to_string()
    }

    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn dim(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Findings from one validation pass, split by severity in discovery order.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<Finding>,
    pub warnings: Vec<Finding>,
    /// Suggestions attached to errors, in the same order.
    pub fixes: Vec<String>,
}

impl ValidationReport {
    pub fn from_findings(findings: impl IntoIterator<Item = Finding>) -> Self {
        let mut report = Self::default();
        for finding in findings {
            report.record(finding);
        }
        report
    }

    pub fn record(&mut self, finding: Finding) {
        match finding.severity {
            Severity::Error => {
                if let Some(suggestion) = &finding.suggestion {
                    self.fixes.push(suggestion.clone());
                }
                self.errors.push(finding);
            }
            Severity::Warning => self.warnings.push(finding),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

fn write_finding<W: Write>(
    writer: &mut W,
    style: &dyn Style,
    mark: &str,
    finding: &Finding,
) -> io::Result<()> {
    let mut lines = finding.message.lines();
    let first = lines.next().unwrap_or_default();
    writeln!(
        writer,
        "  {} {} {}: {}",
        mark,
        style.dim(&format!("[{}]", finding.rule)),
        finding.file_path,
        first
    )?;
    for line in lines {
        writeln!(writer, "      {}", line)?;
    }
    if let Some(suggestion) = &finding.suggestion {
        writeln!(writer, "    {} {}", style.header("fix:"), suggestion)?;
    }
    Ok(())
}

/// Render a validation report.
///
/// Order: header, errors, warnings, closing banner.
pub fn write_validation_report<W: Write>(
    report: &ValidationReport,
    style: &dyn Style,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, "{}", style.header("Build validation"))?;
    writeln!(writer)?;

    writeln!(
        writer,
        "{}",
        style.error(&format!("Errors ({}):", report.errors.len()))
    )?;
    let error_mark = style.error(FAILURE_MARK);
    for finding in &report.errors {
        write_finding(writer, style, &error_mark, finding)?;
    }
    writeln!(writer)?;

    writeln!(
        writer,
        "{}",
        style.warning(&format!("Warnings ({}):", report.warnings.len()))
    )?;
    let warning_mark = style.warning(WARNING_MARK);
    for finding in &report.warnings {
        write_finding(writer, style, &warning_mark, finding)?;
    }
    writeln!(writer)?;

    let errors = report.errors.len();
    let warnings = report.warnings.len();
    let banner = if errors > 0 {
        style.error(&format!(
            "{} Validation failed: {}, {}",
            FAILURE_MARK,
            plural(errors, "error"),
            plural(warnings, "warning")
        ))
    } else if warnings > 0 {
        style.warning(&format!(
            "{} Validation passed with {}",
            SUCCESS_MARK,
            plural(warnings, "warning")
        ))
    } else {
        style.success(&format!("{} Validation passed", SUCCESS_MARK))
    };
    writeln!(writer, "{}", banner)
}

/// Render the outcome of a fix pass.
pub fn write_fix_summary<W: Write>(
    summary: &FixSummary,
    style: &dyn Style,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, "{}", style.header("Build fixes"))?;
    writeln!(writer)?;

    if summary.is_empty() {
        let text = if summary.manual == 0 {
            format!("{} No fixes applied - no issues found", SUCCESS_MARK)
        } else {
            format!("{} No fixes applied", SUCCESS_MARK)
        };
        writeln!(writer, "{}", style.success(&text))?;
    }

    if !summary.applied.is_empty() {
        writeln!(
            writer,
            "{}",
            style.success(&format!("Applied {}:", plural(summary.applied.len(), "fix")))
        )?;
        let mark = style.success(SUCCESS_MARK);
        for record in &summary.applied {
            writeln!(
                writer,
                "  {} {} {}: {}",
                mark,
                style.dim(&format!("[{}]", record.rule)),
                record.file_path,
                record.description
            )?;
        }
        writeln!(writer)?;
    }

    if !summary.conflicts.is_empty() {
        writeln!(
            writer,
            "{}",
            style.error(&format!(
                "Could not apply {}:",
                plural(summary.conflicts.len(), "fix")
            ))
        )?;
        let mark = style.error(FAILURE_MARK);
        for conflict in &summary.conflicts {
            writeln!(
                writer,
                "  {} {} {}: {}",
                mark,
                style.dim(&format!("[{}]", conflict.rule)),
                conflict.file_path,
                conflict.reason
            )?;
        }
        writeln!(writer)?;
    }

    if summary.manual > 0 {
        writeln!(
            writer,
            "{}",
            style.warning(&format!(
                "{} without an automatic fix; run `buildguard validate` for details",
                plural(summary.manual, "issue")
            ))
        )?;
    }

    Ok(())
}
