//! Fix action trait and the loop that applies findings' actions.

use anyhow::Result;
use enum_dispatch::enum_dispatch;

use super::{InsertDirective, JsonPatch, RenameExtension, ScaffoldFile};
use crate::issues::{Finding, FixConflict, FixRecord};

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixOutcome {
    /// The file changed. Holds a description of the change.
    Applied(String),
    /// The target already satisfies the rule.
    Unchanged,
    /// Applying would clobber something; nothing was touched.
    Conflict(String),
}

/// A file mutation that resolves one finding.
///
/// Implementations must be idempotent: they re-check the condition that
/// produced the finding and return [`FixOutcome::Unchanged`] when it no
/// longer holds. Every write replaces the whole file in one step.
#[enum_dispatch]
pub trait Apply {
    fn apply(&self) -> Result<FixOutcome>;
}

#[enum_dispatch(Apply)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixAction {
    ScaffoldFile,
    JsonPatch,
    InsertDirective,
    RenameExtension,
}

/// Everything one fix pass did.
#[derive(Debug, Default)]
pub struct FixSummary {
    pub applied: Vec<FixRecord>,
    pub conflicts: Vec<FixConflict>,
    /// Actions whose target was already fixed.
    pub unchanged: usize,
    /// Findings with no automatic fix.
    pub manual: usize,
}

impl FixSummary {
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty() && self.conflicts.is_empty()
    }
}

/// Apply every finding's action in order.
///
/// Failures are collected as conflicts; one bad file never stops the pass.
pub fn apply_fixes(findings: &[Finding]) -> FixSummary {
    let mut summary = FixSummary::default();

    for finding in findings {
        let Some(action) = &finding.action else {
            summary.manual += 1;
            continue;
        };

        let conflict = |reason: String| FixConflict {
            rule: finding.rule,
            file_path: finding.file_path.clone(),
            reason,
        };

        match action.apply() {
            Ok(FixOutcome::Applied(description)) => summary.applied.push(FixRecord {
                rule: finding.rule,
                file_path: finding.file_path.clone(),
                description,
            }),
            Ok(FixOutcome::Unchanged) => summary.unchanged += 1,
            Ok(FixOutcome::Conflict(reason)) => summary.conflicts.push(conflict(reason)),
            Err(e) => summary.conflicts.push(conflict(format!("{:#}", e))),
        }
    }

    summary
}
