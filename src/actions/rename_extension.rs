use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use super::traits::{Apply, FixOutcome};
use crate::rules::jsx_in_ts::contains_jsx;

/// Rename a plain-code file to its JSX extension. Content is untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameExtension {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl Apply for RenameExtension {
    fn apply(&self) -> Result<FixOutcome> {
        if !self.from.exists() {
            return Ok(if self.to.exists() {
                FixOutcome::Unchanged
            } else {
                FixOutcome::Conflict(format!("{} no longer exists", self.from.display()))
            });
        }

        let content = fs::read_to_string(&self.from)
            .with_context(|| format!("Failed to read file: {}", self.from.display()))?;
        if !contains_jsx(&content) {
            return Ok(FixOutcome::Unchanged);
        }

        let to_name = self
            .to
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if self.to.exists() {
            return Ok(FixOutcome::Conflict(format!(
                "{} already exists; not overwriting",
                to_name
            )));
        }

        fs::rename(&self.from, &self.to).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                self.from.display(),
                self.to.display()
            )
        })?;

        Ok(FixOutcome::Applied(format!("Renamed to {}", to_name)))
    }
}
