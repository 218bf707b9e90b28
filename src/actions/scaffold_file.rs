use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use super::traits::{Apply, FixOutcome};
use crate::utils::write_atomic;

/// Write `contents` to `path` unless the file already exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldFile {
    pub path: PathBuf,
    pub contents: String,
}

impl Apply for ScaffoldFile {
    fn apply(&self) -> Result<FixOutcome> {
        if self.path.exists() {
            return Ok(FixOutcome::Unchanged);
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        write_atomic(&self.path, &self.contents)?;

        Ok(FixOutcome::Applied("Created file".to_string()))
    }
}
