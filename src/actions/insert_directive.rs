use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use super::{
    insert_lines::insert_after_imports,
    traits::{Apply, FixOutcome},
};
use crate::{
    rules::{
        dynamic_route::{FORCE_DYNAMIC_DIRECTIVE, declares_dynamic_export, needs_force_dynamic},
        jsx_in_ts::markup_path,
    },
    utils::write_atomic,
};

/// Insert `export const dynamic = 'force-dynamic'` into a route handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertDirective {
    pub path: PathBuf,
}

impl InsertDirective {
    /// The route file as it is now. An earlier fix in the same pass may have
    /// renamed `route.ts` to `route.tsx`.
    fn current_path(&self) -> PathBuf {
        if !self.path.exists()
            && let Some(renamed) = markup_path(&self.path)
            && renamed.exists()
        {
            return renamed;
        }
        self.path.clone()
    }
}

impl Apply for InsertDirective {
    fn apply(&self) -> Result<FixOutcome> {
        let path = self.current_path();
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        if !needs_force_dynamic(&content) {
            return Ok(FixOutcome::Unchanged);
        }
        if declares_dynamic_export(&content) {
            return Ok(FixOutcome::Conflict(
                "already exports a different `dynamic` value; change it to 'force-dynamic' by hand"
                    .to_string(),
            ));
        }

        let updated = insert_after_imports(&content, &[FORCE_DYNAMIC_DIRECTIVE]);
        write_atomic(&path, &updated)?;

        Ok(FixOutcome::Applied(format!(
            "Inserted `{}`",
            FORCE_DYNAMIC_DIRECTIVE
        )))
    }
}
