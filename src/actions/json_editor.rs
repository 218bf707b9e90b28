use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

use crate::utils::write_atomic;

/// A JSON editor that fills in missing keys by their key paths.
///
/// Uses serde_json for parsing and serialization with key order preserved.
/// Output is always pretty-printed with 2-space indentation.
pub struct JsonEditor {
    file_path: PathBuf,
    value: Value,
    changed: bool,
}

impl JsonEditor {
    /// Open a JSON file for editing.
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let value: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON: {}", path.display()))?;
        Ok(Self {
            file_path: path.to_path_buf(),
            value,
            changed: false,
        })
    }

    /// Set `key_path` (e.g. `["compilerOptions", "strict"]`) to `default` if absent.
    ///
    /// Missing intermediate objects are created. Existing values are never
    /// overwritten. Returns true if the document changed.
    pub fn set_default(&mut self, key_path: &[String], default: Value) -> Result<bool> {
        let Some((last, parents)) = key_path.split_last() else {
            return Ok(false);
        };

        let mut current = &mut self.value;
        for part in parents {
            let Value::Object(map) = current else {
                bail!("Cannot set {}: parent is not an object", key_path.join("."));
            };
            current = map
                .entry(part.clone())
                .or_insert_with(|| Value::Object(Map::new()));
        }

        let Value::Object(map) = current else {
            bail!("Cannot set {}: parent is not an object", key_path.join("."));
        };
        if map.contains_key(last) {
            return Ok(false);
        }
        map.insert(last.clone(), default);
        self.changed = true;
        Ok(true)
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    pub fn content(&self) -> Result<String> {
        let mut content =
            serde_json::to_string_pretty(&self.value).with_context(|| "Failed to serialize JSON")?;
        content.push('\n');
        Ok(content)
    }

    /// Write the document back if anything changed.
    pub fn save(&self) -> Result<()> {
        if !self.changed {
            return Ok(());
        }
        write_atomic(&self.file_path, &self.content()?)
    }
}
