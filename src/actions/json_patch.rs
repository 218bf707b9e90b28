use std::path::PathBuf;

use anyhow::Result;
use serde_json::Value;

use super::{
    json_editor::JsonEditor,
    traits::{Apply, FixOutcome},
};

/// Set `key_path` to `value` in a JSON file, only if the key is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPatch {
    pub path: PathBuf,
    pub key_path: Vec<String>,
    pub value: Value,
}

impl Apply for JsonPatch {
    fn apply(&self) -> Result<FixOutcome> {
        let mut editor = JsonEditor::open(&self.path)?;
        if !editor.set_default(&self.key_path, self.value.clone())? {
            return Ok(FixOutcome::Unchanged);
        }
        editor.save()?;

        Ok(FixOutcome::Applied(format!(
            "Set {} to {}",
            self.key_path.join("."),
            self.value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_patch_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("package.json");
        fs::write(&path, r#"{"scripts": {"build": "next build"}}"#).unwrap();

        let patch = JsonPatch {
            path: path.clone(),
            key_path: vec!["scripts".to_string(), "typecheck".to_string()],
            value: json!("tsc --noEmit"),
        };

        assert_eq!(
            patch.apply().unwrap(),
            FixOutcome::Applied("Set scripts.typecheck to \"tsc --noEmit\"".to_string())
        );
        let first = fs::read_to_string(&path).unwrap();

        assert_eq!(patch.apply().unwrap(), FixOutcome::Unchanged);
        assert_eq!(fs::read_to_string(&path).unwrap(), first);
    }

    #[test]
    fn test_patch_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let patch = JsonPatch {
            path: dir.path().join("tsconfig.json"),
            key_path: vec!["compilerOptions".to_string(), "strict".to_string()],
            value: json!(true),
        };

        assert!(patch.apply().is_err());
    }
}
