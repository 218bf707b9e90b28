//! Common utility functions shared across the codebase.

use std::{fs, path::Path};

use anyhow::{Context, Result, anyhow};

/// Replace the contents of `path` in one step.
///
/// The new contents are written to a hidden sibling file which is then renamed
/// over the target, so readers never observe a partially written file.
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid file path: {}", path.display()))?;
    let tmp_path = path.with_file_name(format!(
        ".{}.buildguard-tmp",
        file_name.to_string_lossy()
    ));

    fs::write(&tmp_path, content)
        .with_context(|| format!("Failed to write file: {}", tmp_path.display()))?;

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e).with_context(|| format!("Failed to write file: {}", path.display()));
    }

    Ok(())
}

/// Render `path` relative to `root` with `/` separators.
///
/// Paths outside `root` are returned unchanged.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use buildguard::utils::relative_path;
///
/// assert_eq!(relative_path(Path::new("/p"), Path::new("/p/src/a.ts")), "src/a.ts");
/// assert_eq!(relative_path(Path::new("/p"), Path::new("/q/b.ts")), "/q/b.ts");
/// ```
pub fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let rel = rel.strip_prefix(".").unwrap_or(rel);
    rel.to_string_lossy().replace('\\', "/")
}
