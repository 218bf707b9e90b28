//! Target selectors shared by the source rules.
//!
//! Each selector looks only at the file name, never the content.

use std::{path::Path, sync::LazyLock};

use glob::Pattern;

pub const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx"];

/// Route handler file names recognized under an API root.
pub const ROUTE_FILE_NAMES: &[&str] = &["route.ts", "route.tsx", "route.js", "route.jsx"];

/// File names that are plain code by extension but never hold components.
static NON_COMPONENT_PATTERNS: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    ["*.d.ts", "*.test.*", "*.spec.*"]
        .iter()
        .map(|p| Pattern::new(p).unwrap())
        .collect()
});

static TOOLING_CONFIG_PATTERN: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::new("*.config.*").unwrap());

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("")
}

pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| SOURCE_EXTENSIONS.contains(&e))
}

/// `.ts` / `.js` files that could have been meant as `.tsx` / `.jsx`.
pub fn is_plain_code_file(path: &Path) -> bool {
    let name = file_name(path);
    let plain = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("ts") | Some("js")
    );
    plain && !NON_COMPONENT_PATTERNS.iter().any(|p| p.matches(name))
}

/// Tooling configuration such as `next.config.js` or `tailwind.config.ts`.
pub fn is_tooling_config(path: &Path) -> bool {
    TOOLING_CONFIG_PATTERN.matches(file_name(path))
}

pub fn is_route_handler(path: &Path) -> bool {
    ROUTE_FILE_NAMES.contains(&file_name(path))
}
