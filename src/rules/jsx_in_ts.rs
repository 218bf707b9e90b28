//! JSX in plain-code files.
//!
//! Next.js only compiles JSX in `.tsx` / `.jsx` files. A component written in
//! a `.ts` file fails the build with a syntax error far from the real cause.

use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

use regex::Regex;

use crate::{
    actions::RenameExtension,
    issues::{Finding, RuleId},
    project::ProjectContext,
    rules::helpers::is_plain_code_file,
};

/// Heuristic JSX markers. Any single match is enough.
static JSX_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // <Component ...> or <Component/>, not preceded by an identifier (generics)
        r"(?m)(?:^|[\s(=?:,{}&|])<[A-Z][A-Za-z0-9_.]*(?:\s|/?>)",
        // </Component>
        r"</[A-Z][A-Za-z0-9_.]*\s*>",
        // <> and </>
        r"<>|</>",
        // return <div / return (<div
        r"\breturn\s*\(?\s*<[A-Za-z]",
        // => <div / => (<div
        r"=>\s*\(?\s*<[A-Za-z]",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Type parameter list of a generic arrow function: `<T>(`, `<T extends X>(`, `<K, V>(`.
static GENERIC_PARAMS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<[A-Z]\w*(?:\s+extends\b[^>]*)?(?:\s*,\s*[A-Z]\w*[^>]*)*,?>\s*\(").unwrap()
});

pub fn contains_jsx(content: &str) -> bool {
    let content = GENERIC_PARAMS_REGEX.replace_all(content, "(");
    JSX_PATTERNS.iter().any(|re| re.is_match(&content))
}

/// `Button.ts` -> `Button.tsx`, `util.js` -> `util.jsx`.
pub fn markup_path(path: &Path) -> Option<PathBuf> {
    let ext = match path.extension()?.to_str()? {
        "ts" => "tsx",
        "js" => "jsx",
        _ => return None,
    };
    Some(path.with_extension(ext))
}

pub fn check_jsx_in_ts_issues(ctx: &ProjectContext) -> Vec<Finding> {
    let mut findings = Vec::new();

    for path in ctx.source_files() {
        if !is_plain_code_file(path) {
            continue;
        }
        let Some(content) = ctx.read(path) else {
            continue;
        };
        if !contains_jsx(&content) {
            continue;
        }
        let Some(target) = markup_path(path) else {
            continue;
        };

        let rel = ctx.relative(path);
        let target_rel = ctx.relative(&target);
        findings.push(
            Finding::error(
                RuleId::JsxInTs,
                rel.clone(),
                "Contains JSX but does not have a JSX file extension",
            )
            .with_suggestion(format!("Rename {} to {}", rel, target_rel))
            .with_action(RenameExtension {
                from: path.clone(),
                to: target,
            }),
        );
    }

    findings
}
