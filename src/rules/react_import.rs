//! React symbols or JSX tags used without importing React.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    issues::{Finding, RuleId},
    project::ProjectContext,
    rules::{helpers::is_tooling_config, jsx_in_ts::contains_jsx},
};

static REACT_SYMBOL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\bReact\.[A-Za-z]+|\buse(?:State|Effect|LayoutEffect|Context|Ref|Memo|Callback|Reducer|Transition|Id)\s*\(",
    )
    .unwrap()
});

static REACT_IMPORT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?m)^\s*import\b[^;]*?\bfrom\s*['"]react['"]|\brequire\(\s*['"]react['"]\s*\)"#,
    )
    .unwrap()
});

pub fn references_react(content: &str) -> bool {
    REACT_SYMBOL_REGEX.is_match(content) || contains_jsx(content)
}

pub fn imports_react(content: &str) -> bool {
    REACT_IMPORT_REGEX.is_match(content)
}

pub fn check_react_import_issues(ctx: &ProjectContext) -> Vec<Finding> {
    ctx.source_files()
        .iter()
        .filter(|path| !is_tooling_config(path))
        .filter_map(|path| {
            let content = ctx.read(path)?;
            (references_react(&content) && !imports_react(&content)).then(|| {
                Finding::warning(
                    RuleId::MissingReactImport,
                    ctx.relative(path),
                    "Uses React APIs or JSX without importing from 'react'",
                )
            })
        })
        .collect()
}
