//! Locate the end of a module's leading import block and splice lines after it.
//!
//! The scan classifies each line instead of searching for the last `import`
//! anywhere in the file, so dynamic `import()` calls and imports buried
//! after code never move the insertion point.

use std::sync::LazyLock;

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    /// `'use client'`, `"use server"` and similar prologue strings.
    Directive,
    /// First line of an `import` statement.
    Import,
    Code,
}

static DIRECTIVE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^['"]use [a-z ]+['"];?$"#).unwrap());

static IMPORT_START_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^import(?:\s|\{|\*|['"])"#).unwrap());

static FROM_CLAUSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bfrom\s*['"][^'"]+['"]"#).unwrap());

static SIDE_EFFECT_IMPORT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^import\s*['"][^'"]+['"]"#).unwrap());

pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        LineKind::Blank
    } else if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
        LineKind::Comment
    } else if DIRECTIVE_REGEX.is_match(trimmed) {
        LineKind::Directive
    } else if IMPORT_START_REGEX.is_match(trimmed) {
        LineKind::Import
    } else {
        LineKind::Code
    }
}

/// True if this line finishes an import statement.
fn ends_import(trimmed: &str) -> bool {
    trimmed.ends_with(';')
        || FROM_CLAUSE_REGEX.is_match(trimmed)
        || SIDE_EFFECT_IMPORT_REGEX.is_match(trimmed)
}

/// Index of the last line of the leading import block, if there is one.
///
/// Blank lines, comments and directive prologues may appear before and
/// between imports. The first line of any other kind ends the scan.
pub fn import_block_end(lines: &[&str]) -> Option<usize> {
    let mut last_import_end = None;
    let mut in_import = false;
    let mut in_block_comment = false;

    for (i, line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        if in_block_comment {
            if trimmed.contains("*/") {
                in_block_comment = false;
            }
            continue;
        }
        if in_import {
            if ends_import(trimmed) {
                in_import = false;
                last_import_end = Some(i);
            }
            continue;
        }

        match classify_line(line) {
            LineKind::Blank | LineKind::Directive => {}
            LineKind::Comment => {
                if trimmed.starts_with("/*") && !trimmed.contains("*/") {
                    in_block_comment = true;
                }
            }
            LineKind::Import => {
                if ends_import(trimmed) {
                    last_import_end = Some(i);
                } else {
                    in_import = true;
                }
            }
            LineKind::Code => break,
        }
    }

    last_import_end
}

/// Insert `new_lines` after the leading import block, separated by blank lines.
///
/// Without imports the lines go to the top of the file.
pub fn insert_after_imports(content: &str, new_lines: &[&str]) -> String {
    let source_lines: Vec<&str> = content.split_inclusive('\n').collect();
    let bare_lines: Vec<&str> = source_lines
        .iter()
        .map(|l| l.trim_end_matches(['\n', '\r']))
        .collect();
    let block: String = new_lines.iter().map(|l| format!("{}\n", l)).collect();

    let (head, rest) = match import_block_end(&bare_lines) {
        Some(end) => (&source_lines[..=end], &source_lines[end + 1..]),
        None => (&source_lines[..0], &source_lines[..]),
    };

    let mut out = head.concat();
    if !out.is_empty() {
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }
    out.push_str(&block);
    if rest
        .first()
        .is_some_and(|l| classify_line(l) != LineKind::Blank)
    {
        out.push('\n');
    }
    out.push_str(&rest.concat());
    out
}
