//! Environment variables read in code but not listed in `.env.example`.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use crate::{
    issues::{Finding, RuleId},
    project::{ENV_EXAMPLE, ProjectContext},
};

static ENV_REFERENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\bprocess\.env(?:\.([A-Z_][A-Z0-9_]*)\b|\[\s*['"]([A-Z_][A-Z0-9_]*)['"]\s*\])"#,
    )
    .unwrap()
});

/// Names declared in an example-environment file.
///
/// One name per non-empty, non-comment line: the text before the first `=`.
pub fn parse_declared_env_vars(content: &str) -> HashSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let name = line.split('=').next()?.trim();
            let name = name.strip_prefix("export ").unwrap_or(name).trim();
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect()
}

/// Variable names referenced through `process.env`, deduplicated, in order of first use.
pub fn referenced_env_vars(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    ENV_REFERENCE_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

pub fn undeclared_env_vars(
    content: &str,
    declared: &HashSet<String>,
    public_prefix: &str,
) -> Vec<String> {
    referenced_env_vars(content)
        .into_iter()
        .filter(|name| !declared.contains(name))
        .filter(|name| public_prefix.is_empty() || !name.starts_with(public_prefix))
        .collect()
}

pub fn check_env_var_issues(ctx: &ProjectContext) -> Vec<Finding> {
    let env_example = ctx.root.join(ENV_EXAMPLE);
    if !env_example.exists() {
        return vec![
            Finding::warning(
                RuleId::EnvVarUndeclared,
                ENV_EXAMPLE,
                "No .env.example found; environment variable references were not checked",
            )
            .with_suggestion("Create .env.example listing every variable the app reads"),
        ];
    }
    let Some(example) = ctx.read(&env_example) else {
        return Vec::new();
    };
    let declared = parse_declared_env_vars(&example);
    let prefix = &ctx.config.public_env_prefix;

    let mut findings = Vec::new();
    for path in ctx.source_files() {
        let Some(content) = ctx.read(path) else {
            continue;
        };
        for name in undeclared_env_vars(&content, &declared, prefix) {
            findings.push(
                Finding::warning(
                    RuleId::EnvVarUndeclared,
                    ctx.relative(path),
                    format!("process.env.{} is not declared in {}", name, ENV_EXAMPLE),
                )
                .with_suggestion(format!("Add `{}=` to {}", name, ENV_EXAMPLE)),
            );
        }
    }

    findings
}
