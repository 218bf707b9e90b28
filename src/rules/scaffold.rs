//! Generated files a Next.js TypeScript project expects to exist.

use std::path::Path;

use crate::{
    actions::ScaffoldFile,
    issues::{Finding, RuleId},
    project::{NEXT_ENV_DTS, ProjectContext, has_dependency},
    rules::helpers::SOURCE_EXTENSIONS,
};

pub const NEXT_ENV_TEMPLATE: &str = r#"/// <reference types="next" />
/// <reference types="next/image-types/global" />

// NOTE: This file should not be edited
// see https://nextjs.org/docs/app/api-reference/config/typescript for more information.
"#;

/// Helper modules the configuration barrel re-exports, in export order.
pub const CONFIG_MODULES: &[&str] = &["env", "features"];

pub const CONFIG_DIR: &str = "config";

fn has_module(dir: &Path, name: &str) -> bool {
    SOURCE_EXTENSIONS
        .iter()
        .any(|ext| dir.join(format!("{}.{}", name, ext)).is_file())
}

fn has_index(dir: &Path) -> bool {
    has_module(dir, "index")
}

/// Barrel source for `dir`. Re-exports only the helper modules that exist; `None` if there are none.
pub fn config_barrel_template(dir: &Path) -> Option<String> {
    let exports: Vec<String> = CONFIG_MODULES
        .iter()
        .filter(|name| has_module(dir, name))
        .map(|name| format!("export * from './{}';\n", name))
        .collect();
    (!exports.is_empty()).then(|| exports.concat())
}

pub fn check_scaffold_issues(ctx: &ProjectContext) -> Vec<Finding> {
    let mut findings = Vec::new();

    let uses_next = ctx
        .package_json()
        .parsed()
        .is_some_and(|package| has_dependency(package, "next"));
    let next_env = ctx.root.join(NEXT_ENV_DTS);
    if uses_next && !next_env.exists() {
        findings.push(
            Finding::warning(
                RuleId::NextEnvMissing,
                NEXT_ENV_DTS,
                "next-env.d.ts not found; Next.js type declarations are not loaded",
            )
            .with_suggestion("Run `next build` once or `buildguard fix` to create it")
            .with_action(ScaffoldFile {
                path: next_env,
                contents: NEXT_ENV_TEMPLATE.to_string(),
            }),
        );
    }

    let config_dir = ctx.root.join(&ctx.config.source_root).join(CONFIG_DIR);
    if config_dir.is_dir()
        && !has_index(&config_dir)
        && let Some(contents) = config_barrel_template(&config_dir)
    {
        let index = config_dir.join("index.ts");
        findings.push(
            Finding::warning(
                RuleId::ConfigBarrelMissing,
                ctx.relative(&index),
                "Configuration helpers have no index.ts barrel",
            )
            .with_action(ScaffoldFile {
                path: index,
                contents,
            }),
        );
    }

    findings
}
