//! `tsconfig.json` presence and the compiler options Next.js builds rely on.

use serde_json::{Value, json};

use crate::{
    actions::JsonPatch,
    issues::{Finding, RuleId},
    project::{JsonFile, ProjectContext, TSCONFIG_JSON},
};

/// Compiler options checked under `compilerOptions`, with the value the fixer writes.
pub fn required_compiler_options() -> [(&'static str, Value); 3] {
    [
        ("jsx", json!("preserve")),
        ("strict", json!(true)),
        ("moduleResolution", json!("bundler")),
    ]
}

/// Names of required compiler options absent from a parsed tsconfig.
pub fn missing_compiler_options(tsconfig: &Value) -> Vec<(&'static str, Value)> {
    let options = tsconfig.get("compilerOptions");
    required_compiler_options()
        .into_iter()
        .filter(|(name, _)| options.and_then(|o| o.get(name)).is_none())
        .collect()
}

pub fn check_tsconfig_issues(ctx: &ProjectContext) -> Vec<Finding> {
    let path = ctx.root.join(TSCONFIG_JSON);

    match ctx.tsconfig() {
        JsonFile::Missing => vec![
            Finding::error(
                RuleId::TsconfigMissing,
                TSCONFIG_JSON,
                "tsconfig.json not found",
            )
            .with_suggestion("Run `npx tsc --init` to create one"),
        ],
        JsonFile::Malformed(_) => Vec::new(),
        JsonFile::Parsed(tsconfig) => missing_compiler_options(tsconfig)
            .into_iter()
            .map(|(name, default)| {
                Finding::warning(
                    RuleId::TsconfigOption,
                    TSCONFIG_JSON,
                    format!("compilerOptions.{} is not set", name),
                )
                .with_suggestion(format!("Set \"{}\": {}", name, default))
                .with_action(JsonPatch {
                    path: path.clone(),
                    key_path: vec!["compilerOptions".to_string(), name.to_string()],
                    value: default,
                })
            })
            .collect(),
    }
}
