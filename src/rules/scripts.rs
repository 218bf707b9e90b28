//! npm scripts every Next.js project is expected to define.

use serde_json::{Value, json};

use crate::{
    actions::JsonPatch,
    issues::{Finding, RuleId},
    project::{PACKAGE_JSON, ProjectContext},
};

/// A required script: accepted names (first is canonical) and the command the fixer adds.
pub struct RequiredScript {
    pub names: &'static [&'static str],
    pub command: &'static str,
}

pub const REQUIRED_SCRIPTS: &[RequiredScript] = &[
    RequiredScript {
        names: &["dev"],
        command: "next dev",
    },
    RequiredScript {
        names: &["build"],
        command: "next build",
    },
    RequiredScript {
        names: &["start"],
        command: "next start",
    },
    RequiredScript {
        names: &["lint"],
        command: "next lint",
    },
    RequiredScript {
        names: &["typecheck", "type-check"],
        command: "tsc --noEmit",
    },
];

pub fn missing_scripts(package: &Value) -> Vec<&'static RequiredScript> {
    let scripts = package.get("scripts");
    REQUIRED_SCRIPTS
        .iter()
        .filter(|required| {
            !required
                .names
                .iter()
                .any(|name| scripts.and_then(|s| s.get(name)).is_some())
        })
        .collect()
}

fn describe(required: &RequiredScript) -> String {
    match required.names {
        [name] => format!("\"{}\"", name),
        [name, aliases @ ..] => {
            let aliases: Vec<String> = aliases.iter().map(|a| format!("\"{}\"", a)).collect();
            format!("\"{}\" (or {})", name, aliases.join(", "))
        }
        [] => String::new(),
    }
}

pub fn check_script_issues(ctx: &ProjectContext) -> Vec<Finding> {
    let Some(package) = ctx.package_json().parsed() else {
        return Vec::new();
    };
    let path = ctx.root.join(PACKAGE_JSON);

    missing_scripts(package)
        .into_iter()
        .map(|required| {
            let name = required.names[0];
            Finding::warning(
                RuleId::ScriptMissing,
                PACKAGE_JSON,
                format!("Missing {} script", describe(required)),
            )
            .with_suggestion(format!(
                "Add \"{}\": \"{}\" to scripts",
                name, required.command
            ))
            .with_action(JsonPatch {
                path: path.clone(),
                key_path: vec!["scripts".to_string(), name.to_string()],
                value: json!(required.command),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::issues::Severity;
    use crate::rules::scripts::*;
    use std::fs;
    use tempfile::tempdir;

    fn missing_names(package: Value) -> Vec<&'static str> {
        missing_scripts(&package)
            .into_iter()
            .map(|s| s.names[0])
            .collect()
    }

    #[test]
    fn test_missing_scripts() {
        let package = json!({"scripts": {"build": "next build", "start": "next start"}});
        assert_eq!(missing_names(package), vec!["dev", "lint", "typecheck"]);
    }

    #[test]
    fn test_typecheck_alias_satisfies() {
        let package = json!({"scripts": {
            "dev": "next dev", "build": "next build", "start": "next start",
            "lint": "next lint", "type-check": "tsc --noEmit"
        }});
        assert!(missing_names(package).is_empty());
    }

    #[test]
    fn test_no_scripts_table() {
        assert_eq!(missing_names(json!({"name": "app"})).len(), 5);
    }

    #[test]
    fn test_check_reports_warnings_only() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(PACKAGE_JSON),
            r#"{"scripts": {"build": "next build", "start": "next start"}}"#,
        )
        .unwrap();
        let ctx = ProjectContext::with_config(dir.path().to_path_buf(), Config::default(), false);

        let findings = check_script_issues(&ctx);

        let messages: Vec<&str> = findings.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Missing \"dev\" script",
                "Missing \"lint\" script",
                "Missing \"typecheck\" (or \"type-check\") script",
            ]
        );
        assert!(findings.iter().all(|f| f.severity == Severity::Warning));
    }

    #[test]
    fn test_check_skips_without_package_json() {
        let dir = tempdir().unwrap();
        let ctx = ProjectContext::with_config(dir.path().to_path_buf(), Config::default(), false);
        assert!(check_script_issues(&ctx).is_empty());
    }
}
