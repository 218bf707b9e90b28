//! Presence and well-formedness of the root project files.
//!
//! Rules that read `package.json` or `tsconfig.json` skip silently when the
//! file is missing or malformed; this rule is where that gets reported.

use crate::{
    issues::{Finding, RuleId},
    project::{JsonFile, PACKAGE_JSON, ProjectContext, TSCONFIG_JSON},
};

pub fn check_project_file_issues(ctx: &ProjectContext) -> Vec<Finding> {
    let mut findings = Vec::new();

    match ctx.package_json() {
        JsonFile::Missing => findings.push(
            Finding::error(
                RuleId::PackageJsonMissing,
                PACKAGE_JSON,
                "package.json not found at the project root",
            )
            .with_suggestion("Run `npm init -y` or point --root at the project directory"),
        ),
        JsonFile::Malformed(error) => findings.push(malformed(PACKAGE_JSON, error)),
        JsonFile::Parsed(_) => {}
    }

    // A missing tsconfig.json is reported by the tsconfig rule.
    if let JsonFile::Malformed(error) = ctx.tsconfig() {
        findings.push(malformed(TSCONFIG_JSON, error));
    }

    findings
}

fn malformed(file: &str, error: &str) -> Finding {
    Finding::error(
        RuleId::MalformedConfig,
        file,
        format!("Failed to parse {}: {}", file, error),
    )
    .with_suggestion(format!("Fix the JSON syntax in {}", file))
}
