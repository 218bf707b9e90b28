//! Runtime packages declared without their TypeScript definitions.

use serde_json::Value;

use crate::{
    issues::{Finding, RuleId},
    project::{PACKAGE_JSON, ProjectContext, has_dependency},
};

/// (runtime package, type-definition package)
pub const TYPE_COMPANIONS: &[(&str, &str)] = &[
    ("react", "@types/react"),
    ("react-dom", "@types/react-dom"),
];

pub fn missing_type_packages(package: &Value) -> Vec<(&'static str, &'static str)> {
    TYPE_COMPANIONS
        .iter()
        .copied()
        .filter(|(runtime, types)| {
            has_dependency(package, runtime) && !has_dependency(package, types)
        })
        .collect()
}

pub fn check_types_issues(ctx: &ProjectContext) -> Vec<Finding> {
    let Some(package) = ctx.package_json().parsed() else {
        return Vec::new();
    };

    missing_type_packages(package)
        .into_iter()
        .map(|(runtime, types)| {
            Finding::warning(
                RuleId::TypesMissing,
                PACKAGE_JSON,
                format!("{} is a dependency but {} is not", runtime, types),
            )
            .with_suggestion(format!("Run `npm install --save-dev {}`", types))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::rules::types::*;
    use serde_json::json;

    #[test]
    fn test_missing_type_packages() {
        let package = json!({"dependencies": {"react": "19.0.0", "react-dom": "19.0.0"}});
        assert_eq!(
            missing_type_packages(&package),
            vec![("react", "@types/react"), ("react-dom", "@types/react-dom")]
        );
    }

    #[test]
    fn test_dev_dependencies_count() {
        let package = json!({
            "dependencies": {"react": "19.0.0", "react-dom": "19.0.0"},
            "devDependencies": {"@types/react": "19.0.0", "@types/react-dom": "19.0.0"}
        });
        assert!(missing_type_packages(&package).is_empty());
    }

    #[test]
    fn test_no_runtime_no_warning() {
        let package = json!({"dependencies": {"next": "15.0.0"}});
        assert!(missing_type_packages(&package).is_empty());
    }
}
