//! Finding types produced by rule evaluation.
//!
//! A [`Finding`] is self-contained: it carries everything the reporter needs
//! to display it and, when the rule knows how to correct the problem, the
//! [`FixAction`] the fixer applies.

use crate::actions::FixAction;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Rule identifier for each finding type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleId {
    PackageJsonMissing,
    MalformedConfig,
    TsconfigMissing,
    TsconfigOption,
    ScriptMissing,
    TypesMissing,
    NextEnvMissing,
    ConfigBarrelMissing,
    JsxInTs,
    DynamicRoute,
    MissingReactImport,
    EnvVarUndeclared,
    Lint,
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let id = match self {
            RuleId::PackageJsonMissing => "package-json-missing",
            RuleId::MalformedConfig => "malformed-config",
            RuleId::TsconfigMissing => "tsconfig-missing",
            RuleId::TsconfigOption => "tsconfig-option",
            RuleId::ScriptMissing => "script-missing",
            RuleId::TypesMissing => "types-missing",
            RuleId::NextEnvMissing => "next-env-missing",
            RuleId::ConfigBarrelMissing => "config-barrel-missing",
            RuleId::JsxInTs => "jsx-in-ts",
            RuleId::DynamicRoute => "dynamic-route",
            RuleId::MissingReactImport => "missing-react-import",
            RuleId::EnvVarUndeclared => "env-var-undeclared",
            RuleId::Lint => "lint",
        };
        write!(f, "{}", id)
    }
}

// ============================================================
// Finding
// ============================================================

/// One rule violation attached to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub rule: RuleId,
    /// Path relative to the project root, `/`-separated.
    pub file_path: String,
    pub severity: Severity,
    pub message: String,
    /// Human-readable instruction for resolving the finding.
    pub suggestion: Option<String>,
    /// Automatic correction applied by `fix`.
    pub action: Option<FixAction>,
}

impl Finding {
    pub fn error(rule: RuleId, file_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Error, file_path.into(), message.into())
    }

    pub fn warning(rule: RuleId, file_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Warning, file_path.into(), message.into())
    }

    fn new(rule: RuleId, severity: Severity, file_path: String, message: String) -> Self {
        Self {
            rule,
            file_path,
            severity,
            message,
            suggestion: None,
            action: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_action(mut self, action: impl Into<FixAction>) -> Self {
        self.action = Some(action.into());
        self
    }
}

// ============================================================
// Fix results
// ============================================================

/// A change the fixer actually made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixRecord {
    pub rule: RuleId,
    pub file_path: String,
    pub description: String,
}

/// A fix that could not be applied safely. The target is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixConflict {
    pub rule: RuleId,
    pub file_path: String,
    pub reason: String,
}
