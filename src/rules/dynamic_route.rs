//! Route handlers that do request-time work without opting out of static rendering.
//!
//! During `next build` a GET handler without dynamic inputs is pre-rendered.
//! Handlers that call out to the network, the filesystem, a database, or read
//! environment variables then fail or bake stale data into the build. Declaring
//! `export const dynamic = 'force-dynamic'` makes them run per request.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    actions::InsertDirective,
    issues::{Finding, RuleId},
    project::ProjectContext,
};

pub const FORCE_DYNAMIC_DIRECTIVE: &str = "export const dynamic = 'force-dynamic';";

static RUNTIME_OPERATIONS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("fetch", r"\bfetch\s*\("),
        (
            "filesystem access",
            r#"(?:\bfrom\s*|\brequire\(\s*|\bimport\(\s*)['"](?:node:)?fs(?:/promises)?['"]"#,
        ),
        (
            "a database client",
            r"\b(?:prisma|PrismaClient|drizzle|mongoose|supabase|knex|sequelize|kysely)\b|\bdb\.",
        ),
        ("process.env", r"\bprocess\.env\b"),
    ]
    .into_iter()
    .map(|(name, pattern)| (name, Regex::new(pattern).unwrap()))
    .collect()
});

static FORCE_DYNAMIC_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*export\s+const\s+dynamic\s*=\s*['"]force-dynamic['"]"#).unwrap()
});

static DYNAMIC_EXPORT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*export\s+const\s+dynamic\s*=").unwrap());

/// Names of the request-time operations found in `content`, in a fixed order.
pub fn runtime_operations(content: &str) -> Vec<&'static str> {
    RUNTIME_OPERATIONS
        .iter()
        .filter(|(_, re)| re.is_match(content))
        .map(|(name, _)| *name)
        .collect()
}

pub fn declares_force_dynamic(content: &str) -> bool {
    FORCE_DYNAMIC_REGEX.is_match(content)
}

/// True if the file exports any `dynamic` segment option, whatever its value.
pub fn declares_dynamic_export(content: &str) -> bool {
    DYNAMIC_EXPORT_REGEX.is_match(content)
}

pub fn needs_force_dynamic(content: &str) -> bool {
    !declares_force_dynamic(content) && !runtime_operations(content).is_empty()
}

pub fn check_dynamic_route_issues(ctx: &ProjectContext) -> Vec<Finding> {
    let mut findings = Vec::new();

    for path in ctx.route_files() {
        let Some(content) = ctx.read(path) else {
            continue;
        };
        if declares_force_dynamic(&content) {
            continue;
        }
        let operations = runtime_operations(&content);
        if operations.is_empty() {
            continue;
        }

        findings.push(
            Finding::error(
                RuleId::DynamicRoute,
                ctx.relative(path),
                format!(
                    "Route uses {} but is not marked as dynamic",
                    operations.join(", ")
                ),
            )
            .with_suggestion(format!(
                "Add `{}` after the imports",
                FORCE_DYNAMIC_DIRECTIVE
            ))
            .with_action(InsertDirective { path: path.clone() }),
        );
    }

    findings
}
