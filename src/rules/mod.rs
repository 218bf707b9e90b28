//! Rule implementations for buildguard.
//!
//! Each rule module exposes a `check_*_issues(ctx)` entry point returning
//! findings, plus the pure predicate functions it is built from so a heuristic
//! can be improved without touching orchestration.
//!
//! ## Module Structure
//!
//! - `helpers`: File-name target selectors
//! - `project_files`: Missing or malformed `package.json` / `tsconfig.json`
//! - `tsconfig`: Missing `tsconfig.json` and required compiler options
//! - `scripts`: Required npm scripts
//! - `types`: Missing `@types/*` companions
//! - `scaffold`: `next-env.d.ts` and the config barrel
//! - `jsx_in_ts`: JSX in `.ts` / `.js` files
//! - `dynamic_route`: Route handlers missing `dynamic = 'force-dynamic'`
//! - `react_import`: React APIs used without an import
//! - `env_vars`: `process.env` names missing from `.env.example`
//! - `lint`: External linter passthrough

pub mod dynamic_route;
pub mod env_vars;
pub mod helpers;
pub mod jsx_in_ts;
pub mod lint;
pub mod project_files;
pub mod react_import;
pub mod scaffold;
pub mod scripts;
pub mod tsconfig;
pub mod types;

use crate::{issues::Finding, project::ProjectContext};

pub type CheckFn = fn(&ProjectContext) -> Vec<Finding>;

/// Structural checks on project files. Run first.
pub const PROJECT_CHECKS: &[CheckFn] = &[
    project_files::check_project_file_issues,
    tsconfig::check_tsconfig_issues,
    scripts::check_script_issues,
    types::check_types_issues,
    scaffold::check_scaffold_issues,
];

/// Per-file source checks. Run after the project checks.
pub const SOURCE_CHECKS: &[CheckFn] = &[
    jsx_in_ts::check_jsx_in_ts_issues,
    dynamic_route::check_dynamic_route_issues,
    react_import::check_react_import_issues,
    env_vars::check_env_var_issues,
];

/// Run every in-process rule in priority order. The linter is not included.
pub fn check_all(ctx: &ProjectContext) -> Vec<Finding> {
    PROJECT_CHECKS
        .iter()
        .chain(SOURCE_CHECKS)
        .flat_map(|check| check(ctx))
        .collect()
}
