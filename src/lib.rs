//! Buildguard - build validator and fixer for Next.js projects
//!
//! Buildguard is a CLI tool and library that checks a Next.js + TypeScript
//! project for problems that break `next build` (JSX in `.ts` files, route
//! handlers missing `dynamic = 'force-dynamic'`, missing config files and
//! scripts, undeclared environment variables) and repairs the ones that have
//! a deterministic fix.
//!
//! ## Module Structure
//!
//! - `actions`: Idempotent, atomic fix actions
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `issues`: Finding and rule identifiers
//! - `project`: Per-run project context (lazy file discovery, parsed JSON)
//! - `report`: Validation and fix report rendering
//! - `rules`: Detection rules
//! - `utils`: Shared utility functions
//! - `walker`: Source tree traversal

pub mod actions;
pub mod cli;
pub mod config;
pub mod issues;
pub mod project;
pub mod report;
pub mod rules;
pub mod utils;
pub mod walker;
