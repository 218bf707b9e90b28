use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".buildguardrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the application sources, relative to the project root.
    #[serde(default = "default_source_root")]
    pub source_root: String,
    /// Directories searched for route handlers (`route.ts` and friends).
    #[serde(default = "default_api_roots")]
    pub api_roots: Vec<String>,
    /// Directory names never descended into, in addition to hidden directories.
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,
    /// Glob patterns (relative to the project root) excluded from source checks.
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_public_env_prefix")]
    pub public_env_prefix: String,
    /// Linter invocation. An empty list disables the lint check.
    #[serde(default = "default_lint_command")]
    pub lint_command: Vec<String>,
}

fn default_source_root() -> String {
    "src".to_string()
}

fn default_api_roots() -> Vec<String> {
    ["src/app/api", "app/api"].map(String::from).to_vec()
}

fn default_skip_dirs() -> Vec<String> {
    vec!["node_modules".to_string()]
}

fn default_public_env_prefix() -> String {
    "NEXT_PUBLIC_".to_string()
}

fn default_lint_command() -> Vec<String> {
    ["npx", "next", "lint", "--max-warnings", "0"]
        .map(String::from)
        .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            api_roots: default_api_roots(),
            skip_dirs: default_skip_dirs(),
            ignores: Vec::new(),
            public_env_prefix: default_public_env_prefix(),
            lint_command: default_lint_command(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if self.source_root.trim().is_empty() {
            anyhow::bail!("'sourceRoot' must not be empty");
        }

        Ok(())
    }

    /// Compiled `ignores` patterns. Invalid patterns are rejected by `validate`.
    pub fn ignore_patterns(&self) -> Vec<Pattern> {
        self.ignores
            .iter()
            .filter_map(|p| Pattern::new(p).ok())
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    let start_dir = fs::canonicalize(start_dir).unwrap_or_else(|_| start_dir.to_path_buf());

    match find_config_file(&start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
