use std::{
    cell::OnceCell,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use colored::Colorize;
use glob::Pattern;
use serde_json::Value;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    rules::helpers::is_source_file,
    utils::relative_path,
    walker::FileWalker,
};

pub const PACKAGE_JSON: &str = "package.json";
pub const TSCONFIG_JSON: &str = "tsconfig.json";
pub const ENV_EXAMPLE: &str = ".env.example";
pub const NEXT_ENV_DTS: &str = "next-env.d.ts";

/// State of a JSON configuration file at the project root.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonFile {
    Missing,
    /// Present but unreadable or not valid JSON. Holds the parser message.
    Malformed(String),
    Parsed(Value),
}

impl JsonFile {
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return JsonFile::Missing;
        }
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => return JsonFile::Malformed(e.to_string()),
        };
        match serde_json::from_str(&content) {
            Ok(value) => JsonFile::Parsed(value),
            Err(e) => JsonFile::Malformed(e.to_string()),
        }
    }

    pub fn parsed(&self) -> Option<&Value> {
        match self {
            JsonFile::Parsed(value) => Some(value),
            _ => None,
        }
    }
}

/// Everything a rule may look at for one invocation.
///
/// Project files and the source file list are read on first access and
/// cached for the rest of the run.
pub struct ProjectContext {
    /// Project root; all finding paths are relative to it.
    pub root: PathBuf,
    pub config: Config,
    pub verbose: bool,
    ignores: Vec<Pattern>,
    package_json: OnceCell<JsonFile>,
    tsconfig: OnceCell<JsonFile>,
    source_files: OnceCell<Vec<PathBuf>>,
    route_files: OnceCell<Vec<PathBuf>>,
}

impl ProjectContext {
    /// Build a context from CLI arguments, loading `.buildguardrc.json` if present.
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let loaded = load_config(&args.root)?;
        if args.verbose && !loaded.from_file {
            eprintln!(
                "{} No configuration file found, using defaults",
                "note:".bold().cyan()
            );
        }
        Ok(Self::with_config(
            args.root.clone(),
            loaded.config,
            args.verbose,
        ))
    }

    pub fn with_config(root: PathBuf, config: Config, verbose: bool) -> Self {
        let ignores = config.ignore_patterns();
        Self {
            root,
            config,
            verbose,
            ignores,
            package_json: OnceCell::new(),
            tsconfig: OnceCell::new(),
            source_files: OnceCell::new(),
            route_files: OnceCell::new(),
        }
    }

    pub fn package_json(&self) -> &JsonFile {
        self.package_json
            .get_or_init(|| JsonFile::load(&self.root.join(PACKAGE_JSON)))
    }

    pub fn tsconfig(&self) -> &JsonFile {
        self.tsconfig
            .get_or_init(|| JsonFile::load(&self.root.join(TSCONFIG_JSON)))
    }

    /// Every `.ts/.tsx/.js/.jsx` file under the source root, minus `ignores`.
    pub fn source_files(&self) -> &[PathBuf] {
        self.source_files.get_or_init(|| {
            let dir = self.root.join(&self.config.source_root);
            self.walker()
                .walk(&dir, is_source_file)
                .filter(|p| !self.is_ignored(p))
                .collect()
        })
    }

    /// Route handler files under every configured API root.
    pub fn route_files(&self) -> &[PathBuf] {
        self.route_files.get_or_init(|| {
            let mut files: Vec<PathBuf> = Vec::new();
            for api_root in &self.config.api_roots {
                let dir = self.root.join(api_root);
                for path in self
                    .walker()
                    .walk(&dir, crate::rules::helpers::is_route_handler)
                {
                    if !self.is_ignored(&path) && !files.contains(&path) {
                        files.push(path);
                    }
                }
            }
            files
        })
    }

    pub fn walker(&self) -> FileWalker<'_> {
        FileWalker::new(&self.config.skip_dirs, self.verbose)
    }

    pub fn relative(&self, path: &Path) -> String {
        relative_path(&self.root, path)
    }

    /// Read a file for rule evaluation.
    ///
    /// Unreadable files (permissions, invalid UTF-8) are skipped, with a
    /// warning in verbose mode.
    pub fn read(&self, path: &Path) -> Option<String> {
        match fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(e) => {
                if self.verbose {
                    eprintln!(
                        "{} Cannot read {}: {}",
                        "warning:".bold().yellow(),
                        self.relative(path),
                        e
                    );
                }
                None
            }
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.ignores.is_empty() {
            return false;
        }
        let rel = self.relative(path);
        self.ignores.iter().any(|p| p.matches(&rel))
    }
}

/// True if `name` is listed in `dependencies` or `devDependencies`.
pub fn has_dependency(package: &Value, name: &str) -> bool {
    ["dependencies", "devDependencies"]
        .iter()
        .any(|table| package.get(table).and_then(|deps| deps.get(name)).is_some())
}
