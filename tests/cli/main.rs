use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod fix;
mod init;
mod validate;

const BIN_NAME: &str = "buildguard";

pub const PACKAGE_JSON: &str = r#"{
  "name": "web",
  "scripts": {
    "dev": "next dev",
    "build": "next build",
    "start": "next start",
    "lint": "next lint",
    "typecheck": "tsc --noEmit"
  },
  "dependencies": {
    "next": "14.2.0",
    "react": "18.3.1",
    "react-dom": "18.3.1"
  },
  "devDependencies": {
    "@types/react": "18.3.3",
    "@types/react-dom": "18.3.0"
  }
}
"#;

pub const TSCONFIG_JSON: &str = r#"{
  "compilerOptions": {
    "jsx": "preserve",
    "strict": true,
    "moduleResolution": "bundler"
  }
}
"#;

/// Lint disabled; the test environment has no `npx`.
pub const NO_LINT_CONFIG: &str = r#"{ "lintCommand": [] }"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project that validates clean, with lint disabled.
    pub fn nextjs_project() -> Result<Self> {
        let test = Self::new()?;
        test.write_file("package.json", PACKAGE_JSON)?;
        test.write_file("tsconfig.json", TSCONFIG_JSON)?;
        test.write_file("next-env.d.ts", "/// <reference types=\"next\" />\n")?;
        test.write_file(".env.example", "")?;
        test.write_file(".buildguardrc.json", NO_LINT_CONFIG)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn remove_file(&self, path: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);
        fs::remove_file(&file_path)
            .with_context(|| format!("Failed to remove file: {}", file_path.display()))
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn validate_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("validate");
        cmd
    }

    pub fn fix_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("fix");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

/// Run a command and return (exit code, stdout, stderr).
pub fn run(mut cmd: Command) -> Result<(i32, String, String)> {
    let Output {
        status,
        stdout,
        stderr,
    } = cmd.output().context("Failed to run buildguard")?;
    Ok((
        status.code().unwrap_or(-1),
        String::from_utf8(stdout)?,
        String::from_utf8(stderr)?,
    ))
}
