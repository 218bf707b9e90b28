use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "✓ Created .buildguardrc.json\n");

    let content = test.read_file(".buildguardrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["sourceRoot"], "src");
    assert_eq!(parsed["publicEnvPrefix"], "NEXT_PUBLIC_");
    assert!(parsed["lintCommand"].is_array());
    assert!(content.contains("\n  \"apiRoots\""));

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".buildguardrc.json", "{}")?;

    let (code, _, stderr) = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(code, 1);
    assert_eq!(stderr, "Error: .buildguardrc.json already exists\n");
    assert_eq!(test.read_file(".buildguardrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Usage: buildguard"));

    Ok(())
}
