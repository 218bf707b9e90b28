use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_clean_project_passes() -> Result<()> {
    let test = CliTest::nextjs_project()?;

    let (code, stdout, _) = run(test.validate_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Errors (0):"));
    assert!(stdout.contains("Warnings (0):"));
    assert!(stdout.ends_with("✓ Validation passed\n"));

    Ok(())
}

#[test]
fn test_missing_tsconfig_is_single_error() -> Result<()> {
    let test = CliTest::nextjs_project()?;
    test.remove_file("tsconfig.json")?;

    let (code, stdout, _) = run(test.validate_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("Errors (1):"));
    assert!(stdout.contains("[tsconfig-missing] tsconfig.json: tsconfig.json not found"));
    assert!(stdout.contains("fix: Run `npx tsc --init` to create one"));
    assert!(stdout.ends_with("✘ Validation failed: 1 error, 0 warnings\n"));

    Ok(())
}

#[test]
fn test_missing_scripts_are_warnings() -> Result<()> {
    let test = CliTest::nextjs_project()?;
    test.write_file(
        "package.json",
        r#"{
  "scripts": { "build": "next build", "start": "next start" },
  "dependencies": { "next": "14.2.0" }
}
"#,
    )?;

    let (code, stdout, _) = run(test.validate_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Errors (0):"));
    assert!(stdout.contains("Warnings (3):"));
    assert!(stdout.contains("Missing \"dev\" script"));
    assert!(stdout.contains("Missing \"lint\" script"));
    assert!(stdout.contains("Missing \"typecheck\" (or \"type-check\") script"));

    Ok(())
}

#[test]
fn test_undeclared_env_var() -> Result<()> {
    let test = CliTest::nextjs_project()?;
    test.write_file(".env.example", "API_KEY=\n")?;
    test.write_file(
        "src/lib/keys.ts",
        r#"export const apiKey = process.env.API_KEY;
export const token = process.env.SECRET_TOKEN;
export const site = process.env.NEXT_PUBLIC_SITE_URL;
"#,
    )?;

    let (code, stdout, _) = run(test.validate_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Warnings (1):"));
    assert!(stdout.contains(
        "[env-var-undeclared] src/lib/keys.ts: process.env.SECRET_TOKEN is not declared in .env.example"
    ));
    assert!(!stdout.contains("NEXT_PUBLIC_SITE_URL"));

    Ok(())
}

#[test]
fn test_jsx_in_ts_and_dynamic_route() -> Result<()> {
    let test = CliTest::nextjs_project()?;
    test.write_file(
        "src/components/Card.ts",
        "export const Card = () => <div>card</div>;\n",
    )?;
    test.write_file(
        "src/app/api/users/route.ts",
        r#"import { NextResponse } from 'next/server';

export async function GET() {
  const res = await fetch('https://api.example.com/users');
  return NextResponse.json(await res.json());
}
"#,
    )?;

    let (code, stdout, _) = run(test.validate_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("Errors (2):"));
    assert!(stdout.contains("[jsx-in-ts] src/components/Card.ts"));
    assert!(stdout.contains("fix: Rename src/components/Card.ts to src/components/Card.tsx"));
    assert!(stdout.contains(
        "[dynamic-route] src/app/api/users/route.ts: Route uses fetch but is not marked as dynamic"
    ));

    Ok(())
}

#[test]
fn test_malformed_package_json() -> Result<()> {
    let test = CliTest::nextjs_project()?;
    test.write_file("package.json", "{ \"name\": ")?;

    let (code, stdout, _) = run(test.validate_command())?;

    assert_eq!(code, 1);
    assert!(stdout.contains("[malformed-config] package.json: Failed to parse package.json"));

    Ok(())
}

#[test]
fn test_unavailable_linter_is_warning() -> Result<()> {
    let test = CliTest::nextjs_project()?;
    test.write_file(
        ".buildguardrc.json",
        r#"{ "lintCommand": ["buildguard-test-missing-linter"] }"#,
    )?;

    let (code, stdout, _) = run(test.validate_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Warnings (1):"));
    assert!(stdout.contains("[lint] .: Could not run linter `buildguard-test-missing-linter`"));

    Ok(())
}

#[test]
fn test_invalid_config_is_tool_error() -> Result<()> {
    let test = CliTest::nextjs_project()?;
    test.write_file(".buildguardrc.json", r#"{ "ignores": ["[unclosed"] }"#)?;

    let (code, _, stderr) = run(test.validate_command())?;

    assert_eq!(code, 2);
    assert!(stderr.starts_with("Error:"));

    Ok(())
}

#[test]
fn test_root_flag() -> Result<()> {
    let test = CliTest::nextjs_project()?;
    test.write_file("web/package.json", "{}")?;
    test.write_file("web/.buildguardrc.json", crate::NO_LINT_CONFIG)?;

    let (code, stdout, _) = run({
        let mut cmd = test.validate_command();
        cmd.args(["--root", "web"]);
        cmd
    })?;

    assert_eq!(code, 1);
    assert!(stdout.contains("[tsconfig-missing]"));
    assert!(test.root().join("tsconfig.json").exists());

    Ok(())
}
