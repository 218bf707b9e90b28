use anyhow::Result;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

const ROUTE: &str = r#"import { NextResponse } from 'next/server';

export async function GET() {
  const res = await fetch('https://api.example.com/users');
  return NextResponse.json(await res.json());
}
"#;

#[test]
fn test_fix_clean_project() -> Result<()> {
    let test = CliTest::nextjs_project()?;

    let (code, stdout, _) = run(test.fix_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("✓ No fixes applied - no issues found"));

    Ok(())
}

#[test]
fn test_fix_route_reaches_fixed_point() -> Result<()> {
    let test = CliTest::nextjs_project()?;
    test.write_file("src/app/api/users/route.ts", ROUTE)?;

    let (code, stdout, _) = run(test.fix_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Applied 1 fix:"));
    assert!(stdout.contains("[dynamic-route] src/app/api/users/route.ts: Inserted"));

    let fixed = test.read_file("src/app/api/users/route.ts")?;
    assert!(fixed.starts_with(
        "import { NextResponse } from 'next/server';\n\nexport const dynamic = 'force-dynamic';\n\nexport async function GET() {"
    ));

    let (code, stdout, _) = run(test.validate_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Errors (0):"));

    Ok(())
}

#[test]
fn test_fix_twice_applies_nothing_the_second_time() -> Result<()> {
    let test = CliTest::nextjs_project()?;
    test.write_file(
        "package.json",
        r#"{
  "scripts": { "build": "next build", "start": "next start" },
  "dependencies": { "next": "14.2.0" }
}
"#,
    )?;
    test.write_file("tsconfig.json", "{}\n")?;
    test.write_file(
        "src/components/Card.ts",
        "export const Card = () => <div>card</div>;\n",
    )?;

    let (code, stdout, _) = run(test.fix_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("Applied 7 fixes:"));

    let package: Value = serde_json::from_str(&test.read_file("package.json")?)?;
    assert_eq!(package["scripts"]["dev"], "next dev");
    assert_eq!(package["scripts"]["lint"], "next lint");
    assert_eq!(package["scripts"]["typecheck"], "tsc --noEmit");

    let tsconfig = test.read_file("tsconfig.json")?;
    assert_eq!(
        tsconfig,
        "{\n  \"compilerOptions\": {\n    \"jsx\": \"preserve\",\n    \"strict\": true,\n    \"moduleResolution\": \"bundler\"\n  }\n}\n"
    );
    assert!(test.root().join("src/components/Card.tsx").exists());
    assert!(!test.root().join("src/components/Card.ts").exists());

    let (code, stdout, _) = run(test.fix_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("✓ No fixes applied\n"));
    assert!(!stdout.contains("Applied"));

    Ok(())
}

#[test]
fn test_rename_conflict_leaves_files_untouched() -> Result<()> {
    let test = CliTest::nextjs_project()?;
    let component = "export const Card = () => <div>card</div>;\n";
    test.write_file("src/Card.ts", component)?;
    test.write_file("src/Card.tsx", "export default 1;\n")?;

    let (code, stdout, _) = run(test.fix_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Could not apply 1 fix:"));
    assert!(stdout.contains("[jsx-in-ts] src/Card.ts: Card.tsx already exists; not overwriting"));
    assert_eq!(test.read_file("src/Card.ts")?, component);
    assert_eq!(test.read_file("src/Card.tsx")?, "export default 1;\n");

    Ok(())
}

#[test]
fn test_fix_scaffolds_next_env_and_config_barrel() -> Result<()> {
    let test = CliTest::nextjs_project()?;
    test.remove_file("next-env.d.ts")?;
    test.write_file("src/config/env.ts", "export const env = {};\n")?;
    test.write_file("src/config/features.ts", "export const features = {};\n")?;

    let (code, stdout, _) = run(test.fix_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Applied 2 fixes:"));
    assert!(
        test.read_file("next-env.d.ts")?
            .starts_with("/// <reference types=\"next\" />\n")
    );
    assert_eq!(
        test.read_file("src/config/index.ts")?,
        "export * from './env';\nexport * from './features';\n"
    );

    Ok(())
}

#[test]
fn test_manual_findings_are_counted() -> Result<()> {
    let test = CliTest::nextjs_project()?;
    test.remove_file("tsconfig.json")?;

    let (code, stdout, _) = run(test.fix_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("✓ No fixes applied\n"));
    assert!(stdout.contains("1 issue without an automatic fix"));

    Ok(())
}
