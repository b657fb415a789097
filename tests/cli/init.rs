use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .bundlecheckrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".bundlecheckrc.json").exists());

    let content = test.read_file(".bundlecheckrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["topDirs"], serde_json::json!(["."]));
    assert_eq!(parsed["primaryCatalogName"], "Bundle.properties");
    assert_eq!(parsed["suppressionMarker"], "NOI18N");
    assert!(parsed.get("moduleFilter").is_none());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".bundlecheckrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: .bundlecheckrc.json already exists
    ");

    Ok(())
}
