use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

#[test]
fn test_baseline_within_limits() -> Result<()> {
    let test = CliTest::with_editor_module()?;
    test.write_file("known_errors.properties", "# per module\neditor=3\n")?;

    let mut cmd = test.check_command();
    cmd.args(["--baseline", "known_errors.properties"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stdout
            .ends_with("editor = 3\ntotal=3\n\u{2713} No module exceeds its baseline\n")
    );

    Ok(())
}

#[test]
fn test_baseline_regression_fails() -> Result<()> {
    let test = CliTest::with_editor_module()?;
    test.write_file("known_errors.properties", "editor=1\n")?;

    let mut cmd = test.check_command();
    cmd.args(["--baseline", "known_errors.properties"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.ends_with(
        "total=3\n\u{2718} Module editor: Found 3 errors in I18N (expected <= 1).\n"
    ));

    Ok(())
}

#[test]
fn test_module_missing_from_baseline_must_be_clean() -> Result<()> {
    let test = CliTest::with_editor_module()?;
    test.write_file("known_errors.properties", "other/module=10\n")?;

    let mut cmd = test.check_command();
    cmd.args(["--baseline", "known_errors.properties"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(1));
    assert!(
        output
            .stdout
            .contains("Module editor: Found 3 errors in I18N (expected <= 0).")
    );

    Ok(())
}

#[test]
fn test_invalid_baseline_count() -> Result<()> {
    let test = CliTest::with_editor_module()?;
    test.write_file("known_errors.properties", "editor=several\n")?;

    let mut cmd = test.check_command();
    cmd.args(["--baseline", "known_errors.properties"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(
        output
            .stderr
            .starts_with("Error: Invalid problem count for 'editor'")
    );

    Ok(())
}
