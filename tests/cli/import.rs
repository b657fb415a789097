use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const TABLE: &str = "\"Variable name\",\"English\",\"Translation\",\"Module name\",\"Package\"
\"LBL_Open\",\"Open\",\"Otev\u{159}\u{ed}t\",\"viewer\",\"org/example/viewer\"
\"LBL_Close\",\"Close\",\"\",\"viewer\",\"org/example/viewer\"
\"LBL_Quote\",\"Say \"\"Hi\"\"\",\"\u{158}ekni \"\"Ahoj\"\"\",\"viewer\",\"org/example/viewer\"
\"LBL_Gone\",\"Gone\",\"Pry\u{10d}\",\"removed\",\"org/example\"
";

fn viewer_module() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file("viewer/pom.xml", "<project/>\n")?;
    test.write_file(
        "viewer/src/main/resources/org/example/viewer/Bundle.properties",
        "LBL_Open=Open\nLBL_Close=Close\nLBL_Quote=Say \"Hi\"\n",
    )?;
    test.write_file("cs.csv", TABLE)?;
    Ok(test)
}

const TARGET: &str = "viewer/src/main/resources/org/example/viewer/Bundle_cs.properties";

#[test]
fn test_import_dry_run() -> Result<()> {
    let test = viewer_module()?;

    let mut cmd = test.command();
    cmd.args(["import", "--language", "cs", "--input", "cs.csv"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        format!(
            "  create {} (2 keys)\nWould write 1 bundle(s).\nRun with --apply to write these bundles.\n",
            TARGET
        )
    );
    assert_eq!(
        output.stderr,
        "warning: 1 translation(s) for removed/org/example match no scanned package\n"
    );
    assert!(test.read_file(TARGET).is_err());

    Ok(())
}

#[test]
fn test_import_apply_writes_sorted_bundle() -> Result<()> {
    let test = viewer_module()?;

    let mut cmd = test.command();
    cmd.args(["import", "--language", "cs", "--input", "cs.csv", "--apply"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.ends_with("Wrote 1 bundle(s).\n"));

    let content = test.read_file(TARGET)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "# Translation for language 'cs'.");
    assert!(lines[1].starts_with("# Generated by bundlecheck from cs.csv;"));
    assert_eq!(
        &lines[2..],
        &["LBL_Open=Otev\u{159}\u{ed}t", "LBL_Quote=\u{158}ekni \"Ahoj\""]
    );

    Ok(())
}

#[test]
fn test_import_replaces_existing_bundle() -> Result<()> {
    let test = viewer_module()?;
    test.write_file(TARGET, "LBL_Old=Stary\n")?;

    let mut cmd = test.command();
    cmd.args(["import", "-l", "cs", "-i", "cs.csv", "--apply"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains(&format!("  replace {} (2 keys)\n", TARGET)));
    assert!(!test.read_file(TARGET)?.contains("LBL_Old"));

    Ok(())
}

#[test]
fn test_import_escape_non_ascii() -> Result<()> {
    let test = viewer_module()?;
    test.write_file(".bundlecheckrc.json", r#"{ "escapeNonAscii": true }"#)?;

    let mut cmd = test.command();
    cmd.args(["import", "-l", "cs", "-i", "cs.csv", "--apply"]);
    run(cmd)?;

    let content = test.read_file(TARGET)?;
    assert!(content.contains("LBL_Open=Otev\\u0159\\u00edt\n"));

    Ok(())
}

#[test]
fn test_import_rejects_malformed_table() -> Result<()> {
    let test = viewer_module()?;
    test.write_file(
        "bad.csv",
        "\"Variable name\",\"English\",\"Translation\",\"Module name\",\"Package\"\n\"LBL_Open\",\"Open\",\"Otevrit\"\n",
    )?;

    let mut cmd = test.command();
    cmd.args(["import", "-l", "cs", "-i", "bad.csv", "--apply"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(2));
    assert!(
        output
            .stderr
            .contains("Row 1 has wrong number of values (3 instead of 5)")
    );
    assert!(test.read_file(TARGET).is_err());

    Ok(())
}
