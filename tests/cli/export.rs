use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

fn translated_module() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file("viewer/pom.xml", "<project/>\n")?;
    test.write_file(
        "viewer/src/main/resources/org/example/viewer/Bundle.properties",
        "LBL_Open=Open\nLBL_Quote=Say \"Hi\"\n",
    )?;
    test.write_file(
        "viewer/src/main/resources/org/example/viewer/Bundle_ja.properties",
        "LBL_Open=\\u958b\\u304f\n",
    )?;
    Ok(test)
}

#[test]
fn test_export_writes_table() -> Result<()> {
    let test = translated_module()?;

    let mut cmd = test.command();
    cmd.args(["export", "--language", "ja", "--output", "out/ja.csv"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stdout,
        "\u{2713} Exported 2 entries from 1 module to out/ja.csv\n"
    );
    assert_eq!(
        test.read_file("out/ja.csv")?,
        "\"Variable name\",\"English\",\"Translation\",\"Module name\",\"Package\"
\"LBL_Open\",\"Open\",\"\u{958b}\u{304f}\",\"viewer\",\"org/example/viewer\"
\"LBL_Quote\",\"Say \"\"Hi\"\"\",\"\",\"viewer\",\"org/example/viewer\"
"
    );

    Ok(())
}

#[test]
fn test_export_language_without_translations() -> Result<()> {
    let test = translated_module()?;

    let mut cmd = test.command();
    cmd.args(["export", "-l", "cs", "-o", "cs.csv"]);
    let output = run(cmd)?;

    assert_eq!(output.code, Some(0));
    let table = test.read_file("cs.csv")?;
    assert!(table.contains("\"LBL_Open\",\"Open\",\"\",\"viewer\",\"org/example/viewer\"\n"));

    Ok(())
}
