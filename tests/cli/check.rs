use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, EDITOR_BUNDLE, run};

#[test]
fn test_check_reports_module_problems() -> Result<()> {
    let test = CliTest::with_editor_module()?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert_eq!(
        output.stdout,
        "editor: Scanned 1 Java sources, 1 primary and 0 translated resource bundles. Found 3 potential problems.
  error: Very likely missing key in resource bundle  missing-key
    --> editor/src/org/example/editor/Editor.java:5: CTL_Missing
  warning: Probably missing key in resource bundle or string should be marked with // NOI18N  missing-noi18n-or-key
    --> editor/src/org/example/editor/Editor.java:6: Hello world
  warning: Probably unused resource bundle key  unused-key
    --> editor/src/org/example/editor/Bundle.properties:4: Unused_Key

editor = 3
total=3
\u{2718} 3 problems (1 error, 2 warnings)
"
    );
    assert_eq!(output.stderr, "");

    Ok(())
}

#[test]
fn test_clean_module() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("viewer/pom.xml", "<project/>\n")?;
    test.write_file(
        "viewer/src/main/resources/org/example/viewer/Bundle.properties",
        "LBL_Open=Open\n",
    )?;
    test.write_file(
        "viewer/src/main/java/org/example/viewer/Viewer.java",
        r#"package org.example.viewer;

class Viewer {
    String open = NbBundle.getMessage(Viewer.class, "LBL_Open");
    String id = "viewer.id"; // NOI18N
}
"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    total=0
    ✓ Checked 1 module - no problems found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_warnings_only_exit_success() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("viewer/pom.xml", "<project/>\n")?;
    test.write_file(
        "viewer/src/main/java/org/example/viewer/Viewer.java",
        "class Viewer { String s = \"Needs a marker\"; }\n",
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains(
        "--> viewer/src/main/java/org/example/viewer/Viewer.java:1: Needs a marker"
    ));
    assert!(output.stdout.ends_with("viewer = 1\ntotal=1\n\u{2718} 1 problems (0 errors, 1 warning)\n"));

    Ok(())
}

#[test]
fn test_module_catalog_missing_mandatory_key() -> Result<()> {
    let test = CliTest::with_editor_module()?;
    test.write_file(
        "editor/src/org/example/editor/Bundle.properties",
        &EDITOR_BUNDLE.replace("OpenIDE-Module-Display-Category=Base\n", ""),
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains(
        "  error: Module's resource bundle specified in manifest.mf  module-bundle\n    --> editor/src/org/example/editor/Bundle.properties:1: Missing OpenIDE-Module-Display-Category NetBeans module bundle\n"
    ));

    Ok(())
}

#[test]
fn test_layer_reference_to_missing_key() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "actions/manifest.mf",
        "OpenIDE-Module: org.example.actions\nOpenIDE-Module-Layer: org/example/actions/layer.xml\n",
    )?;
    test.write_file(
        "actions/src/org/example/actions/layer.xml",
        r#"<filesystem>
    <folder name="Menu">
        <file name="Open.instance">
            <attr name="displayName" bundlevalue="org.example.actions.Bundle#CTL_Open"/>
        </file>
        <folder name="Edit" bundlevalue="org.example.actions.Bundle#Menu_Edit"/>
    </folder>
</filesystem>
"#,
    )?;
    test.write_file(
        "actions/src/org/example/actions/Bundle.properties",
        "Menu_Edit=Edit\n",
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(1));
    assert!(output.stdout.contains(
        "    --> actions/src/org/example/actions/layer.xml:1: Missing resource bundle key CTL_Open specified in layer file: /Menu/Open.instance/displayName/bundlevalue\n"
    ));
    assert!(output.stdout.contains("actions = 1\ntotal=1\n"));

    Ok(())
}

#[test]
fn test_malformed_bundle_line_is_a_warning() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("viewer/pom.xml", "<project/>\n")?;
    test.write_file(
        "viewer/src/main/resources/org/example/Bundle.properties",
        "=no key\n",
    )?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        output.stderr,
        "warning: viewer/src/main/resources/org/example/Bundle.properties:1: incorrect key: =no key\n"
    );

    Ok(())
}

#[test]
fn test_module_filter_and_config_top_dirs() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".bundlecheckrc.json", r#"{ "topDirs": ["ide"] }"#)?;
    for name in ["ide/editor", "ide/viewer"] {
        test.write_file(&format!("{}/pom.xml", name), "<project/>\n")?;
        test.write_file(
            &format!("{}/src/main/java/org/example/A.java", name),
            "class A { String s = \"Problem\"; }\n",
        )?;
    }

    let mut cmd = test.check_command();
    cmd.args(["--module-filter", "view"]);
    let output = run(cmd)?;

    assert!(output.stdout.starts_with("ide/viewer: Scanned 1 Java sources"));
    assert!(!output.stdout.contains("ide/editor"));

    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".bundlecheckrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = run(test.check_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with("Error: Invalid glob pattern in 'ignores'"));

    Ok(())
}
