use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod baseline;
mod check;
mod export;
mod import;
mod init;

const BIN_NAME: &str = "bundlecheck";

pub const EDITOR_MANIFEST: &str = "Manifest-Version: 1.0
OpenIDE-Module: org.example.editor
OpenIDE-Module-Localizing-Bundle: org/example/editor/Bundle.properties
";

pub const EDITOR_BUNDLE: &str = "OpenIDE-Module-Name=Editor
OpenIDE-Module-Display-Category=Base
CTL_Title=Editor
Unused_Key=Nobody uses me
# YESI18N
Kept_Key=Kept on purpose
";

pub const EDITOR_SOURCE: &str = r#"package org.example.editor;

public class Editor {
    String title = NbBundle.getMessage(Editor.class, "CTL_Title");
    String missing = NbBundle.getMessage(Editor.class, "CTL_Missing");
    String hello = "Hello world";
    String id = "editor.id"; // NOI18N
}
"#;

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stops the config file search at the project.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with one NetBeans module `editor` producing three problems.
    pub fn with_editor_module() -> Result<Self> {
        let test = Self::new()?;
        test.write_file("editor/manifest.mf", EDITOR_MANIFEST)?;
        test.write_file(
            "editor/src/org/example/editor/Bundle.properties",
            EDITOR_BUNDLE,
        )?;
        test.write_file("editor/src/org/example/editor/Editor.java", EDITOR_SOURCE)?;
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

    pub fn check_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("check");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

/// Captured result of running the binary.
pub struct RunOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

pub fn run(mut cmd: Command) -> Result<RunOutput> {
    let Output {
        status,
        stdout,
        stderr,
    } = cmd.output().context("Failed to run bundlecheck")?;
    Ok(RunOutput {
        code: status.code(),
        stdout: String::from_utf8(stdout)?,
        stderr: String::from_utf8(stderr)?,
    })
}
