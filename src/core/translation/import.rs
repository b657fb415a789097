//! Translation import: table rows to regenerated translated catalogs.
//!
//! A translated catalog is always rebuilt from the full table, never merged
//! with the file already on disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::core::{
    GroupInput,
    translation::{
        escape::{encode_non_ascii, escape_line_breaks},
        table::TranslationTable,
    },
};

/// What applying a generated catalog does to the file system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogAction {
    Created,
    Replaced,
}

impl CatalogAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogAction::Created => "create",
            CatalogAction::Replaced => "replace",
        }
    }
}

/// A translated catalog ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCatalog {
    pub group: String,
    pub sub_path: String,
    pub path: PathBuf,
    pub action: CatalogAction,
    /// Header lines followed by `key=value` lines sorted by key.
    pub lines: Vec<String>,
}

impl GeneratedCatalog {
    /// Number of `key=value` lines (header comments excluded).
    pub fn entry_count(&self) -> usize {
        self.lines.iter().filter(|line| !line.starts_with('#')).count()
    }

    pub fn content(&self) -> String {
        let mut content = self.lines.join("\n");
        content.push('\n');
        content
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&self.path, self.content())
            .with_context(|| format!("Failed to write file: {}", self.path.display()))
    }
}

/// Table translations with no scanned group or package to go to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedPackage {
    pub group: String,
    pub sub_path: String,
    pub keys: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportPlan {
    pub catalogs: Vec<GeneratedCatalog>,
    pub unmatched: Vec<UnmatchedPackage>,
}

impl ImportPlan {
    /// Write every generated catalog, returning how many were written.
    pub fn apply(&self) -> Result<usize> {
        for catalog in &self.catalogs {
            catalog.save()?;
        }
        Ok(self.catalogs.len())
    }
}

#[derive(Debug, Clone)]
pub struct ImportOptions<'a> {
    pub locale: &'a str,
    /// Lines written at the top of every generated catalog.
    pub header: &'a [String],
    /// Primary catalog file stem (`Bundle`), used to name new catalogs.
    pub primary_stem: &'a str,
    pub escape_non_ascii: bool,
}

/// Plan the translated catalogs for every scanned group found in `table`.
pub fn plan_import(
    inputs: &[GroupInput],
    table: &TranslationTable,
    options: &ImportOptions<'_>,
) -> ImportPlan {
    let mut plan = ImportPlan::default();

    for (group, sub_path, translations) in table.packages() {
        let package = inputs
            .iter()
            .find(|input| input.identity == group)
            .and_then(|input| input.packages.get(sub_path));

        let Some(package) = package else {
            plan.unmatched.push(UnmatchedPackage {
                group: group.to_string(),
                sub_path: sub_path.to_string(),
                keys: translations.len(),
            });
            continue;
        };

        let (path, action) = match package.translated_for(options.primary_stem, options.locale) {
            Some(existing) => (existing.path.clone(), CatalogAction::Replaced),
            None => (
                translated_path(&package.dir, options.primary_stem, options.locale),
                CatalogAction::Created,
            ),
        };

        let mut lines: Vec<String> = options.header.to_vec();
        lines.extend(translations.iter().map(|(key, value)| {
            let value = escape_line_breaks(value);
            if options.escape_non_ascii {
                format!("{}={}", key, encode_non_ascii(&value))
            } else {
                format!("{}={}", key, value)
            }
        }));

        plan.catalogs.push(GeneratedCatalog {
            group: group.to_string(),
            sub_path: sub_path.to_string(),
            path,
            action,
            lines,
        });
    }

    plan
}

fn translated_path(dir: &Path, primary_stem: &str, locale: &str) -> PathBuf {
    dir.join(format!("{}_{}.properties", primary_stem, locale))
}
