//! Baseline comparison for gradually cleaned-up repositories.
//!
//! A baseline file lists groups with known problems as
//! `<group identity>=<max problems>`. Any other group must be clean.
//! A Maven project may also be listed by its source root,
//! `<group identity>/src/main/java`.

use std::{collections::BTreeMap, path::Path};

use anyhow::{Context, Result};

use crate::core::{parsers::catalog::parse_catalog_file, scan::ScanReport};

const SOURCE_ROOT_SUFFIX: &str = "/src/main/java";

/// A group with more problems than its baseline allows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regression {
    pub identity: String,
    pub found: usize,
    pub expected: usize,
}

impl std::fmt::Display for Regression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Module {}: Found {} errors in I18N (expected <= {}).",
            self.identity, self.found, self.expected
        )
    }
}

/// Load a baseline file. Every value must be a non-negative integer.
pub fn load_baseline(path: &Path) -> Result<BTreeMap<String, usize>> {
    let catalog = parse_catalog_file(path, "")?;
    catalog
        .entries
        .values()
        .map(|entry| {
            let count = entry.value.trim().parse::<usize>().with_context(|| {
                format!(
                    "Invalid problem count for '{}' at {}:{}",
                    entry.key,
                    path.display(),
                    entry.line
                )
            })?;
            Ok((entry.key.clone(), count))
        })
        .collect()
}

/// Groups whose problem count exceeds the baseline (missing entries mean 0).
pub fn compare_to_baseline(
    report: &ScanReport,
    expected: &BTreeMap<String, usize>,
) -> Vec<Regression> {
    report
        .groups
        .iter()
        .filter_map(|group| {
            let found = group.problem_count();
            let allowed = expected
                .get(&group.identity)
                .or_else(|| expected.get(&format!("{}{}", group.identity, SOURCE_ROOT_SUFFIX)))
                .copied()
                .unwrap_or(0);
            (found > allowed).then(|| Regression {
                identity: group.identity.clone(),
                found,
                expected: allowed,
            })
        })
        .collect()
}
