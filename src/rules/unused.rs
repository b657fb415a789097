//! Unused catalog entry detection rule.
//!
//! Detects entries of a primary or secondary catalog that no source literal,
//! module key or layer reference hit, unless marked intentional.

use crate::{
    core::Catalog,
    findings::{Finding, FindingKind},
};

/// Check a catalog after every usage of the group has been recorded.
///
/// Findings follow the catalog's file order.
pub fn check_unused_entries(catalog: &Catalog) -> Vec<Finding> {
    catalog
        .entries
        .values()
        .filter(|entry| entry.is_possibly_unused())
        .map(|entry| {
            Finding::new(
                FindingKind::PossiblyUnusedEntry,
                &catalog.file_path,
                entry.line,
                &entry.key,
            )
        })
        .collect()
}
