//! Missing catalog key detection rule.
//!
//! Reports literals that were not found in any catalog of their package and
//! are not suppressed. A literal next to the bundle-lookup identifier is
//! almost certainly a missing key; anything else may just need a
//! suppression marker.

use crate::{
    core::SourceModel,
    findings::{Finding, FindingKind},
};

/// Check one cross-referenced source for unresolved literals.
pub fn check_missing_keys(source: &SourceModel) -> Vec<Finding> {
    source
        .occurrences
        .iter()
        .filter(|o| !o.found_in_catalog && !o.suppressed)
        .map(|o| {
            let kind = if o.near_lookup_identifier {
                FindingKind::MissingKeyInBundle
            } else {
                FindingKind::MissingSuppressionOrKey
            };
            Finding::new(kind, &source.file_path, o.line, &o.text)
        })
        .collect()
}
