//! Layer reference check.
//!
//! A module layer file can reference catalog keys (`bundlevalue`
//! attributes). References into packages of the same group must resolve
//! against that package's primary catalog; references to other groups are
//! ignored.

use std::collections::BTreeMap;

use crate::{
    core::{PackageCatalogs, ReferenceSet},
    findings::{Finding, FindingKind},
};

/// Resolve the group's layer references, marking hit keys as used.
pub fn check_references(
    references: &ReferenceSet,
    packages: &mut BTreeMap<String, PackageCatalogs>,
) -> Vec<Finding> {
    match references {
        ReferenceSet::Missing { declared } => vec![Finding::new(
            FindingKind::LayerReference,
            declared,
            1,
            format!("Missing layer file specified in manifest {}", declared),
        )],
        ReferenceSet::Unreadable { file, error } => {
            vec![Finding::new(FindingKind::UnreadableFile, file, 1, error)]
        }
        ReferenceSet::Loaded { file, entries } => entries
            .iter()
            .filter_map(|reference| {
                let package = packages.get_mut(&reference.sub_path)?;
                let found = package
                    .primary
                    .as_mut()
                    .is_some_and(|catalog| catalog.mark_used(&reference.key));
                (!found).then(|| {
                    Finding::new(
                        FindingKind::LayerReference,
                        file,
                        1,
                        format!(
                            "Missing resource bundle key {} specified in layer file: {}",
                            reference.key, reference.origin
                        ),
                    )
                })
            })
            .collect(),
    }
}
