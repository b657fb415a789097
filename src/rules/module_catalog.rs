//! Module catalog check.
//!
//! A module manifest can name the catalog holding the module's own display
//! strings. That catalog must exist and define the mandatory module keys;
//! the keys it defines count as used.

use crate::{
    core::{Catalog, ModuleCatalogRef, ModuleKeys},
    findings::{Finding, FindingKind},
};

/// Check the declared module catalog, marking module keys as used.
///
/// `catalog` is the primary catalog of the declared package, if both exist.
pub fn check_module_catalog(
    declared: &ModuleCatalogRef,
    catalog: Option<&mut Catalog>,
    keys: &ModuleKeys,
) -> Vec<Finding> {
    let Some(catalog) = catalog else {
        return vec![Finding::new(
            FindingKind::ModuleCatalog,
            &declared.declared_in,
            1,
            "Missing resource bundle specified in module manifest",
        )];
    };

    let mut findings = Vec::new();
    for key in &keys.mandatory {
        if !catalog.mark_used(key) {
            findings.push(Finding::new(
                FindingKind::ModuleCatalog,
                &catalog.file_path,
                1,
                format!("Missing {} NetBeans module bundle", key),
            ));
        }
    }
    for key in &keys.optional {
        catalog.mark_used(key);
    }
    findings
}
