//! Cross-reference pass: match source literals against catalog keys.
//!
//! Matching is text-as-key for every literal, whether or not it sits next to
//! a bundle lookup. Lookup adjacency only changes the finding kind later on
//! (see `rules::missing`).

use crate::core::{PackageCatalogs, SourceModel};

/// Mark every occurrence of `sources` found in the package's catalogs.
///
/// Each hit increments the matching entry's usage count in the primary and
/// every secondary catalog defining the key.
pub fn cross_reference(sources: &mut [SourceModel], catalogs: &mut PackageCatalogs) {
    for source in sources.iter_mut() {
        for occurrence in &mut source.occurrences {
            if catalogs.mark_used(&occurrence.text) {
                occurrence.found_in_catalog = true;
            }
        }
    }
}
