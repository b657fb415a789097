//! Core data types used across the scan pipeline.
//!
//! ## Module Structure
//!
//! - `catalog`: Parsed resource bundles (Catalog, CatalogEntry, CatalogWarning)
//! - `input`: Group/package descriptors supplied by discovery
//! - `occurrence`: String literals extracted from sources

pub mod catalog;
pub mod input;
pub mod occurrence;

pub use catalog::{Catalog, CatalogEntry, CatalogWarning, PackageCatalogs, TranslatedCatalog};
pub use input::{
    CatalogReference, GroupInput, GroupMetadata, ModuleCatalogRef, PackageInput, ReferenceSet,
    SourceFile, TranslatedFile,
};
pub use occurrence::{SourceModel, StringOccurrence};
