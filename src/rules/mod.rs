//! Rule implementations for bundlecheck.
//!
//! This module contains pure functions that turn cross-referenced sources
//! and catalogs into findings. Each function takes only the specific inputs
//! it needs and returns plain `Finding`s.
//!
//! ## Module Structure
//!
//! - `missing`: Literals not found in any catalog
//! - `redundant`: Suppression markers on literals that are catalog keys
//! - `unused`: Catalog entries nothing refers to
//! - `module_catalog`: The module catalog declared in the manifest
//! - `references`: Catalog keys referenced from the layer file

pub mod missing;
pub mod module_catalog;
pub mod redundant;
pub mod references;
pub mod unused;

pub use missing::check_missing_keys;
pub use module_catalog::check_module_catalog;
pub use redundant::check_redundant_suppressions;
pub use references::check_references;
pub use unused::check_unused_entries;
