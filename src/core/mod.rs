//! Verification engine.
//!
//! ## Pipeline
//!
//! 1. `discover`: find modules on disk and classify their files into packages
//! 2. `group`: parse every catalog and source of a group (in parallel)
//! 3. `verify` + `crate::rules`: cross-reference literals against catalogs
//!    and produce findings
//! 4. `scan`: run all groups and collect their reports
//!
//! `translation` reuses the parsed groups for the CSV round trip, and
//! `baseline` compares a scan with recorded problem counts.

pub mod baseline;
pub mod data;
pub mod discover;
pub mod extract;
pub mod group;
pub mod layer;
pub mod manifest;
pub mod options;
pub mod parsers;
pub mod scan;
pub mod translation;
pub mod verify;

pub use data::*;
pub use discover::{Discovery, DiscoveryOptions, discover_groups};
pub use group::{GroupCounts, GroupReport, ParsedGroup};
pub use options::{
    DEFAULT_FONT_IDENTIFIER, DEFAULT_INTENTIONAL_MARKER, DEFAULT_KNOWN_FONTS,
    DEFAULT_LOOKUP_IDENTIFIER, DEFAULT_MANDATORY_MODULE_KEYS, DEFAULT_OPTIONAL_MODULE_KEYS,
    DEFAULT_PRIMARY_CATALOG_NAME, DEFAULT_SUPPRESSION_MARKER, ExtractorConfig, ModuleKeys,
    ScanOptions,
};
pub use scan::{ScanReport, parse_groups, scan};
