//! Translation round trip.
//!
//! - `export`: primary catalogs (plus existing translations) to table rows
//! - `import`: a translated table back to per-locale catalogs
//! - `table`: the five-column translation table
//! - `table_file`: CSV reading and writing of the table
//! - `escape`: quote doubling and `\uXXXX` conversions

pub mod escape;
pub mod export;
pub mod import;
pub mod table;
pub mod table_file;

pub use export::export_rows;
pub use import::{
    CatalogAction, GeneratedCatalog, ImportOptions, ImportPlan, UnmatchedPackage, plan_import,
};
pub use table::{TableColumn, TranslationTable, header_row};
pub use table_file::{read_table, write_table};
