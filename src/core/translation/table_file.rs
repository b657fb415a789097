//! CSV storage of the translation table.
//!
//! Exported fields arrive with their quotes already doubled in every column,
//! so they are written verbatim inside a pair of quotes. Reading goes through a regular
//! CSV reader, which undoes the doubling.

use std::path::Path;

use anyhow::{Context, Result};
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};

use crate::core::translation::table::{TranslationTable, header_row};

/// Write the header row and `rows` to `path`, every field quoted.
pub fn write_table(path: &Path, rows: &[Vec<String>]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_path(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;

    for row in std::iter::once(&header_row()).chain(rows) {
        writer
            .write_record(row.iter().map(|field| format!("\"{}\"", field)))
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Read a translation table, skipping its header row.
pub fn read_table(path: &Path) -> Result<TranslationTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("Malformed CSV in {}", path.display()))?;
        rows.push(record.iter().map(String::from).collect::<Vec<String>>());
    }

    TranslationTable::from_rows(rows)
        .with_context(|| format!("Invalid translation table: {}", path.display()))
}
