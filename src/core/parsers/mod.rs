//! Parsers for source files and resource bundles.
//!
//! - `catalog`: `.properties` resource bundle parser
//! - `java`: Java lexer implementing the `Tokenizer` abstraction
//! - `token`: token stream abstraction consumed by the extractor

use std::{fs, path::Path};

use anyhow::{Context, Result};

pub mod catalog;
pub mod java;
pub mod token;

/// Read a whole file as text. Invalid UTF-8 sequences are replaced rather
/// than rejected, so legacy Latin-1 files still scan.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
