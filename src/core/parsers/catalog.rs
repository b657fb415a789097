//! Resource bundle (`.properties`) parser.
//!
//! A line-oriented state machine: a trailing `\` continues the value on the
//! next physical line, `#` starts a comment, and a comment carrying the
//! intentional marker flags the next entry as deliberately unreferenced.

use std::path::Path;

use anyhow::Result;

use super::read_text;
use crate::core::{Catalog, CatalogEntry, CatalogWarning};

const CONTINUATION_MARKER: char = '\\';
const COMMENT_PREFIX: char = '#';

enum State {
    Normal,
    /// Appending lines to the entry with this key. `None` when the line that
    /// started the continuation was malformed, so its tail is swallowed.
    InContinuation { target: Option<String> },
}

/// Read and parse a catalog file.
pub fn parse_catalog_file(path: &Path, intentional_marker: &str) -> Result<Catalog> {
    let content = read_text(path)?;
    Ok(parse_catalog(
        &content,
        &path.to_string_lossy(),
        intentional_marker,
    ))
}

/// Parse catalog text into an ordered key → entry mapping.
///
/// Malformed lines (no `=`, or an empty key) are skipped and reported in
/// `Catalog::warnings`.
pub fn parse_catalog(content: &str, file_path: &str, intentional_marker: &str) -> Catalog {
    let mut catalog = Catalog::new(file_path);
    let mut state = State::Normal;
    let mut pending_intentional = false;

    for (index, raw) in content.lines().enumerate() {
        let line = index + 1;

        if let State::InContinuation { target } = &state {
            let continues = ends_with_continuation(raw);
            if let Some(key) = target
                && let Some(entry) = catalog.entries.get_mut(key)
            {
                entry.value.push_str(line_body(raw.trim(), continues));
            }
            if !continues {
                state = State::Normal;
            }
            continue;
        }

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with(COMMENT_PREFIX) {
            if !intentional_marker.is_empty() && trimmed.contains(intentional_marker) {
                pending_intentional = true;
            }
            continue;
        }

        let intentional = std::mem::take(&mut pending_intentional);
        let continues = ends_with_continuation(trimmed);

        let target = match trimmed.find('=') {
            Some(eq) if !trimmed[..eq].trim().is_empty() => {
                let key = trimmed[..eq].trim();
                let value = line_body(&trimmed[eq + 1..], continues);
                let mut entry = CatalogEntry::new(key, value, line);
                entry.intentional = intentional;
                catalog.insert(entry);
                Some(key.to_string())
            }
            _ => {
                catalog.warnings.push(CatalogWarning {
                    file_path: file_path.to_string(),
                    line,
                    text: trimmed.to_string(),
                });
                None
            }
        };

        if continues {
            state = State::InContinuation { target };
        }
    }

    catalog
}

fn ends_with_continuation(line: &str) -> bool {
    line.trim_end().ends_with(CONTINUATION_MARKER)
}

/// Text a line contributes to a value: the continuation marker is dropped.
fn line_body(text: &str, continues: bool) -> &str {
    if continues {
        let text = text.trim_end();
        &text[..text.len() - CONTINUATION_MARKER.len_utf8()]
    } else {
        text
    }
}
