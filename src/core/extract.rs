//! String literal extraction.
//!
//! One forward pass over the token stream. Four trackers remember the last
//! line on which the bundle-lookup identifier, an annotation, `assert` and
//! the font identifier were seen; a literal is classified purely by
//! comparing its line with those.

use std::path::Path;

use anyhow::Result;

use crate::core::{
    ExtractorConfig, SourceModel, StringOccurrence,
    parsers::{
        read_text,
        token::{Token, TokenKind, Tokenizer, strip_delimiters},
    },
};

#[derive(Debug, Default)]
struct LineTrackers {
    lookup: Option<usize>,
    annotation: Option<usize>,
    assertion: Option<usize>,
    font: Option<usize>,
}

fn on_line(tracker: Option<usize>, line: usize) -> bool {
    tracker == Some(line)
}

/// Extract the natural-language string literals of one source text.
pub fn extract_occurrences<T: Tokenizer>(
    tokenizer: &T,
    source: &str,
    config: &ExtractorConfig,
) -> Vec<StringOccurrence> {
    let mut trackers = LineTrackers::default();
    let mut occurrences: Vec<StringOccurrence> = Vec::new();

    for token in tokenizer.tokenize(source) {
        match token.kind {
            TokenKind::Identifier => {
                if token.text == config.lookup_identifier {
                    trackers.lookup = Some(token.line);
                }
                if token.text == config.font_identifier {
                    trackers.font = Some(token.line);
                }
            }
            TokenKind::AnnotationMark => trackers.annotation = Some(token.line),
            TokenKind::AssertKeyword => trackers.assertion = Some(token.line),
            TokenKind::StringLiteral => {
                if let Some(occurrence) = classify_literal(&token, &trackers, config) {
                    occurrences.push(occurrence);
                }
            }
            TokenKind::LineComment => {
                if !config.suppression_marker.is_empty()
                    && token.text.contains(&config.suppression_marker)
                {
                    suppress_line(&mut occurrences, token.line);
                }
            }
            TokenKind::Other => {}
        }
    }

    occurrences
}

fn classify_literal(
    token: &Token<'_>,
    trackers: &LineTrackers,
    config: &ExtractorConfig,
) -> Option<StringOccurrence> {
    let text = strip_delimiters(token.text);
    let line = token.line;

    if config.skip_trivial && text.trim().chars().count() <= 1 {
        return None;
    }
    if on_line(trackers.annotation, line) || on_line(trackers.assertion, line) {
        return None;
    }
    if on_line(trackers.font, line) && config.known_fonts.iter().any(|font| font == text) {
        return None;
    }

    Some(StringOccurrence::new(
        text,
        line,
        on_line(trackers.lookup, line),
    ))
}

/// Flag the occurrences already recorded on `line` as suppressed.
fn suppress_line(occurrences: &mut [StringOccurrence], line: usize) {
    for occurrence in occurrences.iter_mut().rev() {
        if occurrence.line != line {
            break;
        }
        occurrence.suppressed = true;
    }
}

/// Read a source file and extract its occurrences.
pub fn extract_source<T: Tokenizer>(
    tokenizer: &T,
    path: &Path,
    generated: bool,
    config: &ExtractorConfig,
) -> Result<SourceModel> {
    let content = read_text(path)?;
    let occurrences = extract_occurrences(tokenizer, &content, config);
    Ok(SourceModel::new(
        path.to_string_lossy(),
        generated,
        occurrences,
    ))
}
