//! Token stream abstraction consumed by the extractor.
//!
//! The extractor only needs to tell string literals, line comments and a few
//! identifiers apart, so any source language can be plugged in by
//! implementing [`Tokenizer`].

/// Lexical classes the extractor cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A string literal, delimiters included.
    StringLiteral,
    /// A `//` comment up to (not including) the line break.
    LineComment,
    Identifier,
    /// The `@` introducing an annotation.
    AnnotationMark,
    /// The `assert` keyword.
    AssertKeyword,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Raw token text, borrowed from the source.
    pub text: &'a str,
    /// Line the token starts on (1-indexed).
    pub line: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, line: usize) -> Self {
        Self { kind, text, line }
    }
}

/// Splits source text into a stream of [`Token`]s.
pub trait Tokenizer {
    type Tokens<'a>: Iterator<Item = Token<'a>>;

    fn tokenize<'a>(&self, source: &'a str) -> Self::Tokens<'a>;
}

/// Remove string delimiters from a literal's raw text.
///
/// Handles `"..."`, text blocks (`"""..."""`) and unterminated literals
/// (no closing quote).
pub fn strip_delimiters(raw: &str) -> &str {
    if raw.len() >= 6 && raw.starts_with("\"\"\"") && raw.ends_with("\"\"\"") {
        return &raw[3..raw.len() - 3];
    }
    let inner = raw.strip_prefix('"').unwrap_or(raw);
    inner.strip_suffix('"').unwrap_or(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_delimiters() {
        assert_eq!(strip_delimiters("\"Hello\""), "Hello");
        assert_eq!(strip_delimiters("\"\""), "");
        assert_eq!(strip_delimiters("\"unterminated"), "unterminated");
        assert_eq!(strip_delimiters("\"\"\"\nblock\n\"\"\""), "\nblock\n");
        assert_eq!(strip_delimiters("\"a\\\"b\""), "a\\\"b");
    }
}
