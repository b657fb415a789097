//! Hand-rolled Java lexer.
//!
//! Produces just enough structure for string extraction: literals, line
//! comments, identifiers, `@` and `assert`. Everything else is `Other`.
//! Block comments and whitespace are skipped but still advance the line
//! counter.

use super::token::{Token, TokenKind, Tokenizer};

const ASSERT_KEYWORD: &str = "assert";

#[derive(Debug, Clone, Copy, Default)]
pub struct JavaTokenizer;

impl Tokenizer for JavaTokenizer {
    type Tokens<'a> = JavaTokens<'a>;

    fn tokenize<'a>(&self, source: &'a str) -> JavaTokens<'a> {
        JavaTokens::new(source)
    }
}

/// Iterator over the tokens of one Java source text.
pub struct JavaTokens<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> JavaTokens<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
        }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next();
        chars.next()
    }

    /// Emit a token spanning `start..self.pos`, starting on `line`.
    fn token(&self, kind: TokenKind, start: usize, line: usize) -> Token<'a> {
        Token::new(kind, &self.source[start..self.pos], line)
    }

    /// Advance to `end`, counting the line breaks passed over.
    fn advance_to(&mut self, end: usize) {
        self.line += count_line_breaks(&self.source[self.pos..end]);
        self.pos = end;
    }

    fn line_comment(&mut self) -> Token<'a> {
        let start = self.pos;
        let len = self.rest().find(['\n', '\r']).unwrap_or(self.rest().len());
        self.pos += len;
        self.token(TokenKind::LineComment, start, self.line)
    }

    fn block_comment(&mut self) {
        let end = match self.rest()[2..].find("*/") {
            Some(idx) => self.pos + 2 + idx + 2,
            None => self.source.len(),
        };
        self.advance_to(end);
    }

    fn string_literal(&mut self) -> Token<'a> {
        let start = self.pos;
        let line = self.line;

        if self.rest().starts_with("\"\"\"") {
            let end = find_text_block_end(&self.rest()[3..])
                .map(|idx| self.pos + 3 + idx)
                .unwrap_or(self.source.len());
            self.advance_to(end);
            return self.token(TokenKind::StringLiteral, start, line);
        }

        self.pos += 1;
        let mut chars = self.rest().char_indices();
        let mut end = self.source.len();
        while let Some((idx, c)) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some((next_idx, '\n' | '\r')) => {
                        // Escapes never span lines: the literal is unterminated.
                        end = self.pos + next_idx;
                        break;
                    }
                    Some(_) => {}
                    None => break,
                },
                '"' => {
                    end = self.pos + idx + 1;
                    break;
                }
                '\n' | '\r' => {
                    end = self.pos + idx;
                    break;
                }
                _ => {}
            }
        }
        self.pos = end;
        self.token(TokenKind::StringLiteral, start, line)
    }

    fn char_literal(&mut self) -> Token<'a> {
        let start = self.pos;
        self.pos += 1;
        let mut chars = self.rest().char_indices();
        let mut end = self.source.len();
        while let Some((idx, c)) = chars.next() {
            match c {
                '\\' => {
                    if let Some((_, '\n' | '\r')) | None = chars.next() {
                        end = self.pos + idx + 1;
                        break;
                    }
                }
                '\'' => {
                    end = self.pos + idx + 1;
                    break;
                }
                '\n' | '\r' => {
                    end = self.pos + idx;
                    break;
                }
                _ => {}
            }
        }
        self.pos = end;
        self.token(TokenKind::Other, start, self.line)
    }

    fn word(&mut self, kind_of: impl Fn(&str) -> TokenKind) -> Token<'a> {
        let start = self.pos;
        let len = self
            .rest()
            .find(|c: char| !is_identifier_part(c))
            .unwrap_or(self.rest().len());
        self.pos += len;
        let text = &self.source[start..self.pos];
        Token::new(kind_of(text), text, self.line)
    }

    fn single(&mut self, kind: TokenKind, c: char) -> Token<'a> {
        let start = self.pos;
        self.pos += c.len_utf8();
        self.token(kind, start, self.line)
    }
}

impl<'a> Iterator for JavaTokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            let c = self.peek()?;
            match c {
                '\n' => {
                    self.pos += 1;
                    self.line += 1;
                }
                '\r' => {
                    self.pos += 1;
                    if self.peek() == Some('\n') {
                        self.pos += 1;
                    }
                    self.line += 1;
                }
                c if c.is_whitespace() => self.pos += c.len_utf8(),
                '/' if self.peek_second() == Some('/') => return Some(self.line_comment()),
                '/' if self.peek_second() == Some('*') => self.block_comment(),
                '"' => return Some(self.string_literal()),
                '\'' => return Some(self.char_literal()),
                '@' => return Some(self.single(TokenKind::AnnotationMark, c)),
                c if is_identifier_start(c) => {
                    return Some(self.word(|text| {
                        if text == ASSERT_KEYWORD {
                            TokenKind::AssertKeyword
                        } else {
                            TokenKind::Identifier
                        }
                    }));
                }
                c if c.is_ascii_digit() => return Some(self.word(|_| TokenKind::Other)),
                c => return Some(self.single(TokenKind::Other, c)),
            }
        }
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Byte offset just past the closing `"""` of a text block body.
fn find_text_block_end(body: &str) -> Option<usize> {
    let bytes = body.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' if body[i..].starts_with("\"\"\"") => return Some(i + 3),
            _ => i += 1,
        }
    }
    None
}

/// Count line breaks, treating `\r\n` as one.
fn count_line_breaks(text: &str) -> usize {
    let bytes = text.as_bytes();
    bytes
        .iter()
        .enumerate()
        .filter(|&(i, &b)| b == b'\n' || (b == b'\r' && bytes.get(i + 1) != Some(&b'\n')))
        .count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds_and_texts(source: &str) -> Vec<(TokenKind, &str, usize)> {
        JavaTokenizer
            .tokenize(source)
            .map(|t| (t.kind, t.text, t.line))
            .collect()
    }

    fn strings(source: &str) -> Vec<(&str, usize)> {
        JavaTokenizer
            .tokenize(source)
            .filter(|t| t.kind == TokenKind::StringLiteral)
            .map(|t| (t.text, t.line))
            .collect()
    }

    #[test]
    fn test_simple_statement() {
        let tokens = kinds_and_texts(r#"String s = "Hello";"#);
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Identifier, "String", 1),
                (TokenKind::Identifier, "s", 1),
                (TokenKind::Other, "=", 1),
                (TokenKind::StringLiteral, "\"Hello\"", 1),
                (TokenKind::Other, ";", 1),
            ]
        );
    }

    #[test]
    fn test_line_comment_stops_at_line_break() {
        let tokens = kinds_and_texts("x(\"a b\"); // NOI18N\ny();");
        assert!(tokens.contains(&(TokenKind::LineComment, "// NOI18N", 1)));
        assert!(tokens.contains(&(TokenKind::Identifier, "y", 2)));
    }

    #[test]
    fn test_block_comment_is_skipped_but_counts_lines() {
        let source = "/* \"not a string\"\n * still comment\n */\nfoo(\"real\");";
        assert_eq!(strings(source), vec![("\"real\"", 4)]);
    }

    #[test]
    fn test_escaped_quote_inside_string() {
        let source = r#"s = "say \"hi\" now";"#;
        assert_eq!(strings(source), vec![(r#""say \"hi\" now""#, 1)]);
    }

    #[test]
    fn test_unterminated_string_ends_at_line_break() {
        let source = "s = \"broken\nt = \"fine\";";
        assert_eq!(strings(source), vec![("\"broken", 1), ("\"fine\"", 2)]);
    }

    #[test]
    fn test_char_literals_are_not_strings() {
        let source = r#"char q = '"'; char e = '\''; s = "ok";"#;
        assert_eq!(strings(source), vec![("\"ok\"", 1)]);
    }

    #[test]
    fn test_annotation_and_assert() {
        let tokens = kinds_and_texts("@SuppressWarnings(\"unchecked\")\nassert x : \"msg\";");
        assert_eq!(tokens[0], (TokenKind::AnnotationMark, "@", 1));
        assert_eq!(tokens[1], (TokenKind::Identifier, "SuppressWarnings", 1));
        assert!(tokens.contains(&(TokenKind::AssertKeyword, "assert", 2)));
    }

    #[test]
    fn test_text_block_keeps_start_line() {
        let source = "s = \"\"\"\n    Hello \"quoted\"\n    \"\"\";\nt = \"after\";";
        let found = strings(source);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].1, 1);
        assert!(found[0].0.starts_with("\"\"\""));
        assert!(found[0].0.ends_with("\"\"\""));
        assert_eq!(found[1], ("\"after\"", 4));
    }

    #[test]
    fn test_crlf_line_endings() {
        let source = "a = \"one\";\r\nb = \"two\";\r\n// c\r\nd = \"three\";";
        assert_eq!(
            strings(source),
            vec![("\"one\"", 1), ("\"two\"", 2), ("\"three\"", 4)]
        );
    }

    #[test]
    fn test_numbers_and_unicode_identifiers() {
        let tokens = kinds_and_texts("double größe = 1.5e3;");
        assert_eq!(tokens[1], (TokenKind::Identifier, "größe", 1));
        assert!(tokens.contains(&(TokenKind::Other, "1", 1)));
    }

    #[test]
    fn test_count_line_breaks() {
        assert_eq!(count_line_breaks("a\nb\r\nc\rd"), 3);
        assert_eq!(count_line_breaks("no breaks"), 0);
    }
}
