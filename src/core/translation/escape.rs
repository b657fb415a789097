//! Text conversions between catalog values and translation tables.

/// Double embedded quote characters for a quoted table field.
pub fn escape_quotes(text: &str) -> String {
    text.replace('"', "\"\"")
}

/// Write line breaks as `\n` and `\r` escapes so a value stays on one line.
pub fn escape_line_breaks(text: &str) -> String {
    text.replace('\r', "\\r").replace('\n', "\\n")
}

/// Decode `\uXXXX` escapes into the characters they denote.
///
/// Surrogate pairs are combined; malformed or unpaired escapes are kept
/// verbatim.
pub fn decode_unicode_escapes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find("\\u") {
        out.push_str(&rest[..idx]);
        let after = &rest[idx..];

        match parse_escape(after) {
            Some(high) if (0xD800..0xDC00).contains(&high) => {
                let paired = parse_escape(&after[6..])
                    .filter(|low| (0xDC00..0xE000).contains(low))
                    .and_then(|low| {
                        char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
                    });
                match paired {
                    Some(c) => {
                        out.push(c);
                        rest = &after[12..];
                    }
                    None => {
                        out.push_str(&after[..6]);
                        rest = &after[6..];
                    }
                }
            }
            Some(code) => {
                match char::from_u32(code) {
                    Some(c) => out.push(c),
                    None => out.push_str(&after[..6]),
                }
                rest = &after[6..];
            }
            None => {
                out.push_str(&after[..2]);
                rest = &after[2..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Parse a `\uXXXX` escape at the start of `text`.
fn parse_escape(text: &str) -> Option<u32> {
    let digits = text.strip_prefix("\\u")?.get(..4)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Replace every non-ASCII character with `\uXXXX` escapes (UTF-16 units).
pub fn encode_non_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    out
}
