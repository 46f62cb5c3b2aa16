//! Textual encoding of a single tuple field.
//!
//! Fields are written by the upstream analysis as quoted string literals
//! (`"Start(bb0[0])"`), but bare tokens are accepted as well. Decoding
//! follows the usual string-literal escape grammar; encoding always emits a
//! double-quoted literal.

use std::fmt::Write;

/// Decode one field. The error is a human readable reason.
pub fn decode_field(text: &str) -> Result<String, String> {
    let text = text.trim();
    let mut chars = text.chars();
    match chars.next() {
        None => Err("empty field".to_string()),
        Some(quote @ ('"' | '\'')) => decode_quoted(chars.as_str(), quote),
        Some(_) => decode_bare(text),
    }
}

fn decode_bare(text: &str) -> Result<String, String> {
    if let Some(c) = text
        .chars()
        .find(|c| c.is_whitespace() || *c == '"' || *c == '\'' || *c == '\\')
    {
        return Err(format!("unexpected {c:?} in bare token"));
    }
    Ok(text.to_string())
}

/// `body` is everything after the opening quote.
fn decode_quoted(body: &str, quote: char) -> Result<String, String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    loop {
        let c = chars
            .next()
            .ok_or_else(|| format!("unterminated {quote} string"))?;
        match c {
            c if c == quote => break,
            '\\' => {
                let esc = chars
                    .next()
                    .ok_or_else(|| "dangling backslash".to_string())?;
                match esc {
                    '\\' => out.push('\\'),
                    '\'' => out.push('\''),
                    '"' => out.push('"'),
                    'n' => out.push('\n'),
                    't' => out.push('\t'),
                    'r' => out.push('\r'),
                    '0'..='7' => out.push(octal_escape(esc, &mut chars)),
                    'a' => out.push('\x07'),
                    'b' => out.push('\x08'),
                    'f' => out.push('\x0c'),
                    'v' => out.push('\x0b'),
                    'x' => out.push(hex_escape(&mut chars, 2)?),
                    'u' => out.push(hex_escape(&mut chars, 4)?),
                    'U' => out.push(hex_escape(&mut chars, 8)?),
                    // Unknown escapes keep their backslash.
                    other => {
                        out.push('\\');
                        out.push(other);
                    }
                }
            }
            '\n' | '\r' => return Err("newline inside string".to_string()),
            c => out.push(c),
        }
    }

    let rest = chars.as_str();
    if !rest.is_empty() {
        return Err(format!("trailing characters after string: `{rest}`"));
    }
    Ok(out)
}

/// `\NNN`: one to three octal digits, `first` already consumed.
fn octal_escape(first: char, chars: &mut std::str::Chars<'_>) -> char {
    let mut code = first.to_digit(8).unwrap_or(0);
    for _ in 0..2 {
        let mut lookahead = chars.clone();
        match lookahead.next().and_then(|c| c.to_digit(8)) {
            Some(digit) => {
                code = code * 8 + digit;
                *chars = lookahead;
            }
            None => break,
        }
    }
    // At most 0o777, always a valid scalar value.
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

fn hex_escape(chars: &mut std::str::Chars<'_>, digits: usize) -> Result<char, String> {
    let hex: String = chars.by_ref().take(digits).collect();
    if hex.len() != digits || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("invalid hex escape `{hex}`"));
    }
    let code = u32::from_str_radix(&hex, 16).map_err(|e| e.to_string())?;
    char::from_u32(code).ok_or_else(|| format!("invalid code point U+{code:X}"))
}

/// Encode one field as a double-quoted literal.
pub fn encode_field(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_quoted_tokens_from_analysis() {
        assert_eq!(decode_field("\"Start(bb0[0])\"").unwrap(), "Start(bb0[0])");
        assert_eq!(decode_field("\"'?12\"").unwrap(), "'?12");
        assert_eq!(decode_field("'bw3'").unwrap(), "bw3");
        assert_eq!(decode_field("  \"mp0\"  ").unwrap(), "mp0");
    }

    #[test]
    fn decode_bare_token() {
        assert_eq!(decode_field("mp0").unwrap(), "mp0");
        assert_eq!(decode_field("42").unwrap(), "42");
    }

    #[test]
    fn decode_escapes() {
        let cases = [
            (r#""a\tb""#, "a\tb"),
            (r#""say \"hi\"""#, "say \"hi\""),
            (r#""back\\slash""#, "back\\slash"),
            (r#""\x41\u00e9""#, "Aé"),
            (r#""keep\q""#, "keep\\q"),
            (r#"'it\'s'"#, "it's"),
            (r#""\101\0""#, "A\0"),
            (r#""\012x""#, "\nx"),
            (r#""\7\1018""#, "\x07A8"),
        ];
        for (raw, expect) in cases {
            assert_eq!(decode_field(raw).unwrap(), expect, "decoding {raw}");
        }
    }

    #[test]
    fn decode_rejects_malformed() {
        for bad in ["", "   ", "\"open", "\"a\"b", "'mixed\"", "\"\\x4\"", "two words", "\"dangling\\"] {
            assert!(decode_field(bad).is_err(), "expected failure for {bad:?}");
        }
    }

    #[test]
    fn encode_is_decodable() {
        for value in ["Start(bb0[0])", "", "tab\there", "quote\"and\\slash", "bell\x07"] {
            let encoded = encode_field(value);
            assert!(encoded.starts_with('"') && encoded.ends_with('"'));
            assert_eq!(decode_field(&encoded).unwrap(), value);
        }
    }
}
