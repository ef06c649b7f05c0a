//! Lexical rules shared by the encoder and the decoder.
//!
//! Three concerns live here:
//!
//! - the quoting predicates deciding when keys and string values can be
//!   emitted bare,
//! - escaping and unescaping of quoted runs (the escape alphabet is
//!   exactly `\"`, `\\`, `\n`, `\r`, `\t`),
//! - the quote-aware scanners ([`split_delimited`], [`find_unquoted`],
//!   [`find_closing_quote`]) used wherever quoting interacts with
//!   structural characters. They share one invariant: inside quotes, a
//!   backslash consumes the following character atomically.

use crate::error::{Error, Result};
use crate::value::{Number, Value};

/// Whether a key can be emitted without quotes: `[A-Za-z_][A-Za-z0-9_.]*`.
pub(crate) fn is_identifier_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

/// A leading-zero integer (`0\d+`). These decode as strings, so the
/// encoder must quote them to keep the source text intact.
pub(crate) fn is_leading_zero_integer(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() >= 2 && bytes[0] == b'0' && bytes[1..].iter().all(u8::is_ascii_digit)
}

/// Whether a token reads as a number: `-?\d+(\.\d+)?(e[+-]?\d+)?`
/// (case-insensitive), or a leading-zero integer.
pub(crate) fn is_numeric_like(token: &str) -> bool {
    if is_leading_zero_integer(token) {
        return true;
    }
    let bytes = token.as_bytes();
    let mut i = 0;
    if bytes.first() == Some(&b'-') {
        i = 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == int_start {
        return false;
    }
    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start {
            return false;
        }
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }
    i == bytes.len()
}

/// Whether a string value must be quoted under the active `delimiter`.
///
/// A value is safe bare only when it is non-empty, already trimmed, not a
/// literal, not numeric-looking, free of structural characters and the
/// active delimiter, and does not start with `-`.
pub(crate) fn string_needs_quoting(s: &str, delimiter: char) -> bool {
    if s.is_empty() || s != s.trim() {
        return true;
    }
    if matches!(s, "true" | "false" | "null") {
        return true;
    }
    if is_numeric_like(s) || s.starts_with('-') {
        return true;
    }
    s.chars().any(|c| {
        c == delimiter
            || matches!(
                c,
                ':' | '"' | '\\' | '[' | ']' | '{' | '}' | '\n' | '\r' | '\t'
            )
    })
}

/// Appends `s` as a quoted run, applying the escape alphabet. Every other
/// character, including arbitrary Unicode, passes through literally.
pub(crate) fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
}

/// Appends a key, quoting it unless it matches the identifier pattern.
pub(crate) fn write_key(out: &mut String, key: &str) {
    if is_identifier_key(key) {
        out.push_str(key);
    } else {
        write_quoted(out, key);
    }
}

/// Appends a string value, quoting it per [`string_needs_quoting`].
pub(crate) fn write_string(out: &mut String, s: &str, delimiter: char) {
    if string_needs_quoting(s, delimiter) {
        write_quoted(out, s);
    } else {
        out.push_str(s);
    }
}

/// Reverses [`write_quoted`] on the contents of a quoted run (without the
/// surrounding quotes). Unknown escapes are lexical errors.
pub(crate) fn unescape(s: &str, line: usize) -> Result<String> {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => return Err(Error::InvalidEscape { line, escape: other }),
            None => return Err(Error::UnterminatedString { line }),
        }
    }
    Ok(out)
}

/// Parses a token that must be a string literal: a complete quoted run, or
/// bare text taken verbatim. Used for tabular field names.
pub(crate) fn parse_string_literal(token: &str, line: usize) -> Result<String> {
    if !token.starts_with('"') {
        return Ok(token.to_string());
    }
    let close = find_closing_quote(token, 0).ok_or(Error::UnterminatedString { line })?;
    if close != token.len() - 1 {
        return Err(Error::syntax(
            line,
            "unexpected characters after closing quote",
        ));
    }
    unescape(&token[1..close], line)
}

/// Parses a trimmed token into a primitive [`Value`].
///
/// Quoted runs must span the whole token. Bare tokens resolve to the
/// literals `true`/`false`/`null`, then to a number when numeric-like
/// (leading-zero integers excepted), and otherwise stay strings. The
/// empty token is the empty string.
pub(crate) fn parse_primitive(token: &str, line: usize) -> Result<Value> {
    let token = token.trim();
    if token.is_empty() {
        return Ok(Value::String(String::new()));
    }
    if token.starts_with('"') {
        let close = find_closing_quote(token, 0).ok_or(Error::UnterminatedString { line })?;
        if close != token.len() - 1 {
            return Err(Error::syntax(
                line,
                "unexpected characters after closing quote",
            ));
        }
        return Ok(Value::String(unescape(&token[1..close], line)?));
    }
    match token {
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        "null" => return Ok(Value::Null),
        _ => {}
    }
    if is_numeric_like(token) && !is_leading_zero_integer(token) {
        if !token.contains(&['.', 'e', 'E'][..]) {
            if let Ok(i) = token.parse::<i64>() {
                return Ok(Value::Number(Number::Integer(i)));
            }
        }
        if let Ok(f) = token.parse::<f64>() {
            return Ok(Value::Number(Number::Float(f)));
        }
    }
    Ok(Value::String(token.to_string()))
}

/// Splits `s` on `delimiter` while respecting one level of double-quoted
/// runs. Each piece is trimmed. Leading and trailing empty pieces are
/// preserved; an entirely empty input yields no pieces.
pub(crate) fn split_delimited(s: &str, delimiter: char) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if in_quotes {
            current.push(c);
            match c {
                '\\' => {
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                }
                '"' => in_quotes = false,
                _ => {}
            }
        } else if c == '"' {
            in_quotes = true;
            current.push(c);
        } else if c == delimiter {
            pieces.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(c);
        }
    }
    pieces.push(current.trim().to_string());
    pieces
}

/// Byte index of the first `target` outside quotes, tracking the same
/// quote state as [`split_delimited`].
pub(crate) fn find_unquoted(s: &str, target: char) -> Option<usize> {
    let mut in_quotes = false;
    let mut chars = s.char_indices();
    while let Some((i, c)) = chars.next() {
        if in_quotes {
            match c {
                '\\' => {
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => {}
            }
        } else if c == '"' {
            in_quotes = true;
        } else if c == target {
            return Some(i);
        }
    }
    None
}

/// Byte index of the unescaped `"` closing the run opened at `open`.
pub(crate) fn find_closing_quote(s: &str, open: usize) -> Option<usize> {
    let mut chars = s[open + 1..].char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '"' => return Some(open + 1 + i),
            _ => {}
        }
    }
    None
}
