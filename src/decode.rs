//! TOON decoding.
//!
//! Recursive descent over the scanned lines. The entry rule inspects the
//! first line: a leading `[` with a top-level colon makes the document a
//! root array; a single line without a top-level colon is one primitive;
//! anything else is an object at depth 0.
//!
//! Array headers declare their length, delimiter and (for tabular form)
//! field list; the body must produce exactly the declared count. Strict
//! mode additionally rejects surplus body lines and blank lines inside
//! array bodies.

use crate::error::{Error, Result};
use crate::options::{DecodeOptions, Delimiter};
use crate::scan::{scan, BlankLine, ParsedLine};
use crate::token::{
    find_closing_quote, find_unquoted, parse_primitive, parse_string_literal, split_delimited,
    unescape,
};
use crate::value::Value;
use crate::Map;

/// Decodes TOON text into a value tree.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{decode, toon, DecodeOptions};
///
/// let value = decode("id: 123\ntags[2]: a,b", &DecodeOptions::default()).unwrap();
/// assert_eq!(value, toon!({"id": 123, "tags": ["a", "b"]}));
/// ```
///
/// # Errors
///
/// Returns an [`Error`] describing the first structural problem found,
/// with the 1-based line number where one applies.
pub fn decode(input: &str, options: &DecodeOptions) -> Result<Value> {
    let indent = options.indent.max(1);
    let scanned = scan(input, indent, options.strict)?;
    if scanned.lines.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut decoder = Decoder {
        lines: scanned.lines,
        blanks: scanned.blanks,
        pos: 0,
        strict: options.strict,
    };
    let value = decoder.decode_root()?;

    if let Some(line) = decoder.peek() {
        return Err(Error::syntax(
            line.number,
            "unexpected content after document root",
        ));
    }
    Ok(value)
}

/// One parsed array header line.
#[derive(Debug)]
struct ArrayHeader {
    /// Key preceding the bracket; `None` for root arrays.
    key: Option<String>,
    /// Declared element count.
    length: usize,
    delimiter: Delimiter,
    /// Field list for tabular form.
    fields: Option<Vec<String>>,
    /// Trimmed text after the colon: the values of an inline array.
    inline: Option<String>,
    line: usize,
}

struct Decoder<'a> {
    lines: Vec<ParsedLine<'a>>,
    blanks: Vec<BlankLine>,
    pos: usize,
    strict: bool,
}

impl<'a> Decoder<'a> {
    fn peek(&self) -> Option<ParsedLine<'a>> {
        self.lines.get(self.pos).copied()
    }

    /// The next line only if it sits exactly at `depth`.
    fn peek_at_depth(&self, depth: usize) -> Option<ParsedLine<'a>> {
        self.peek().filter(|line| line.depth == depth)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn last_consumed_line(&self) -> usize {
        if self.pos == 0 {
            0
        } else {
            self.lines[self.pos - 1].number
        }
    }

    fn decode_root(&mut self) -> Result<Value> {
        let first = self.lines[0];
        if first.content.starts_with('[') && find_unquoted(first.content, ':').is_some() {
            self.advance();
            let header = parse_array_header(first.content, first.number)?.ok_or_else(|| {
                Error::invalid_header(first.number, "malformed root array header")
            })?;
            self.decode_array_body(&header, first.depth)
        } else if self.lines.len() == 1 && find_unquoted(first.content, ':').is_none() {
            self.advance();
            parse_primitive(first.content, first.number)
        } else {
            self.decode_object(0)
        }
    }

    fn decode_object(&mut self, depth: usize) -> Result<Value> {
        let mut map = Map::new();
        self.decode_object_fields(&mut map, depth, false)?;
        Ok(Value::Object(map))
    }

    /// Reads key-value lines at exactly `depth` into `map`, stopping when
    /// the depth breaks or (inside list items) a `- ` line appears.
    fn decode_object_fields(
        &mut self,
        map: &mut Map,
        depth: usize,
        stop_at_list_item: bool,
    ) -> Result<()> {
        while let Some(line) = self.peek_at_depth(depth) {
            if stop_at_list_item && (line.content.starts_with("- ") || line.content == "-") {
                break;
            }
            self.advance();
            self.decode_field(map, line, depth)?;
        }
        Ok(())
    }

    fn decode_field(&mut self, map: &mut Map, line: ParsedLine<'a>, depth: usize) -> Result<()> {
        if let Some(header) = parse_array_header(line.content, line.number)? {
            // `key` is None only for keyless (root-style) headers; a quoted
            // empty key is a real key
            let key = match header.key.as_deref() {
                Some(key) => key.to_string(),
                None => {
                    return Err(Error::syntax(
                        line.number,
                        "array header inside an object requires a key",
                    ))
                }
            };
            let value = self.decode_array_body(&header, depth)?;
            map.insert(key, value);
            return Ok(());
        }

        let (key, rest) = split_key_value(line.content, line.number)?;
        let value = if rest.is_empty() {
            self.decode_nested_or_empty(depth)?
        } else {
            parse_primitive(rest, line.number)?
        };
        map.insert(key, value);
        Ok(())
    }

    /// After an empty `key:`, a deeper next line opens a nested object;
    /// otherwise the value is the empty object.
    fn decode_nested_or_empty(&mut self, depth: usize) -> Result<Value> {
        match self.peek() {
            Some(next) if next.depth > depth => self.decode_object(depth + 1),
            _ => Ok(Value::Object(Map::new())),
        }
    }

    fn decode_array_body(&mut self, header: &ArrayHeader, depth: usize) -> Result<Value> {
        if let Some(fields) = &header.fields {
            if header.inline.is_some() {
                return Err(Error::invalid_header(
                    header.line,
                    "unexpected values after tabular header",
                ));
            }
            return self.decode_tabular_rows(header, fields, depth + 1);
        }

        if let Some(inline) = &header.inline {
            let tokens = split_delimited(inline, header.delimiter.as_char());
            if tokens.len() != header.length {
                return Err(Error::LengthMismatch {
                    line: header.line,
                    expected: header.length,
                    found: tokens.len(),
                });
            }
            let mut items = Vec::with_capacity(tokens.len());
            for token in &tokens {
                items.push(parse_primitive(token, header.line)?);
            }
            return Ok(Value::Array(items));
        }

        if header.length == 0 {
            return Ok(Value::Array(Vec::new()));
        }
        self.decode_list_items(header, depth + 1)
    }

    fn decode_tabular_rows(
        &mut self,
        header: &ArrayHeader,
        fields: &[String],
        row_depth: usize,
    ) -> Result<Value> {
        let mut rows = Vec::with_capacity(header.length);
        let mut first_line = None;
        let mut last_line = header.line;

        for _ in 0..header.length {
            let line = match self.peek_at_depth(row_depth) {
                Some(line) => line,
                None => {
                    return Err(Error::LengthMismatch {
                        line: last_line,
                        expected: header.length,
                        found: rows.len(),
                    })
                }
            };
            self.advance();
            first_line.get_or_insert(line.number);
            last_line = line.number;

            let tokens = split_delimited(line.content, header.delimiter.as_char());
            if tokens.len() != fields.len() {
                return Err(row_width_error(
                    line,
                    fields.len(),
                    tokens.len(),
                    header.delimiter,
                ));
            }
            let mut row = Map::with_capacity(fields.len());
            for (field, token) in fields.iter().zip(&tokens) {
                row.insert(field.clone(), parse_primitive(token, line.number)?);
            }
            rows.push(Value::Object(row));
        }

        if self.strict {
            if let Some(extra) = self.peek_at_depth(row_depth) {
                // key-value lines carry a top-level colon, rows never do;
                // a colon-free line here is a surplus row
                if find_unquoted(extra.content, ':').is_none() {
                    return Err(Error::LengthMismatch {
                        line: extra.number,
                        expected: header.length,
                        found: header.length + 1,
                    });
                }
            }
            self.check_blanks(first_line, last_line)?;
        }
        Ok(Value::Array(rows))
    }

    fn decode_list_items(&mut self, header: &ArrayHeader, item_depth: usize) -> Result<Value> {
        let mut items = Vec::with_capacity(header.length);
        let mut first_line = None;
        let mut last_line = header.line;

        for _ in 0..header.length {
            let line = match self.peek_at_depth(item_depth) {
                Some(line) if line.content.starts_with("- ") || line.content == "-" => line,
                _ => {
                    return Err(Error::LengthMismatch {
                        line: last_line,
                        expected: header.length,
                        found: items.len(),
                    })
                }
            };
            self.advance();
            first_line.get_or_insert(line.number);
            items.push(self.decode_list_item(line, item_depth)?);
            last_line = self.last_consumed_line();
        }

        if self.strict {
            if let Some(extra) = self.peek_at_depth(item_depth) {
                if extra.content.starts_with("- ") || extra.content == "-" {
                    return Err(Error::LengthMismatch {
                        line: extra.number,
                        expected: header.length,
                        found: header.length + 1,
                    });
                }
            }
            self.check_blanks(first_line, last_line)?;
        }
        Ok(Value::Array(items))
    }

    fn decode_list_item(&mut self, line: ParsedLine<'a>, item_depth: usize) -> Result<Value> {
        if line.content == "-" {
            return Ok(Value::Object(Map::new()));
        }
        let rest = &line.content[2..];

        if let Some(nested) = parse_array_header(rest, line.number)? {
            match nested.key.as_deref() {
                None => {
                    // the item is the array itself
                    return self.decode_array_body(&nested, item_depth);
                }
                Some(key) => {
                    // an array header opens the item's field list; its body
                    // and the remaining fields sit two levels below the item
                    let key = key.to_string();
                    let mut map = Map::new();
                    let value = self.decode_array_body(&nested, item_depth + 1)?;
                    map.insert(key, value);
                    self.decode_object_fields(&mut map, item_depth + 2, true)?;
                    return Ok(Value::Object(map));
                }
            }
        }

        if find_unquoted(rest, ':').is_some() {
            let (key, kv_rest) = split_key_value(rest, line.number)?;
            let mut map = Map::new();
            let first = if kv_rest.is_empty() {
                // children of a structured first field sit below the
                // follow-field level
                match self.peek() {
                    Some(next) if next.depth > item_depth + 1 => {
                        self.decode_object(item_depth + 2)?
                    }
                    _ => Value::Object(Map::new()),
                }
            } else {
                parse_primitive(kv_rest, line.number)?
            };
            map.insert(key, first);
            self.decode_object_fields(&mut map, item_depth + 1, true)?;
            return Ok(Value::Object(map));
        }

        parse_primitive(rest, line.number)
    }

    /// Strict mode: no blank line may sit strictly between the first and
    /// last body line of an array.
    fn check_blanks(&self, first_line: Option<usize>, last_line: usize) -> Result<()> {
        if let Some(first) = first_line {
            for blank in &self.blanks {
                if blank.number > first && blank.number < last_line {
                    return Err(Error::BlankInArray { line: blank.number });
                }
            }
        }
        Ok(())
    }
}

/// Splits a `key: rest` line, handling quoted keys. The returned rest is
/// trimmed.
fn split_key_value<'a>(content: &'a str, line: usize) -> Result<(String, &'a str)> {
    if content.starts_with('"') {
        let close = find_closing_quote(content, 0).ok_or(Error::UnterminatedString { line })?;
        let key = unescape(&content[1..close], line)?;
        let after = content[close + 1..].trim_start();
        let rest = after.strip_prefix(':').ok_or(Error::MissingColon { line })?;
        Ok((key, rest.trim()))
    } else {
        let colon = find_unquoted(content, ':').ok_or(Error::MissingColon { line })?;
        let key = content[..colon].trim_end().to_string();
        Ok((key, content[colon + 1..].trim()))
    }
}

/// Tries to read `content` as an array header:
/// `key? '[' '#'? N ('\t'|'|')? ']' ('{' fields '}')? ':' rest?`.
///
/// Returns `Ok(None)` when the line is not header-shaped at all. Once the
/// bracket-and-colon structure is present, malformed pieces (bad length,
/// unclosed field list) are hard errors.
///
/// A leading quote is a quoted key, not a header, unless the closing
/// quote is immediately followed by `[` — that form is what the encoder
/// emits for arrays under non-identifier keys.
fn parse_array_header(content: &str, line: usize) -> Result<Option<ArrayHeader>> {
    let (bracket_open, quoted_key) = if content.starts_with('"') {
        let close = match find_closing_quote(content, 0) {
            Some(close) => close,
            None => return Ok(None),
        };
        if !content[close + 1..].starts_with('[') {
            return Ok(None);
        }
        (close + 1, Some(unescape(&content[1..close], line)?))
    } else {
        match find_unquoted(content, '[') {
            Some(idx) => (idx, None),
            None => return Ok(None),
        }
    };

    let bracket_close = match content[bracket_open..].find(']') {
        Some(rel) => bracket_open + rel,
        None => return Ok(None),
    };

    let mut segment = &content[bracket_open + 1..bracket_close];
    // optional `#` length marker; accepted regardless of encode options
    if let Some(stripped) = segment.strip_prefix('#') {
        segment = stripped;
    }
    let mut delimiter = Delimiter::Comma;
    if let Some(stripped) = segment.strip_suffix('\t') {
        delimiter = Delimiter::Tab;
        segment = stripped;
    } else if let Some(stripped) = segment.strip_suffix('|') {
        delimiter = Delimiter::Pipe;
        segment = stripped;
    }

    let mut after = &content[bracket_close + 1..];
    let mut fields = None;
    if let Some(list_start) = after.strip_prefix('{') {
        let close = find_unquoted(list_start, '}')
            .ok_or_else(|| Error::invalid_header(line, "unclosed field list"))?;
        let list = &list_start[..close];
        let mut names = Vec::new();
        for raw in split_delimited(list, delimiter.as_char()) {
            names.push(parse_string_literal(&raw, line)?);
        }
        fields = Some(names);
        after = &list_start[close + 1..];
    }

    let rest = match after.strip_prefix(':') {
        Some(rest) => rest,
        None => {
            if fields.is_some() {
                return Err(Error::invalid_header(line, "expected `:` after field list"));
            }
            return Ok(None);
        }
    };

    let length: usize = segment.parse().map_err(|_| {
        Error::invalid_header(line, format!("cannot parse length from `{}`", segment))
    })?;

    let key = match quoted_key {
        Some(key) => Some(key),
        None => {
            let key = content[..bracket_open].trim_end();
            if key.is_empty() {
                None
            } else {
                Some(key.to_string())
            }
        }
    };

    let trimmed = rest.trim();
    let inline = if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    };

    Ok(Some(ArrayHeader {
        key,
        length,
        delimiter,
        fields,
        inline,
        line,
    }))
}

fn row_width_error(
    line: ParsedLine<'_>,
    expected: usize,
    found: usize,
    declared: Delimiter,
) -> Error {
    for alternative in [Delimiter::Comma, Delimiter::Tab, Delimiter::Pipe] {
        if alternative != declared
            && split_delimited(line.content, alternative.as_char()).len() == expected
        {
            return Error::DelimiterMismatch {
                line: line.number,
                declared: declared.as_char(),
            };
        }
    }
    Error::TabularWidthMismatch {
        line: line.number,
        expected,
        found,
    }
}
