//! TOON encoding.
//!
//! The encoder walks a [`Value`] tree and emits lines into a single
//! output buffer, indenting each line by `depth * indent` spaces. Arrays
//! pick one of three shapes:
//!
//! 1. **Inline** — every element is a primitive: `key[N]: v1,v2,...`
//! 2. **Tabular** — non-empty, all elements are objects sharing the first
//!    element's keys in order, all cells primitive:
//!    `key[N]{f1,f2}:` followed by one row per line.
//! 3. **List** — anything else: `key[N]:` followed by `- ` items.
//!
//! The active delimiter applies to the immediate array only; arrays
//! reached through list items fall back to comma, carrying their own
//! delimiter suffix in their headers.
//!
//! Emission invariants: no trailing spaces on any line, no trailing
//! newline, key order preserved, an empty root object encodes to the
//! empty string.

use crate::options::{Delimiter, EncodeOptions};
use crate::token::{write_key, write_string};
use crate::value::{Number, Value};
use crate::Map;
use std::fmt::Write as _;

/// Encodes a value tree to TOON text.
///
/// Never fails: values outside the normalized model (non-finite floats)
/// are rendered as `null`.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{encode, toon, EncodeOptions};
///
/// let value = toon!({"id": 123, "tags": ["a", "b"]});
/// assert_eq!(
///     encode(&value, &EncodeOptions::default()),
///     "id: 123\ntags[2]: a,b"
/// );
/// ```
#[must_use]
pub fn encode(value: &Value, options: &EncodeOptions) -> String {
    let mut encoder = Encoder::new(options);
    encoder.encode_root(value);
    encoder.out
}

struct Encoder<'a> {
    out: String,
    options: &'a EncodeOptions,
    indent: usize,
}

impl<'a> Encoder<'a> {
    fn new(options: &'a EncodeOptions) -> Self {
        Encoder {
            out: String::with_capacity(256),
            options,
            indent: options.indent.max(1),
        }
    }

    fn encode_root(&mut self, value: &Value) {
        match value {
            Value::Object(map) => {
                if !map.is_empty() {
                    self.encode_object(map, 0, self.options.delimiter);
                }
            }
            Value::Array(items) => {
                self.begin_line(0);
                self.encode_array(None, items, 0, self.options.delimiter);
            }
            primitive => {
                self.begin_line(0);
                self.push_primitive(primitive, self.options.delimiter);
            }
        }
    }

    /// Starts a new output line at `depth`. The very first line of the
    /// document gets no preceding newline, which also keeps the final
    /// output free of a trailing one.
    fn begin_line(&mut self, depth: usize) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        for _ in 0..depth * self.indent {
            self.out.push(' ');
        }
    }

    fn encode_object(&mut self, map: &Map, depth: usize, delimiter: Delimiter) {
        for (key, value) in map.iter() {
            self.encode_field(key, value, depth, delimiter);
        }
    }

    fn encode_field(&mut self, key: &str, value: &Value, depth: usize, delimiter: Delimiter) {
        match value {
            Value::Array(items) => {
                self.begin_line(depth);
                self.encode_array(Some(key), items, depth, delimiter);
            }
            Value::Object(map) if map.is_empty() => {
                self.begin_line(depth);
                write_key(&mut self.out, key);
                self.out.push(':');
            }
            Value::Object(map) => {
                self.begin_line(depth);
                write_key(&mut self.out, key);
                self.out.push(':');
                self.encode_object(map, depth + 1, delimiter);
            }
            primitive => {
                self.begin_line(depth);
                write_key(&mut self.out, key);
                self.out.push_str(": ");
                self.push_primitive(primitive, delimiter);
            }
        }
    }

    /// Writes an array header (and body) starting at the current cursor
    /// position; body lines are emitted below `depth`. Callers that place
    /// the header mid-line (list items) pass the depth its body should
    /// hang from.
    fn encode_array(
        &mut self,
        key: Option<&str>,
        items: &[Value],
        depth: usize,
        delimiter: Delimiter,
    ) {
        if items.iter().all(Value::is_primitive) {
            self.push_header(key, items.len(), delimiter, None);
            if !items.is_empty() {
                self.out.push(' ');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.out.push(delimiter.as_char());
                    }
                    self.push_primitive(item, delimiter);
                }
            }
            return;
        }

        if let Some(fields) = tabular_fields(items) {
            self.push_header(key, items.len(), delimiter, Some(&fields));
            for item in items {
                if let Value::Object(row) = item {
                    self.begin_line(depth + 1);
                    for (i, field) in fields.iter().enumerate() {
                        if i > 0 {
                            self.out.push(delimiter.as_char());
                        }
                        let cell = row.get(field).unwrap_or(&Value::Null);
                        self.push_primitive(cell, delimiter);
                    }
                }
            }
            return;
        }

        self.push_header(key, items.len(), delimiter, None);
        for item in items {
            self.encode_list_item(item, depth + 1, delimiter);
        }
    }

    fn encode_list_item(&mut self, item: &Value, depth: usize, delimiter: Delimiter) {
        self.begin_line(depth);
        match item {
            Value::Array(nested) => {
                self.out.push_str("- ");
                self.encode_array(None, nested, depth, Delimiter::Comma);
            }
            Value::Object(map) if map.is_empty() => {
                self.out.push('-');
            }
            Value::Object(map) => {
                self.out.push_str("- ");
                self.encode_item_object(map, depth);
            }
            primitive => {
                self.out.push_str("- ");
                self.push_primitive(primitive, delimiter);
            }
        }
    }

    /// Emits a list-item object: first field on the hyphen line, the rest
    /// below. An array header opening the field list pushes both its body
    /// and the remaining fields two levels below the item line; every
    /// other first field leaves the remaining fields one level below.
    fn encode_item_object(&mut self, map: &Map, item_depth: usize) {
        let mut entries = map.iter();
        let (first_key, first_value) = match entries.next() {
            Some(entry) => entry,
            None => return,
        };

        let follow_depth = match first_value {
            Value::Array(items) => {
                self.encode_array(Some(first_key), items, item_depth + 1, Delimiter::Comma);
                item_depth + 2
            }
            Value::Object(obj) if obj.is_empty() => {
                write_key(&mut self.out, first_key);
                self.out.push(':');
                item_depth + 1
            }
            Value::Object(obj) => {
                write_key(&mut self.out, first_key);
                self.out.push(':');
                self.encode_object(obj, item_depth + 2, Delimiter::Comma);
                item_depth + 1
            }
            primitive => {
                write_key(&mut self.out, first_key);
                self.out.push_str(": ");
                self.push_primitive(primitive, Delimiter::Comma);
                item_depth + 1
            }
        };

        for (key, value) in entries {
            self.encode_field(key, value, follow_depth, Delimiter::Comma);
        }
    }

    fn push_header(
        &mut self,
        key: Option<&str>,
        length: usize,
        delimiter: Delimiter,
        fields: Option<&[&String]>,
    ) {
        if let Some(key) = key {
            write_key(&mut self.out, key);
        }
        self.out.push('[');
        if self.options.length_marker {
            self.out.push('#');
        }
        let _ = write!(self.out, "{}", length);
        match delimiter {
            Delimiter::Comma => {}
            Delimiter::Tab => self.out.push('\t'),
            Delimiter::Pipe => self.out.push('|'),
        }
        self.out.push(']');
        if let Some(fields) = fields {
            self.out.push('{');
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    self.out.push(delimiter.as_char());
                }
                write_key(&mut self.out, field);
            }
            self.out.push('}');
        }
        self.out.push(':');
    }

    fn push_primitive(&mut self, value: &Value, delimiter: Delimiter) {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(true) => self.out.push_str("true"),
            Value::Bool(false) => self.out.push_str("false"),
            Value::Number(Number::Integer(i)) => {
                let _ = write!(self.out, "{}", i);
            }
            Value::Number(Number::Float(f)) => {
                if f.is_finite() {
                    let _ = write!(self.out, "{}", f);
                } else {
                    self.out.push_str("null");
                }
            }
            Value::String(s) => write_string(&mut self.out, s, delimiter.as_char()),
            Value::Array(_) | Value::Object(_) => {
                unreachable!("composite value in primitive position")
            }
        }
    }
}

/// The tabular field set for `items`, when tabular form applies: the
/// array is non-empty, every element is an object carrying the same keys
/// in the same order as the first element, and every cell is primitive.
/// Objects with no keys never tabulate.
fn tabular_fields(items: &[Value]) -> Option<Vec<&String>> {
    let first = match items.first() {
        Some(Value::Object(map)) if !map.is_empty() => map,
        _ => return None,
    };
    if !first.values().all(Value::is_primitive) {
        return None;
    }
    let fields: Vec<&String> = first.keys().collect();

    for item in &items[1..] {
        let map = match item {
            Value::Object(map) => map,
            _ => return None,
        };
        if map.len() != fields.len() {
            return None;
        }
        if !map.keys().zip(fields.iter()).all(|(a, b)| a == *b) {
            return None;
        }
        if !map.values().all(Value::is_primitive) {
            return None;
        }
    }

    Some(fields)
}
