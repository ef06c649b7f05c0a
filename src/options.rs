//! Configuration options for TOON encoding and decoding.
//!
//! - [`EncodeOptions`]: indentation width, delimiter, length marker
//! - [`DecodeOptions`]: indentation width, strict mode
//! - [`Delimiter`]: comma, tab, or pipe
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{encode, toon, Delimiter, EncodeOptions};
//!
//! let value = toon!({"tags": ["a", "b"]});
//!
//! let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
//! assert_eq!(encode(&value, &options), "tags[2|]: a|b");
//!
//! let options = EncodeOptions::new().with_length_marker();
//! assert_eq!(encode(&value, &options), "tags[#2]: a,b");
//! ```

/// Delimiter used between inline array values, tabular fields and row cells.
///
/// Non-comma delimiters are recorded in the array header as a suffix on the
/// length (`[3\t]`, `[3|]`), so each header carries its own delimiter and
/// the decoder needs no out-of-band configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
}

impl Delimiter {
    /// The delimiter as a single character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }

    /// The delimiter as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
        }
    }
}

/// Options controlling [`encode`](crate::encode).
///
/// # Examples
///
/// ```rust
/// use toon_codec::{Delimiter, EncodeOptions};
///
/// let options = EncodeOptions::new()
///     .with_indent(4)
///     .with_delimiter(Delimiter::Tab)
///     .with_length_marker();
/// assert_eq!(options.indent, 4);
/// assert!(options.length_marker);
/// ```
#[derive(Clone, Debug)]
pub struct EncodeOptions {
    /// Spaces per depth level. Default 2; a value of 0 is resolved to 1.
    pub indent: usize,
    /// Delimiter for the arrays the options apply to directly. Arrays
    /// nested inside list items fall back to comma.
    pub delimiter: Delimiter,
    /// When set, lengths are written as `[#N]` instead of `[N]`. The
    /// decoder accepts both forms unconditionally.
    pub length_marker: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            indent: 2,
            delimiter: Delimiter::default(),
            length_marker: false,
        }
    }
}

impl EncodeOptions {
    /// Default options: 2-space indent, comma delimiter, no length marker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of spaces per depth level.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the delimiter for inline and tabular arrays.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Prefixes array lengths with `#`.
    #[must_use]
    pub fn with_length_marker(mut self) -> Self {
        self.length_marker = true;
        self
    }
}

/// Options controlling [`decode`](crate::decode).
///
/// Strict mode (the default) enforces that indentation is an exact
/// multiple of `indent`, contains no tabs, and that array bodies contain
/// no interior blank lines. With `strict` off those inputs are tolerated:
/// depth is computed by floor division, tabs in indentation are skipped,
/// and blank lines are ignored everywhere.
#[derive(Clone, Debug)]
pub struct DecodeOptions {
    /// Spaces per depth level. Default 2; a value of 0 is resolved to 1.
    pub indent: usize,
    /// Enforce indentation and blank-line rules. Default true.
    pub strict: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions {
            indent: 2,
            strict: true,
        }
    }
}

impl DecodeOptions {
    /// Default options: 2-space indent, strict mode on.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of spaces per depth level.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Enables or disables strict mode.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
