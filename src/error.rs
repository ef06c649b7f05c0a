//! Error types for TOON encoding and decoding.
//!
//! Every decoding failure carries the 1-based line number of the offending
//! input line. Errors abort the current call; nothing is retried and
//! nothing is logged.

use std::fmt;
use thiserror::Error;

/// All failures the decoder (and the serde bridge) can report.
///
/// The encoder never fails on a well-formed [`Value`](crate::Value);
/// non-finite numbers are rendered as `null` rather than rejected.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The input contained no non-blank lines.
    #[error("input contains no content")]
    EmptyInput,

    /// A quoted run never closed before the end of its token.
    #[error("line {line}: unterminated quoted string")]
    UnterminatedString { line: usize },

    /// A `\x` sequence outside the escape alphabet (`\"`, `\\`, `\n`, `\r`, `\t`).
    #[error("line {line}: invalid escape sequence `\\{escape}`")]
    InvalidEscape { line: usize, escape: char },

    /// A key was parsed but no `:` followed it.
    #[error("line {line}: expected `:` after key")]
    MissingColon { line: usize },

    /// The bracket segment of an array header did not parse.
    #[error("line {line}: invalid array header: {msg}")]
    InvalidHeader { line: usize, msg: String },

    /// An array body produced a different item count than its header declared.
    #[error("line {line}: array declared {expected} items but body has {found}")]
    LengthMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A tabular row carried a different value count than the field list.
    #[error("line {line}: row has {found} values but header declares {expected} fields")]
    TabularWidthMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A tabular row splits to the declared width only under a delimiter
    /// other than the one the header declared.
    #[error("line {line}: row does not use the declared `{declared}` delimiter")]
    DelimiterMismatch { line: usize, declared: char },

    /// Strict mode: indentation is not a multiple of the indent size.
    #[error("line {line}: indent of {indent} is not a multiple of {indent_size}")]
    IndentNotMultiple {
        line: usize,
        indent: usize,
        indent_size: usize,
    },

    /// Strict mode: a tab character appeared in leading whitespace.
    #[error("line {line}: tab character in indentation")]
    TabInIndent { line: usize },

    /// Strict mode: a blank line appeared between the first and last
    /// item or row of an array body.
    #[error("line {line}: blank line inside array")]
    BlankInArray { line: usize },

    /// Any other structural error with a known location.
    #[error("line {line}: {msg}")]
    Syntax { line: usize, msg: String },

    /// Errors raised by serde `Serialize`/`Deserialize` implementations.
    #[error("{0}")]
    Message(String),
}

impl Error {
    pub(crate) fn syntax(line: usize, msg: impl Into<String>) -> Self {
        Error::Syntax {
            line,
            msg: msg.into(),
        }
    }

    pub(crate) fn invalid_header(line: usize, msg: impl Into<String>) -> Self {
        Error::InvalidHeader {
            line,
            msg: msg.into(),
        }
    }

    /// The 1-based input line an error refers to, if it has one.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::EmptyInput | Error::Message(_) => None,
            Error::UnterminatedString { line }
            | Error::InvalidEscape { line, .. }
            | Error::MissingColon { line }
            | Error::InvalidHeader { line, .. }
            | Error::LengthMismatch { line, .. }
            | Error::TabularWidthMismatch { line, .. }
            | Error::DelimiterMismatch { line, .. }
            | Error::IndentNotMultiple { line, .. }
            | Error::TabInIndent { line }
            | Error::BlankInArray { line }
            | Error::Syntax { line, .. } => Some(*line),
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
