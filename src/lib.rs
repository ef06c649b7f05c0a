//! # toon_codec
//!
//! Encoder/decoder pair for TOON (Token-Oriented Object Notation), a
//! compact, indentation-significant text format for JSON-equivalent data
//! trees, designed to cut token counts when data is fed to language
//! models.
//!
//! ## Format at a glance
//!
//! ```text
//! user:
//!   id: 123
//!   name: Ada
//!   tags[2]: reading,gaming
//!   active: true
//! ```
//!
//! Arrays of uniform objects collapse into tables:
//!
//! ```text
//! items[2]{sku,qty,price}:
//!   A1,2,9.99
//!   B2,1,14.5
//! ```
//!
//! See the [`format`] module for the full format reference.
//!
//! ## Two API levels
//!
//! The core is a pure pair of functions over a dynamic [`Value`] tree:
//!
//! ```rust
//! use toon_codec::{decode, encode, toon, DecodeOptions, EncodeOptions};
//!
//! let value = toon!({"id": 123, "tags": ["a", "b"]});
//! let text = encode(&value, &EncodeOptions::default());
//! assert_eq!(text, "id: 123\ntags[2]: a,b");
//!
//! let back = decode(&text, &DecodeOptions::default()).unwrap();
//! assert_eq!(back, value);
//! ```
//!
//! On top sits a serde layer for typed Rust data:
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use toon_codec::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Ada".to_string(),
//!     active: true,
//! };
//!
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, "id: 123\nname: Ada\nactive: true");
//!
//! let back: User = from_str(&text).unwrap();
//! assert_eq!(back, user);
//! ```
//!
//! ## Normalization
//!
//! The encoder operates on a closed value model. Host types are mapped
//! into it before encoding: non-finite floats become `null`, `chrono`
//! dates become ISO-8601 strings, `num-bigint` integers become decimal
//! strings, and `None` becomes `null`. The serde layer applies these
//! rules automatically; [`Value::normalize`] applies them to hand-built
//! trees.
//!
//! ## Guarantees
//!
//! - Round-trip: decoding an encoded normalized value reproduces it,
//!   including object key order.
//! - Encoded output never carries trailing spaces or a trailing newline.
//! - Decoding is strict by default: array lengths, tabular row widths,
//!   indentation and blank-line placement are all enforced, with 1-based
//!   line numbers in every error.
//! - The codec is pure: no I/O, no logging, no shared state; calls from
//!   multiple threads don't interact.

pub mod de;
pub mod decode;
pub mod encode;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

mod scan;
mod token;

pub use de::ValueDeserializer;
pub use decode::decode;
pub use encode::encode;
pub use error::{Error, Result};
pub use map::Map;
pub use options::{DecodeOptions, Delimiter, EncodeOptions};
pub use ser::ValueSerializer;
pub use value::{Number, Value};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serializes `value` to a TOON string with default options.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use toon_codec::to_string;
///
/// #[derive(Serialize)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let text = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(text, "x: 1\ny: 2");
/// ```
///
/// # Errors
///
/// Returns an error when the value's `Serialize` implementation fails
/// (for example, a map with non-string keys).
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &EncodeOptions::default())
}

/// Serializes `value` to a TOON string with the given options.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{to_string_with_options, Delimiter, EncodeOptions};
///
/// let options = EncodeOptions::new().with_delimiter(Delimiter::Pipe);
/// let text = to_string_with_options(&vec![1, 2, 3], &options).unwrap();
/// assert_eq!(text, "[3|]: 1|2|3");
/// ```
///
/// # Errors
///
/// Returns an error when the value's `Serialize` implementation fails.
pub fn to_string_with_options<T>(value: &T, options: &EncodeOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(encode(&to_value(value)?, options))
}

/// Converts any serializable value into a normalized [`Value`] tree.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{to_value, Value};
///
/// let value = to_value(&vec![1, 2]).unwrap();
/// assert!(value.is_array());
/// assert_eq!(to_value(&f64::NAN).unwrap(), Value::Null);
/// ```
///
/// # Errors
///
/// Returns an error when the value's `Serialize` implementation fails.
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Deserializes a value of type `T` from TOON text with default options.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use toon_codec::from_str;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let point: Point = from_str("x: 1\ny: 2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error when the input is not valid TOON or does not match
/// `T`. Structural errors carry the offending line number.
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_str_with_options(s, &DecodeOptions::default())
}

/// Deserializes a value of type `T` from TOON text with the given
/// options.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{from_str_with_options, DecodeOptions};
///
/// let options = DecodeOptions::new().with_strict(false);
/// let v: Vec<String> = from_str_with_options("[2]:\n  - a\n\n  - b", &options).unwrap();
/// assert_eq!(v, vec!["a", "b"]);
/// ```
///
/// # Errors
///
/// Returns an error when the input is not valid TOON or does not match `T`.
pub fn from_str_with_options<T>(s: &str, options: &DecodeOptions) -> Result<T>
where
    T: DeserializeOwned,
{
    let value = decode(s, options)?;
    T::deserialize(ValueDeserializer::new(value))
}

/// Deserializes a value of type `T` from TOON bytes.
///
/// # Errors
///
/// Returns an error when the bytes are not UTF-8, not valid TOON, or do
/// not match `T`.
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::Message(e.to_string()))?;
    from_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toon;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn typed_round_trip() {
        let user = User {
            id: 123,
            name: "Ada".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let text = to_string(&user).unwrap();
        let back: User = from_str(&text).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn value_round_trip_through_text() {
        let value = toon!({"a": [1, 2], "b": {"c": null}});
        let text = encode(&value, &EncodeOptions::default());
        assert_eq!(decode(&text, &DecodeOptions::default()).unwrap(), value);
    }

    #[test]
    fn from_slice_works() {
        let v: Vec<i32> = from_slice(b"[3]: 1,2,3").unwrap();
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn options_round_trip() {
        let user = User {
            id: 1,
            name: "Bo".to_string(),
            active: false,
            tags: vec!["x".to_string()],
        };
        let options = EncodeOptions::new()
            .with_delimiter(Delimiter::Tab)
            .with_length_marker();
        let text = to_string_with_options(&user, &options).unwrap();
        let back: User = from_str(&text).unwrap();
        assert_eq!(back, user);
    }
}
