//! Dynamic value representation for TOON data.
//!
//! [`Value`] is the closed model both halves of the codec operate on: the
//! encoder walks a `Value` tree and the decoder reconstructs one. Host
//! types outside the model (dates, big integers, non-finite floats) are
//! normalized into it *before* encoding, either through the [`From`]
//! conversions in this module or through the serde path
//! ([`to_value`](crate::to_value)), so the encoder itself never sees a
//! host type.
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{toon, Value};
//!
//! let value = toon!({
//!     "name": "Ada",
//!     "tags": ["reading", "gaming"]
//! });
//! assert!(value.is_object());
//! ```

use crate::Map;
use chrono::{DateTime, SecondsFormat, Utc};
use num_bigint::BigInt;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed TOON value.
///
/// Objects preserve key insertion order (see [`Map`]); arrays preserve
/// element order. Equality is structural.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

/// A numeric value.
///
/// The decoder produces [`Number::Integer`] for tokens without a fraction
/// or exponent that fit `i64`, and [`Number::Float`] otherwise. Non-finite
/// floats are not part of the normalized model; the encoder renders them
/// as `null` and [`Value::normalize`] replaces them with [`Value::Null`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` for [`Number::Integer`].
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` for [`Number::Float`].
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// The value as `i64`: integers directly, floats only when whole and
    /// in range.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Integer(i) => Some(i),
            Number::Float(f)
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 =>
            {
                Some(f as i64)
            }
            Number::Float(_) => None,
        }
    }

    /// The value as `f64`. Always succeeds.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Integer(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Value {
    /// Returns `true` if the value is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an array.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` for null, booleans, numbers and strings — the
    /// kinds that fit on a single line without a header.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        !matches!(self, Value::Array(_) | Value::Object(_))
    }

    /// The boolean inside, if this is one.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    /// The string slice inside, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// The number as `i64`, if this is an integer-representable number.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        if let Value::Number(n) = self {
            n.as_i64()
        } else {
            None
        }
    }

    /// The number as `f64`, if this is a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        if let Value::Number(n) = self {
            Some(n.as_f64())
        } else {
            None
        }
    }

    /// The elements inside, if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        if let Value::Array(items) = self {
            Some(items)
        } else {
            None
        }
    }

    /// The map inside, if this is an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        if let Value::Object(map) = self {
            Some(map)
        } else {
            None
        }
    }

    /// Replaces every non-finite float in the tree with [`Value::Null`].
    ///
    /// This is the last normalization step before encoding; applying it
    /// twice gives the same result as applying it once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_codec::{Number, Value};
    ///
    /// let value = Value::Number(Number::Float(f64::NAN));
    /// assert_eq!(value.normalize(), Value::Null);
    /// ```
    #[must_use]
    pub fn normalize(self) -> Value {
        match self {
            Value::Number(Number::Float(f)) if !f.is_finite() => Value::Null,
            Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::normalize).collect())
            }
            Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, value.normalize()))
                    .collect(),
            ),
            other => other,
        }
    }
}

macro_rules! from_integer {
    ($($int:ty)*) => {
        $(
            impl From<$int> for Value {
                fn from(value: $int) -> Self {
                    Value::Number(Number::Integer(value as i64))
                }
            }
        )*
    };
}

from_integer!(i8 i16 i32 i64 u8 u16 u32);

macro_rules! from_float {
    ($($float:ty)*) => {
        $(
            impl From<$float> for Value {
                fn from(value: $float) -> Self {
                    Value::Number(Number::Float(value as f64))
                }
            }
        )*
    };
}

from_float!(f32 f64);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

/// Dates normalize to their ISO-8601 string representation.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use toon_codec::Value;
///
/// let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
/// assert_eq!(
///     Value::from(date),
///     Value::String("2024-01-15T10:30:00.000Z".to_string())
/// );
/// ```
impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::String(value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }
}

/// Arbitrary-precision integers normalize to their decimal string
/// representation; the encoder then quotes them like any numeric-looking
/// string, so the digits survive a round-trip untouched.
impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::String(value.to_string())
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value.as_i64().ok_or_else(|| {
            crate::Error::Message(format!("expected integer, found {:?}", value))
        })
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value.as_f64().ok_or_else(|| {
            crate::Error::Message(format!("expected number, found {:?}", value))
        })
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        value.as_bool().ok_or_else(|| {
            crate::Error::Message(format!("expected bool, found {:?}", value))
        })
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(crate::Error::Message(format!(
                "expected string, found {:?}",
                other
            ))),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => serializer.collect_seq(items),
            Value::Object(map) => serializer.collect_map(map.iter()),
        }
    }
}

struct ValueVisitor;

impl<'de> de::Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a TOON value")
    }

    fn visit_bool<E>(self, b: bool) -> Result<Value, E> {
        Ok(Value::Bool(b))
    }

    fn visit_i64<E>(self, i: i64) -> Result<Value, E> {
        Ok(Value::from(i))
    }

    fn visit_u64<E>(self, u: u64) -> Result<Value, E> {
        // mirrors the serializer: digits outside i64 range stay exact
        Ok(match i64::try_from(u) {
            Ok(i) => Value::from(i),
            Err(_) => Value::String(u.to_string()),
        })
    }

    fn visit_f64<E>(self, f: f64) -> Result<Value, E> {
        Ok(if f.is_finite() {
            Value::from(f)
        } else {
            Value::Null
        })
    }

    fn visit_str<E>(self, s: &str) -> Result<Value, E> {
        Ok(Value::from(s))
    }

    fn visit_string<E>(self, s: String) -> Result<Value, E> {
        Ok(Value::String(s))
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Value, A::Error>
    where
        A: de::SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(item) = access.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Value, A::Error>
    where
        A: de::MapAccess<'de>,
    {
        let mut map = Map::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(Value::Object(map))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}
