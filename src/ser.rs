//! Serialization of Rust values into the TOON value model.
//!
//! [`ValueSerializer`] is the normalization boundary: any `T: Serialize`
//! becomes a [`Value`] before the encoder runs, so the encoder itself
//! never deals with host types. Normalization applied here:
//!
//! - non-finite floats become [`Value::Null`],
//! - `None`/unit become [`Value::Null`],
//! - `u64` values beyond `i64` range become their decimal string,
//! - enum variants take the `variant` / `{variant: value}` shapes.
//!
//! Most callers use [`to_value`](crate::to_value) or
//! [`to_string`](crate::to_string) from the crate root.

use crate::{Error, Map, Number, Result, Value};
use serde::{ser, Serialize};

/// Serializer producing a [`Value`] tree from any `Serialize` type.
pub struct ValueSerializer;

/// Accumulates sequence, tuple and tuple-struct elements.
pub struct SerializeArray {
    items: Vec<Value>,
}

/// Accumulates map and struct entries; `pending_key` holds a map key
/// until its value arrives.
pub struct SerializeObject {
    map: Map,
    pending_key: Option<String>,
}

/// Accumulates a tuple or struct variant's payload; `end` wraps it as
/// `{variant: payload}`.
pub struct SerializeVariant<T> {
    variant: &'static str,
    inner: T,
}

fn string_key<T>(key: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    match key.serialize(ValueSerializer)? {
        Value::String(s) => Ok(s),
        other => Err(Error::Message(format!(
            "object keys must be strings, found {:?}",
            other
        ))),
    }
}

fn wrap_variant(variant: &str, payload: Value) -> Value {
    let mut map = Map::with_capacity(1);
    map.insert(variant.to_string(), payload);
    Value::Object(map)
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeArray;
    type SerializeTuple = SerializeArray;
    type SerializeTupleStruct = SerializeArray;
    type SerializeTupleVariant = SerializeVariant<SerializeArray>;
    type SerializeMap = SerializeObject;
    type SerializeStruct = SerializeObject;
    type SerializeStructVariant = SerializeVariant<SerializeObject>;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        self.serialize_i64(v.into())
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        self.serialize_i64(v.into())
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        self.serialize_i64(v.into())
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        self.serialize_u64(v.into())
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        self.serialize_u64(v.into())
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        self.serialize_u64(v.into())
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        match i64::try_from(v) {
            Ok(i) => Ok(Value::Number(Number::Integer(i))),
            // past the model's integer range; keep the digits exact
            Err(_) => Ok(Value::String(v.to_string())),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        self.serialize_f64(v.into())
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        if v.is_finite() {
            Ok(Value::Number(Number::Float(v)))
        } else {
            Ok(Value::Null)
        }
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Array(v.iter().map(|&b| Value::from(b)).collect()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(wrap_variant(variant, value.serialize(ValueSerializer)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeArray> {
        Ok(SerializeArray {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeArray> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeArray> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVariant<SerializeArray>> {
        Ok(SerializeVariant {
            variant,
            inner: self.serialize_seq(Some(len))?,
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeObject> {
        Ok(SerializeObject {
            map: Map::with_capacity(len.unwrap_or(0)),
            pending_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeObject> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVariant<SerializeObject>> {
        Ok(SerializeVariant {
            variant,
            inner: self.serialize_map(Some(len))?,
        })
    }
}

impl ser::SerializeSeq for SerializeArray {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.items))
    }
}

impl ser::SerializeTuple for SerializeArray {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeArray {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeVariant<SerializeArray> {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(&mut self.inner, value)
    }

    fn end(self) -> Result<Value> {
        Ok(wrap_variant(self.variant, Value::Array(self.inner.items)))
    }
}

impl ser::SerializeMap for SerializeObject {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.pending_key = Some(string_key(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match self.pending_key.take() {
            Some(key) => {
                self.map.insert(key, value.serialize(ValueSerializer)?);
                Ok(())
            }
            None => Err(Error::Message(
                "object value serialized before its key".to_string(),
            )),
        }
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeObject {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeVariant<SerializeObject> {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeStruct::serialize_field(&mut self.inner, key, value)
    }

    fn end(self) -> Result<Value> {
        Ok(wrap_variant(self.variant, Value::Object(self.inner.map)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::to_value;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn struct_field_order_is_preserved() {
        let value = to_value(&Point { x: 1, y: 2 }).unwrap();
        match value {
            Value::Object(map) => {
                let keys: Vec<_> = map.keys().cloned().collect();
                assert_eq!(keys, vec!["x", "y"]);
            }
            other => panic!("expected object, got {:?}", other),
        }
    }

    #[test]
    fn non_finite_floats_normalize_to_null() {
        assert_eq!(to_value(&f64::NAN).unwrap(), Value::Null);
        assert_eq!(to_value(&f64::INFINITY).unwrap(), Value::Null);
        assert_eq!(to_value(&1.5f64).unwrap(), Value::Number(Number::Float(1.5)));
    }

    #[test]
    fn large_u64_normalizes_to_decimal_string() {
        assert_eq!(
            to_value(&u64::MAX).unwrap(),
            Value::String("18446744073709551615".to_string())
        );
        assert_eq!(
            to_value(&(i64::MAX as u64)).unwrap(),
            Value::Number(Number::Integer(i64::MAX))
        );
    }

    #[test]
    fn option_and_unit_normalize_to_null() {
        assert_eq!(to_value(&Option::<i32>::None).unwrap(), Value::Null);
        assert_eq!(to_value(&Some(3)).unwrap(), Value::from(3));
        assert_eq!(to_value(&()).unwrap(), Value::Null);
    }

    #[test]
    fn non_string_map_keys_are_rejected() {
        use std::collections::BTreeMap;

        let mut map = BTreeMap::new();
        map.insert(1u32, "x");
        assert!(to_value(&map).is_err());
    }

    #[test]
    fn enum_shapes() {
        #[derive(Serialize)]
        enum Shape {
            Unit,
            Newtype(u8),
            Struct { a: u8 },
        }

        assert_eq!(to_value(&Shape::Unit).unwrap(), Value::from("Unit"));

        let newtype = to_value(&Shape::Newtype(7)).unwrap();
        assert_eq!(
            newtype.as_object().and_then(|m| m.get("Newtype")),
            Some(&Value::from(7u8))
        );

        let structv = to_value(&Shape::Struct { a: 1 }).unwrap();
        let inner = structv.as_object().and_then(|m| m.get("Struct")).unwrap();
        assert_eq!(inner.as_object().and_then(|m| m.get("a")), Some(&Value::from(1u8)));
    }
}
