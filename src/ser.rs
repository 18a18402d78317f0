//! Building [`Value`] trees from typed data.
//!
//! [`ValueSerializer`] is a serde `Serializer` whose output is a [`Value`].
//! It lets a renderer hand typed response payloads to the converter without
//! going through an intermediate text format.
//!
//! ```rust
//! use serde::Serialize;
//! use serde_pascal_case::{to_value, Value};
//!
//! #[derive(Serialize)]
//! struct Page { page_size: u32, next_cursor: Option<String> }
//!
//! let value = to_value(&Page { page_size: 20, next_cursor: None }).unwrap();
//! let obj = value.as_object().unwrap();
//! assert_eq!(obj.get("page_size"), Some(&Value::from(20)));
//! assert_eq!(obj.get("next_cursor"), Some(&Value::Null));
//! ```
//!
//! Enum variants use serde's externally tagged layout: a unit variant becomes
//! its name, any other variant a one-entry object keyed by the variant name.

use crate::{Error, Key, Map, Number, Result, Value};
use num_bigint::BigInt;
use serde::{ser, Serialize};

/// Serializer producing [`Value`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeTupleVariant {
    name: &'static str,
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: Map,
    current_key: Option<Key>,
}

pub struct SerializeStructVariant {
    name: &'static str,
    map: Map,
}

fn tagged(variant: &'static str, value: Value) -> Value {
    let mut object = Map::with_capacity(1);
    object.insert(Key::from(variant), value);
    Value::Object(object)
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v)))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        match i64::try_from(v) {
            Ok(i) => self.serialize_i64(i),
            Err(_) => Ok(Value::BigInt(BigInt::from(v))),
        }
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        match i64::try_from(v) {
            Ok(i) => self.serialize_i64(i),
            Err(_) => Ok(Value::BigInt(BigInt::from(v))),
        }
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        match i64::try_from(v) {
            Ok(i) => self.serialize_i64(i),
            Err(_) => Ok(Value::BigInt(BigInt::from(v))),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(v.iter().map(|&b| Value::from(b as i64)).collect())
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
        Ok(tagged(variant, to_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec {
            vec: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            name: variant,
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap {
            map: Map::with_capacity(len.unwrap_or(0)),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            name: variant,
            map: Map::with_capacity(len),
        })
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
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

impl ser::SerializeTupleStruct for SerializeVec {
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

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(tagged(self.name, Value::Array(self.vec)))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = match to_value(key)? {
            Value::String(s) => Key::String(s),
            Value::Number(Number::Integer(i)) => Key::Integer(i),
            other => {
                return Err(Error::unsupported_type(&format!(
                    "map keys must be strings or integers, found {}",
                    other
                )))
            }
        };
        self.current_key = Some(key);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(Key::from(key), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(Key::from(key), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(tagged(self.name, Value::Object(self.map)))
    }
}

/// Converts any `T: Serialize` into a [`Value`].
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] for map keys that are neither strings
/// nor integers, and [`Error::Custom`] when `T`'s `Serialize` implementation
/// reports an error.
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    enum Event {
        Started,
        Moved(i32),
        Resized(u32, u32),
        Renamed { old_name: String },
    }

    #[test]
    fn test_struct_field_order() {
        #[derive(Serialize)]
        struct Row {
            zeta: u8,
            alpha: bool,
        }
        let value = to_value(&Row { zeta: 1, alpha: true }).unwrap();
        let keys: Vec<String> = value
            .as_object()
            .unwrap()
            .keys()
            .map(|k| k.to_string())
            .collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_tuples_become_arrays() {
        let value = to_value(&(1, "two")).unwrap();
        assert_eq!(value, Value::Array(vec![Value::from(1), Value::from("two")]));
    }

    #[test]
    fn test_integer_map_keys() {
        let mut map = BTreeMap::new();
        map.insert(1u8, "test");
        let value = to_value(&map).unwrap();
        assert_eq!(
            value.as_object().unwrap().get_key(&Key::Integer(1)),
            Some(&Value::from("test"))
        );
    }

    #[test]
    fn test_rejects_bool_map_keys() {
        let mut map = BTreeMap::new();
        map.insert(false, 0);
        let err = to_value(&map).unwrap_err();
        assert!(err.to_string().contains("map keys must be strings or integers"));
    }

    #[test]
    fn test_enum_variants_are_externally_tagged() {
        assert_eq!(to_value(&Event::Started).unwrap(), Value::from("Started"));

        let moved = to_value(&Event::Moved(3)).unwrap();
        assert_eq!(moved.as_object().unwrap().get("Moved"), Some(&Value::from(3)));

        let resized = to_value(&Event::Resized(2, 4)).unwrap();
        assert_eq!(
            resized.as_object().unwrap().get("Resized"),
            Some(&Value::Array(vec![Value::from(2), Value::from(4)]))
        );

        let renamed = to_value(&Event::Renamed {
            old_name: "a".to_string(),
        })
        .unwrap();
        let inner = renamed
            .as_object()
            .and_then(|o| o.get("Renamed"))
            .and_then(|v| v.as_object())
            .unwrap();
        assert_eq!(inner.get("old_name"), Some(&Value::from("a")));
    }

    #[test]
    fn test_large_integers() {
        assert_eq!(
            to_value(&u64::MAX).unwrap(),
            Value::BigInt(BigInt::from(u64::MAX))
        );
        assert_eq!(to_value(&7u64).unwrap(), Value::from(7));
    }
}
