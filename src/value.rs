//! Dynamic value representation for nested payloads.
//!
//! This module provides the [`Value`] enum, the tree that every conversion
//! walks: objects ([`Map`]), arrays, and scalars. Only object keys are ever
//! rewritten; scalars, including strings, pass through untouched.
//!
//! ## Core Types
//!
//! - [`Value`]: null, bool, number, string, lazy string, date, big integer, array, object
//! - [`Number`]: integer or floating-point numbers
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serde_pascal_case::{value, Value};
//!
//! let text = Value::from("hello");
//! let number = Value::from(42);
//!
//! let obj = value!({
//!     "user_name": "Alice",
//!     "login_count": 30
//! });
//! assert!(obj.is_object());
//! ```
//!
//! ### Moving Between Formats
//!
//! `Value` implements `Serialize` and `Deserialize`, so it can be read from
//! and written to any serde format:
//!
//! ```rust
//! use serde_pascal_case::{pascalize, Value};
//!
//! let input: Value = serde_json::from_str(r#"{"user_id": 7}"#).unwrap();
//! let output = serde_json::to_string(&pascalize(&input)).unwrap();
//! assert_eq!(output, r#"{"UserId":7}"#);
//! ```

use crate::{Key, LazyString, Map};
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed nested value.
///
/// `Array` and `Object` are containers; every other variant is a scalar that
/// conversions copy as-is. `String` and `Lazy` compare equal when their texts
/// match, so a lazy value can be checked against a literal without caring
/// how it was built.
///
/// # Examples
///
/// ```rust
/// use serde_pascal_case::{LazyString, Value};
///
/// let lazy = Value::Lazy(LazyString::new(|| "text".to_string()));
/// assert_eq!(lazy, Value::from("text"));
/// assert!(lazy.is_string());
/// ```
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Lazy(LazyString),
    Date(DateTime<Utc>),
    BigInt(BigInt),
    Array(Vec<Value>),
    Object(Map),
}

/// A numeric value: integer or float.
///
/// # Examples
///
/// ```rust
/// use serde_pascal_case::Number;
///
/// assert!(Number::Integer(42).is_integer());
/// assert_eq!(Number::Float(3.5).as_f64(), 3.5);
/// assert_eq!(Number::Float(3.5).as_i64(), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if it is an integer or a whole float in range.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
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
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` for both concrete and lazy strings.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_) | Value::Lazy(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` for every variant that is not an array or object.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Value::Array(_) | Value::Object(_))
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns it. A lazy string is resolved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pascal_case::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Lazy(lazy) => Some(lazy.resolve()),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Date(dt) => Some(dt),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Value::BigInt(bi) => Some(bi),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (
                Value::String(_) | Value::Lazy(_),
                Value::String(_) | Value::Lazy(_),
            ) => self.as_str() == other.as_str(),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Lazy(lazy) => write!(f, "{:?}", lazy.resolve()),
            Value::Date(dt) => write!(f, "{}", dt.to_rfc3339()),
            Value::BigInt(bi) => write!(f, "{}", bi),
            Value::Array(arr) => {
                write!(
                    f,
                    "[{}]",
                    arr.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                )
            }
            Value::Object(obj) => {
                write!(
                    f,
                    "{{{}}}",
                    obj.iter()
                        .map(|(k, v)| format!("{:?}:{}", k.to_string(), v))
                        .collect::<Vec<_>>()
                        .join(",")
                )
            }
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
            Value::Lazy(lazy) => serializer.serialize_str(lazy.resolve()),
            Value::Date(dt) => serializer.serialize_str(&dt.to_rfc3339()),
            Value::BigInt(bi) => serializer.serialize_str(&bi.to_string()),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any nested value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                match i64::try_from(value) {
                    Ok(i) => Ok(Value::Number(Number::Integer(i))),
                    Err(_) => Ok(Value::BigInt(BigInt::from(value))),
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = Map::new();
                while let Some((key, value)) = map.next_entry::<Key, Value>()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
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

impl From<LazyString> for Value {
    fn from(value: LazyString) -> Self {
        Value::Lazy(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
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

impl FromIterator<Value> for Value {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Number(Number::Integer(42)));
        assert_eq!(Value::from(3.5f64), Value::Number(Number::Float(3.5)));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
    }

    #[test]
    fn test_lazy_equals_string_without_changing_variant() {
        let lazy = Value::Lazy(LazyString::new(|| "abc".to_string()));
        assert_eq!(lazy, Value::from("abc"));
        assert_eq!(Value::from("abc"), lazy);
        assert_ne!(lazy, Value::from("abd"));
        assert!(matches!(lazy, Value::Lazy(_)));
    }

    #[test]
    fn test_scalar_classification() {
        assert!(Value::Null.is_scalar());
        assert!(Value::BigInt(BigInt::from(7)).is_scalar());
        assert!(!Value::Array(vec![]).is_scalar());
        assert!(!Value::Object(Map::new()).is_scalar());
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let text = r#"{"zeta":1,"alpha":[true,null,2.5],"mid":{"x":"y"}}"#;
        let value: Value = serde_json::from_str(text).unwrap();
        let keys: Vec<String> = value
            .as_object()
            .unwrap()
            .keys()
            .map(|k| k.to_string())
            .collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(serde_json::to_string(&value).unwrap(), text);
    }

    #[test]
    fn test_large_unsigned_becomes_bigint() {
        let value: Value = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(value.as_bigint(), Some(&BigInt::from(u64::MAX)));
    }

    #[test]
    fn test_integer_keys_serialize_as_json_strings() {
        let mut map = Map::new();
        map.insert(Key::from(1), Value::from("test"));
        let json = serde_json::to_string(&Value::Object(map)).unwrap();
        assert_eq!(json, r#"{"1":"test"}"#);
    }

    #[test]
    fn test_display() {
        let mut map = Map::new();
        map.insert("a".into(), Value::Array(vec![Value::from(1), Value::Null]));
        assert_eq!(Value::Object(map).to_string(), r#"{"a":[1,null]}"#);
    }
}
