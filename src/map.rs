//! Ordered map type for nested objects.
//!
//! This module provides [`Map`], a wrapper around [`IndexMap`] keyed by
//! [`Key`] that keeps insertion order, so converted objects list their
//! fields in the same order as the input.
//!
//! A map can also carry opaque [`Metadata`], for example a handle to the
//! serializer that produced it. Conversions copy the metadata onto the map
//! they build, and map equality ignores it.
//!
//! ## Examples
//!
//! ```rust
//! use serde_pascal_case::{Map, Value};
//!
//! let mut map = Map::new();
//! map.insert("name".into(), Value::from("Alice"));
//! map.insert(1.into(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::{Key, Value};
use indexmap::{Equivalent, IndexMap};
use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Opaque data attached to a [`Map`].
///
/// Cloning shares the underlying allocation; use [`Metadata::downcast_ref`]
/// to get the concrete value back.
///
/// # Examples
///
/// ```rust
/// use serde_pascal_case::Metadata;
///
/// let meta = Metadata::new("UserSerializer");
/// assert_eq!(meta.downcast_ref::<&str>(), Some(&"UserSerializer"));
/// ```
#[derive(Clone)]
pub struct Metadata(Arc<dyn Any + Send + Sync>);

impl Metadata {
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Metadata(Arc::new(value))
    }

    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    /// Returns `true` if both handles point to the same allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Metadata) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Metadata(..)")
    }
}

/// An ordered map of [`Key`]s to [`Value`]s with optional [`Metadata`].
///
/// # Examples
///
/// ```rust
/// use serde_pascal_case::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("first".into(), Value::from(1));
/// map.insert("second".into(), Value::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<String> = map.keys().map(|k| k.to_string()).collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Map {
    entries: IndexMap<Key, Value>,
    metadata: Option<Metadata>,
}

// Borrowed lookup by text without allocating a `Key`.
struct TextKey<'a>(&'a str);

impl Hash for TextKey<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl Equivalent<Key> for TextKey<'_> {
    fn equivalent(&self, key: &Key) -> bool {
        key.as_text() == Some(self.0)
    }
}

impl Map {
    /// Creates an empty `Map`.
    #[must_use]
    pub fn new() -> Self {
        Map {
            entries: IndexMap::new(),
            metadata: None,
        }
    }

    /// Creates an empty `Map` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Map {
            entries: IndexMap::with_capacity(capacity),
            metadata: None,
        }
    }

    /// Attaches metadata, replacing any previous metadata.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pascal_case::{Map, Metadata};
    ///
    /// let map = Map::new().with_metadata(Metadata::new(42u32));
    /// assert_eq!(map.metadata().and_then(|m| m.downcast_ref::<u32>()), Some(&42));
    /// ```
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    #[must_use]
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn set_metadata(&mut self, metadata: Option<Metadata>) {
        self.metadata = metadata;
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained an equal key, its value is replaced in
    /// place (the entry keeps its position) and the old value is returned.
    pub fn insert(&mut self, key: Key, value: Value) -> Option<Value> {
        self.entries.insert(key, value)
    }

    /// Returns the value stored under a string key.
    ///
    /// Lazy keys are matched by their resolved text.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(&TextKey(key))
    }

    /// Returns the value stored under any key, including integer keys.
    #[must_use]
    pub fn get_key(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&TextKey(key))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.entries.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.entries.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.entries.iter()
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Map {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(Key, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (Key, Value)>>(iter: T) -> Self {
        Map {
            entries: IndexMap::from_iter(iter),
            metadata: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LazyString;

    #[test]
    fn test_insertion_order() {
        let map: Map = [("b", 1), ("a", 2), ("c", 3)]
            .into_iter()
            .map(|(k, v)| (Key::from(k), Value::from(v)))
            .collect();
        let keys: Vec<String> = map.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut map = Map::new();
        map.insert("x".into(), Value::from(1));
        map.insert("y".into(), Value::from(2));
        assert_eq!(map.insert("x".into(), Value::from(3)), Some(Value::from(1)));
        let values: Vec<i64> = map.values().filter_map(|v| v.as_i64()).collect();
        assert_eq!(values, vec![3, 2]);
    }

    #[test]
    fn test_lookup_by_text_finds_lazy_key() {
        let mut map = Map::new();
        map.insert(
            Key::Lazy(LazyString::new(|| "lazy_key".to_string())),
            Value::Bool(true),
        );
        map.insert(5.into(), Value::Null);

        assert_eq!(map.get("lazy_key"), Some(&Value::Bool(true)));
        assert!(map.contains_key("lazy_key"));
        assert!(!map.contains_key("5"));
        assert_eq!(map.get_key(&Key::Integer(5)), Some(&Value::Null));
    }

    #[test]
    fn test_equality_ignores_metadata() {
        let mut plain = Map::new();
        plain.insert("id".into(), Value::from(3));
        let tagged = plain.clone().with_metadata(Metadata::new(()));
        assert_eq!(plain, tagged);
    }

    #[test]
    fn test_metadata_shared_on_clone() {
        let map = Map::new().with_metadata(Metadata::new(String::from("serializer")));
        let copy = map.clone();
        let (a, b) = (map.metadata().unwrap(), copy.metadata().unwrap());
        assert!(a.ptr_eq(b));
        assert_eq!(b.downcast_ref::<String>().map(String::as_str), Some("serializer"));
    }
}
