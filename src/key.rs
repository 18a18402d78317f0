//! Map keys and deferred strings.
//!
//! A [`Key`] is either an integer, a concrete string, or a [`LazyString`]
//! whose text is produced on first use. Only string-like keys are case
//! converted; integer keys always pass through untouched.
//!
//! ```rust
//! use serde_pascal_case::{Key, LazyString};
//!
//! let lazy = Key::Lazy(LazyString::new(|| "test_key".to_string()));
//! assert_eq!(lazy, Key::from("test_key"));
//! assert_eq!(Key::from(1).as_text(), None);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

/// A string whose text is computed on first access and cached.
///
/// Clones share the cache, so the thunk runs at most once per original
/// value. Equality, hashing and ordering all look at the resolved text.
///
/// # Examples
///
/// ```rust
/// use serde_pascal_case::LazyString;
///
/// let lazy = LazyString::new(|| format!("{}_{}", "two", "word"));
/// assert!(!lazy.is_resolved());
/// assert_eq!(lazy.resolve(), "two_word");
/// assert!(lazy.is_resolved());
/// ```
#[derive(Clone)]
pub struct LazyString {
    thunk: Arc<dyn Fn() -> String + Send + Sync>,
    cell: Arc<OnceLock<String>>,
}

impl LazyString {
    /// Creates a deferred string from a thunk.
    pub fn new<F>(thunk: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        LazyString {
            thunk: Arc::new(thunk),
            cell: Arc::new(OnceLock::new()),
        }
    }

    /// Returns the text, running the thunk if it has not run yet.
    pub fn resolve(&self) -> &str {
        self.cell.get_or_init(|| (self.thunk)())
    }

    /// Returns `true` once the thunk has produced its text.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl fmt::Debug for LazyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.cell.get() {
            Some(text) => f.debug_tuple("LazyString").field(text).finish(),
            None => f.write_str("LazyString(<unresolved>)"),
        }
    }
}

impl fmt::Display for LazyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resolve())
    }
}

impl PartialEq for LazyString {
    fn eq(&self, other: &Self) -> bool {
        self.resolve() == other.resolve()
    }
}

impl Eq for LazyString {}

impl Hash for LazyString {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.resolve().hash(state);
    }
}

impl Serialize for LazyString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.resolve())
    }
}

/// A mapping key.
///
/// `String` and `Lazy` keys holding the same text are equal and hash the
/// same, so a lazy key can be looked up with a plain string.
#[derive(Clone, Debug)]
pub enum Key {
    Integer(i64),
    String(String),
    Lazy(LazyString),
}

impl Key {
    /// Returns the key's text, resolving a lazy key. Integer keys have no text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Key::Integer(_) => None,
            Key::String(s) => Some(s),
            Key::Lazy(lazy) => Some(lazy.resolve()),
        }
    }

    /// Replaces a lazy key with a concrete string key. Other keys are cloned.
    #[must_use]
    pub fn to_resolved(&self) -> Key {
        match self {
            Key::Lazy(lazy) => Key::String(lazy.resolve().to_string()),
            other => other.clone(),
        }
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Key::Integer(a), Key::Integer(b)) => a == b,
            (Key::Integer(_), _) | (_, Key::Integer(_)) => false,
            _ => self.as_text() == other.as_text(),
        }
    }
}

impl Eq for Key {}

impl Hash for Key {
    // Strings hash exactly like `str` so `Map::get(&str)` can find them.
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Key::Integer(i) => i.hash(state),
            Key::String(s) => s.as_str().hash(state),
            Key::Lazy(lazy) => lazy.resolve().hash(state),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Integer(i) => write!(f, "{}", i),
            Key::String(s) => f.write_str(s),
            Key::Lazy(lazy) => f.write_str(lazy.resolve()),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::String(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::String(value)
    }
}

impl From<LazyString> for Key {
    fn from(value: LazyString) -> Self {
        Key::Lazy(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Integer(value as i64)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Integer(value)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Integer(value as i64)
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Key::Integer(i) => serializer.serialize_i64(*i),
            Key::String(s) => serializer.serialize_str(s),
            Key::Lazy(lazy) => serializer.serialize_str(lazy.resolve()),
        }
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct KeyVisitor;

        impl<'de> Visitor<'de> for KeyVisitor {
            type Value = Key;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer map key")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Key, E> {
                Ok(Key::Integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Key, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(Key::Integer)
                    .map_err(|_| E::custom(format!("integer key {} out of range", value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Key, E> {
                Ok(Key::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Key, E> {
                Ok(Key::String(value))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}
