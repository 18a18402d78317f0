//! Multi-valued request parameters.
//!
//! Query strings can repeat a name (`TestList=1&TestList=2`), so they do not
//! fit a plain [`Map`](crate::Map). [`QueryParams`] keeps every value of every
//! name, in order, and [`underscoreize_params`] renames the names to
//! `snake_case` before a request handler sees them.
//!
//! ```rust
//! use serde_pascal_case::{underscoreize_params, ConversionOptions, QueryParams};
//!
//! let params: QueryParams = [("TestList", "1"), ("TestList", "2"), ("PageSize", "20")]
//!     .into_iter()
//!     .collect();
//!
//! let converted = underscoreize_params(&params, &ConversionOptions::new());
//! assert_eq!(converted.get_all("test_list"), Some(&["1".to_string(), "2".to_string()][..]));
//! assert_eq!(converted.get("page_size"), Some("20"));
//! ```

use crate::{ConversionOptions, Direction};
use indexmap::IndexMap;

/// An ordered multi-map from parameter names to their values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(IndexMap<String, Vec<String>>);

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        QueryParams(IndexMap::new())
    }

    /// Adds a value under `name`, after any values already stored there.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.entry(name.into()).or_default().push(value.into());
    }

    /// Replaces all values stored under `name`.
    pub fn set_list(&mut self, name: impl Into<String>, values: Vec<String>) {
        self.0.insert(name.into(), values);
    }

    /// Returns the last value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Returns every value stored under `name`, in insertion order.
    #[must_use]
    pub fn get_all(&self, name: &str) -> Option<&[String]> {
        self.0.get(name).map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over names and their value lists.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Vec<String>> {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = QueryParams::new();
        for (name, value) in iter {
            params.append(name, value);
        }
        params
    }
}

/// Renames every parameter to `snake_case`.
///
/// Value lists are kept as they are. A name listed in `ignore_keys` (in
/// either spelling) keeps its original spelling. Names that end up equal
/// are merged, with the values in the order they were encountered.
#[must_use]
pub fn underscoreize_params(params: &QueryParams, options: &ConversionOptions) -> QueryParams {
    let mut output = QueryParams(IndexMap::with_capacity(params.len()));

    for (name, values) in params.iter() {
        let converted = Direction::ToSnake.convert(name, options);
        let renamed = if options.ignores_key(name, &converted) {
            name.clone()
        } else {
            converted
        };
        output
            .0
            .entry(renamed)
            .or_default()
            .extend(values.iter().cloned());
    }

    output
}
