//! Configuration options for key conversion.
//!
//! [`ConversionOptions`] carries the ignore lists and the digit-separator
//! flag. Build it once (in code, or by deserializing a settings document) and
//! pass it to every conversion call.
//!
//! ## Examples
//!
//! ```rust
//! use serde_pascal_case::{underscoreize_with_options, value, ConversionOptions};
//!
//! let options = ConversionOptions::new()
//!     .with_ignore_fields(["RawPayload"])
//!     .with_no_underscore_before_number(true);
//!
//! let input = value!({"RawPayload": {"KeepAsIs": 1}, "Retry3": 2});
//! let output = underscoreize_with_options(&input, &options);
//! assert_eq!(output, value!({"raw_payload": {"KeepAsIs": 1}, "retry3": 2}));
//! ```
//!
//! Loading from settings:
//!
//! ```rust
//! use serde_pascal_case::ConversionOptions;
//!
//! let options: ConversionOptions =
//!     serde_json::from_str(r#"{"ignore_keys": ["ID"]}"#).unwrap();
//! assert!(options.ignore_keys.contains("ID"));
//! assert!(!options.no_underscore_before_number);
//! ```

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Configuration for [`pascalize_with_options`](crate::pascalize_with_options)
/// and [`underscoreize_with_options`](crate::underscoreize_with_options).
///
/// Both ignore sets are matched against a key's original spelling and its
/// converted spelling, so a list written in either case style works.
///
/// # Examples
///
/// ```rust
/// use serde_pascal_case::ConversionOptions;
///
/// let options = ConversionOptions::new();
/// assert!(options.ignore_fields.is_empty());
/// assert!(options.ignore_keys.is_empty());
/// assert!(!options.no_underscore_before_number);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Keys whose values are copied without converting anything inside them.
    pub ignore_fields: IndexSet<String>,
    /// Keys whose own name is kept; their values are still converted.
    pub ignore_keys: IndexSet<String>,
    /// When converting to snake case, keep a digit run attached to the
    /// letter before it (`Before123` → `before123`).
    pub no_underscore_before_number: bool,
}

impl ConversionOptions {
    /// Creates default options: no ignore lists, underscore before numbers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds keys whose values must not be converted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pascal_case::ConversionOptions;
    ///
    /// let options = ConversionOptions::new().with_ignore_fields(["metadata", "Extra"]);
    /// assert!(options.ignore_fields.contains("Extra"));
    /// ```
    #[must_use]
    pub fn with_ignore_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Adds keys whose own names must not be converted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pascal_case::ConversionOptions;
    ///
    /// let options = ConversionOptions::new().with_ignore_keys(vec!["ID".to_string()]);
    /// assert!(options.ignore_keys.contains("ID"));
    /// ```
    #[must_use]
    pub fn with_ignore_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_no_underscore_before_number(mut self, enabled: bool) -> Self {
        self.no_underscore_before_number = enabled;
        self
    }

    pub(crate) fn ignores_field(&self, original: &str, converted: &str) -> bool {
        self.ignore_fields.contains(original) || self.ignore_fields.contains(converted)
    }

    pub(crate) fn ignores_key(&self, original: &str, converted: &str) -> bool {
        self.ignore_keys.contains(original) || self.ignore_keys.contains(converted)
    }
}
