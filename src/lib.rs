//! # serde_pascal_case
//!
//! Recursive `snake_case` ↔ `PascalCase` key conversion for nested,
//! Serde-compatible values.
//!
//! APIs that speak `PascalCase` on the wire usually sit in front of code that
//! thinks in `snake_case`. This crate converts whole payloads between the two
//! in one call: every object key in an arbitrarily nested tree of objects,
//! arrays and scalars is rewritten, while values, integer keys and anything
//! listed in the ignore options are left alone.
//!
//! ## Key Features
//!
//! - **Deterministic word boundaries**: digits, acronym runs and single-letter
//!   words split the same way every time (`WordWITHCaps` → `word_with_caps`)
//! - **Ignore lists**: keep a key's name, or a key's whole value, unconverted
//! - **Order preserving**: objects keep their field order
//! - **Non-destructive**: input is borrowed, output is always a new tree
//! - **Stack safe**: conversion depth is limited by memory, not recursion
//! - **Serde compatible**: [`Value`] reads from and writes to any serde format
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_pascal_case::{pascalize, underscoreize, value};
//!
//! let incoming = value!({"WordWITHCaps": 9, "UPPERCASE": 15, "Pascal10Case": 17});
//! assert_eq!(
//!     underscoreize(&incoming),
//!     value!({"word_with_caps": 9, "uppercase": 15, "pascal_10_case": 17})
//! );
//!
//! let outgoing = value!({"two_word": 1, "only_1_key": 3, "mix_123123a_and_letters": 7});
//! assert_eq!(
//!     pascalize(&outgoing),
//!     value!({"TwoWord": 1, "Only1Key": 3, "Mix123123aAndLetters": 7})
//! );
//! ```
//!
//! ### Typed payloads
//!
//! ```rust
//! use serde::Serialize;
//! use serde_pascal_case::{pascalize_serialize, ConversionOptions};
//!
//! #[derive(Serialize)]
//! struct Account { account_id: u64, display_name: String }
//!
//! let account = Account { account_id: 7, display_name: "Ada".into() };
//! let value = pascalize_serialize(&account, &ConversionOptions::new()).unwrap();
//! assert_eq!(
//!     serde_json::to_string(&value).unwrap(),
//!     r#"{"AccountId":7,"DisplayName":"Ada"}"#
//! );
//! ```
//!
//! ## Conversion Rules
//!
//! See [`case`] for the word-boundary rules. Conversions are lossy for
//! acronyms: `UPPERCASE` becomes `uppercase`, which converts back to
//! `Uppercase`.

pub mod case;
pub mod error;
pub mod key;
pub mod macros;
pub mod map;
pub mod options;
pub mod params;
pub mod ser;
pub mod transform;
pub mod value;

pub use error::{Error, Result};
pub use key::{Key, LazyString};
pub use map::{Map, Metadata};
pub use options::ConversionOptions;
pub use params::{underscoreize_params, QueryParams};
pub use ser::{to_value, ValueSerializer};
pub use transform::{transform, transform_iter, Direction};
pub use value::{Number, Value};

use serde::Serialize;

/// Converts a single key to `PascalCase`.
///
/// Integer keys are returned unchanged; lazy keys are resolved and come
/// back as concrete strings.
///
/// # Examples
///
/// ```rust
/// use serde_pascal_case::{to_pascal_key, Key};
///
/// assert_eq!(to_pascal_key(&Key::from("only_c_letter")), Key::from("OnlyCLetter"));
/// assert_eq!(to_pascal_key(&Key::from(10)), Key::from(10));
/// ```
#[must_use]
pub fn to_pascal_key(key: &Key) -> Key {
    match key.as_text() {
        Some(text) => Key::String(case::to_pascal(text)),
        None => key.clone(),
    }
}

/// Converts a single key to `snake_case`.
///
/// # Examples
///
/// ```rust
/// use serde_pascal_case::{to_snake_key, Key};
///
/// assert_eq!(to_snake_key(&Key::from("OptionS1"), false), Key::from("option_s_1"));
/// assert_eq!(to_snake_key(&Key::from("Before123"), true), Key::from("before123"));
/// ```
#[must_use]
pub fn to_snake_key(key: &Key, no_underscore_before_number: bool) -> Key {
    match key.as_text() {
        Some(text) => Key::String(case::to_snake(text, no_underscore_before_number)),
        None => key.clone(),
    }
}

/// Converts every object key in `value` to `PascalCase` with default options.
#[must_use]
pub fn pascalize(value: &Value) -> Value {
    pascalize_with_options(value, &ConversionOptions::default())
}

/// Converts every object key in `value` to `PascalCase`.
///
/// `no_underscore_before_number` has no effect in this direction.
///
/// # Examples
///
/// ```rust
/// use serde_pascal_case::{pascalize_with_options, value, ConversionOptions};
///
/// let options = ConversionOptions::new().with_ignore_keys(["_links"]);
/// let output = pascalize_with_options(&value!({"_links": {"next_page": 2}}), &options);
/// assert_eq!(output, value!({"_links": {"NextPage": 2}}));
/// ```
#[must_use]
pub fn pascalize_with_options(value: &Value, options: &ConversionOptions) -> Value {
    transform(value, Direction::ToPascal, options)
}

/// Converts every object key in `value` to `snake_case` with default options.
#[must_use]
pub fn underscoreize(value: &Value) -> Value {
    underscoreize_with_options(value, &ConversionOptions::default())
}

/// Converts every object key in `value` to `snake_case`.
///
/// # Examples
///
/// ```rust
/// use serde_pascal_case::{underscoreize_with_options, value, ConversionOptions};
///
/// let options = ConversionOptions::new().with_no_underscore_before_number(true);
/// let output = underscoreize_with_options(&value!({"NoUnderscoreBefore123": 1}), &options);
/// assert_eq!(output, value!({"no_underscore_before123": 1}));
/// ```
#[must_use]
pub fn underscoreize_with_options(value: &Value, options: &ConversionOptions) -> Value {
    transform(value, Direction::ToSnake, options)
}

/// Drains a finite sequence of values into a `PascalCase`-keyed array.
///
/// # Examples
///
/// ```rust
/// use serde_pascal_case::{pascalize_iter, value, ConversionOptions};
///
/// let rows = vec![value!({"simple_is_better": "than complex"}), value!({"that_is": "correct"})];
/// let output = pascalize_iter(rows, &ConversionOptions::new());
/// assert_eq!(
///     output,
///     value!([{"SimpleIsBetter": "than complex"}, {"ThatIs": "correct"}])
/// );
/// ```
#[must_use]
pub fn pascalize_iter<I>(values: I, options: &ConversionOptions) -> Value
where
    I: IntoIterator<Item = Value>,
{
    transform_iter(values, Direction::ToPascal, options)
}

/// Drains a finite sequence of values into a `snake_case`-keyed array.
#[must_use]
pub fn underscoreize_iter<I>(values: I, options: &ConversionOptions) -> Value
where
    I: IntoIterator<Item = Value>,
{
    transform_iter(values, Direction::ToSnake, options)
}

/// Serializes `value` into a [`Value`] and converts its keys to `PascalCase`.
///
/// # Errors
///
/// Returns an error if `value` cannot be represented as a [`Value`], see
/// [`to_value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn pascalize_serialize<T>(value: &T, options: &ConversionOptions) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    Ok(pascalize_with_options(&to_value(value)?, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    #[test]
    fn test_key_conversion_resolves_lazy_keys() {
        let lazy = Key::Lazy(LazyString::new(|| "lazy_name".to_string()));
        let converted = to_pascal_key(&lazy);
        assert!(matches!(converted, Key::String(ref s) if s == "LazyName"));
        assert_eq!(to_snake_key(&converted, false), Key::from("lazy_name"));
    }

    #[test]
    fn test_integer_keys_pass_through_both_ways() {
        let data = value!({1: "test", "a": "abc"});
        let pascalized = pascalize(&data);
        assert_eq!(pascalized, value!({1: "test", "A": "abc"}));
        assert_eq!(underscoreize(&pascalize(&value!({1: "test"}))), value!({1: "test"}));
    }

    #[test]
    fn test_pascalize_ignores_digit_flag() {
        let options = ConversionOptions::new().with_no_underscore_before_number(true);
        assert_eq!(
            pascalize_with_options(&value!({"key_10": 1}), &options),
            value!({"Key10": 1})
        );
    }

    #[test]
    fn test_pascalize_serialize() {
        #[derive(Serialize)]
        struct Page {
            page_items: Vec<(u8, u8)>,
        }
        let value = pascalize_serialize(
            &Page {
                page_items: vec![(1, 2)],
            },
            &ConversionOptions::new(),
        )
        .unwrap();
        assert_eq!(value, value!({"PageItems": [[1, 2]]}));
    }
}
