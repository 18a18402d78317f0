//! String-level case conversion.
//!
//! This module holds the two halves of every key conversion, a
//! [`tokenizer`] that finds word boundaries and a [`recompose`]r that joins
//! words in the target style, plus the [`to_pascal`] and [`to_snake`]
//! conversions built from them.
//!
//! ## Examples
//!
//! ```rust
//! use serde_pascal_case::case::{to_pascal, to_snake};
//!
//! assert_eq!(to_pascal("mix_123123a_and_letters"), "Mix123123aAndLetters");
//! assert_eq!(to_snake("Pascal10Case", false), "pascal_10_case");
//! assert_eq!(to_snake("NoUnderscoreBefore123", true), "no_underscore_before123");
//! ```
//!
//! Converting snake → Pascal → snake is lossy for acronyms: `UPPERCASE`
//! becomes `Uppercase` and then `uppercase`.

pub mod recompose;
pub mod tokenizer;

pub use recompose::{recompose, Case};
pub use tokenizer::{tokenize, Boundaries, Word, WordKind, Words};

/// Converts an identifier to `PascalCase`.
///
/// Splits on underscores and on internal case and digit transitions, then
/// capitalizes each word.
///
/// # Examples
///
/// ```rust
/// use serde_pascal_case::case::to_pascal;
///
/// assert_eq!(to_pascal("two_word"), "TwoWord");
/// assert_eq!(to_pascal("b_only_one_letter"), "BOnlyOneLetter");
/// ```
#[must_use]
pub fn to_pascal(identifier: &str) -> String {
    recompose(tokenize(identifier, Boundaries::default()), Case::Pascal)
}

/// Converts an identifier to `snake_case`.
///
/// With `no_underscore_before_number` set, a digit run that directly follows
/// a letter stays attached to it (`Before123` → `before123`).
///
/// # Examples
///
/// ```rust
/// use serde_pascal_case::case::to_snake;
///
/// assert_eq!(to_snake("WordWITHCaps", false), "word_with_caps");
/// assert_eq!(to_snake("AnotherKey10", false), "another_key_10");
/// assert_eq!(to_snake("AnotherKey10", true), "another_key10");
/// ```
#[must_use]
pub fn to_snake(identifier: &str, no_underscore_before_number: bool) -> String {
    let boundaries = if no_underscore_before_number {
        Boundaries::without_letter_digit()
    } else {
        Boundaries::default()
    };
    recompose(tokenize(identifier, boundaries), Case::Snake)
}
