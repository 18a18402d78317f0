//! Joining words back into a cased identifier.

use super::tokenizer::Word;

/// Target identifier style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Case {
    /// `PascalCase`: capitalized words, no separator.
    Pascal,
    /// `snake_case`: lowercase words joined with `_`.
    Snake,
}

/// Joins `words` into a single identifier in the given [`Case`].
///
/// Pascal lowercases each word and uppercases its first character, so a word
/// starting with a digit is emitted unchanged. Snake lowercases every word and
/// puts `_` between words; digit separators come only from the boundaries the
/// tokenizer produced.
///
/// # Examples
///
/// ```rust
/// use serde_pascal_case::case::{recompose, tokenize, Boundaries, Case};
///
/// let words = tokenize("only_1_key", Boundaries::default());
/// assert_eq!(recompose(words, Case::Pascal), "Only1Key");
///
/// let words = tokenize("WordWITHCaps", Boundaries::default());
/// assert_eq!(recompose(words, Case::Snake), "word_with_caps");
/// ```
#[must_use]
pub fn recompose<'a, I>(words: I, case: Case) -> String
where
    I: IntoIterator<Item = Word<'a>>,
{
    let mut output = String::new();

    for (i, word) in words.into_iter().enumerate() {
        match case {
            Case::Pascal => push_capitalized(&mut output, word.as_str()),
            Case::Snake => {
                if i > 0 {
                    output.push('_');
                }
                output.extend(word.as_str().chars().map(|c| c.to_ascii_lowercase()));
            }
        }
    }

    output
}

fn push_capitalized(output: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        output.push(first.to_ascii_uppercase());
        output.extend(chars.map(|c| c.to_ascii_lowercase()));
    }
}
