//! Word-boundary detection for identifier-style strings.
//!
//! [`tokenize`] walks an identifier once and yields [`Word`]s, each a borrowed
//! slice of the input. Underscores are hard boundaries and never appear in a
//! word; inside an underscore-free run, boundaries fall on case and digit
//! transitions:
//!
//! | Transition | Example | Words |
//! |---|---|---|
//! | lowercase → uppercase | `twoWord` | `two`, `Word` |
//! | digit → uppercase | `Pascal10Case` | `Pascal`, `10`, `Case` |
//! | acronym → capitalized word | `WITHCaps` | `WITH`, `Caps` |
//! | letter → digit (optional) | `Key10` | `Key`, `10` |
//!
//! A digit followed by a lowercase letter is never split, so `123123a` stays a
//! single word.
//!
//! ## Examples
//!
//! ```rust
//! use serde_pascal_case::case::{tokenize, Boundaries};
//!
//! let words: Vec<&str> = tokenize("WordWITHCaps", Boundaries::default())
//!     .map(|w| w.as_str())
//!     .collect();
//! assert_eq!(words, vec!["Word", "WITH", "Caps"]);
//! ```

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

/// Which optional boundaries the tokenizer inserts.
///
/// Case transitions and underscores always split. Only the letter → digit
/// transition is configurable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Boundaries {
    /// Split between a letter and a following digit (`Key10` → `Key`, `10`).
    pub split_letter_digit: bool,
}

impl Default for Boundaries {
    fn default() -> Self {
        Boundaries {
            split_letter_digit: true,
        }
    }
}

impl Boundaries {
    /// Boundaries that keep digits glued to a preceding letter (`Before123`).
    #[must_use]
    pub const fn without_letter_digit() -> Self {
        Boundaries {
            split_letter_digit: false,
        }
    }
}

/// Shape of a [`Word`], derived from the character classes it contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordKind {
    /// Only lowercase letters: `word`.
    Lower,
    /// One uppercase letter followed by lowercase letters: `Word`.
    Capitalized,
    /// Only uppercase letters: `WITH`.
    Upper,
    /// Only digits: `123`.
    Digits,
    /// Any other combination: `123123a`, `user.email`.
    Mixed,
}

/// A single word of an identifier, borrowed from the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Word<'a> {
    text: &'a str,
    kind: WordKind,
}

impl<'a> Word<'a> {
    fn new(text: &'a str) -> Self {
        Word {
            text,
            kind: classify(text),
        }
    }

    /// The word exactly as it appeared in the identifier.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.text
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> WordKind {
        self.kind
    }

    /// Returns `true` if the word is a pure digit run.
    #[inline]
    #[must_use]
    pub fn is_digits(&self) -> bool {
        self.kind == WordKind::Digits
    }
}

impl fmt::Display for Word<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

fn classify(text: &str) -> WordKind {
    let mut chars = text.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return WordKind::Mixed,
    };
    let rest = chars.as_str();

    if text.chars().all(|c| c.is_ascii_digit()) {
        WordKind::Digits
    } else if text.chars().all(|c| c.is_ascii_lowercase()) {
        WordKind::Lower
    } else if text.chars().all(|c| c.is_ascii_uppercase()) {
        WordKind::Upper
    } else if first.is_ascii_uppercase() && rest.chars().all(|c| c.is_ascii_lowercase()) {
        WordKind::Capitalized
    } else {
        WordKind::Mixed
    }
}

/// Splits `identifier` into words.
///
/// The returned iterator is lazy and allocation-free; collect it when the
/// words are needed more than once.
///
/// # Examples
///
/// ```rust
/// use serde_pascal_case::case::{tokenize, Boundaries};
///
/// let split: Vec<_> = tokenize("Key10", Boundaries::default()).map(|w| w.as_str()).collect();
/// assert_eq!(split, vec!["Key", "10"]);
///
/// let glued: Vec<_> = tokenize("Key10", Boundaries::without_letter_digit())
///     .map(|w| w.as_str())
///     .collect();
/// assert_eq!(glued, vec!["Key10"]);
/// ```
#[must_use]
pub fn tokenize(identifier: &str, boundaries: Boundaries) -> Words<'_> {
    Words {
        source: identifier,
        chars: identifier.char_indices().peekable(),
        boundaries,
    }
}

/// Iterator over the [`Word`]s of an identifier, created by [`tokenize`].
#[derive(Debug, Clone)]
pub struct Words<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    boundaries: Boundaries,
}

impl Words<'_> {
    fn splits_before(&self, prev: char, current: char, next: Option<char>) -> bool {
        if current.is_ascii_uppercase() {
            if prev.is_ascii_lowercase() || prev.is_ascii_digit() {
                return true;
            }
            // Last capital of an acronym run starts the next word.
            return prev.is_ascii_uppercase() && next.map_or(false, |n| n.is_ascii_lowercase());
        }

        current.is_ascii_digit() && prev.is_ascii_alphabetic() && self.boundaries.split_letter_digit
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = Word<'a>;

    fn next(&mut self) -> Option<Word<'a>> {
        while self.chars.next_if(|&(_, c)| c == '_').is_some() {}

        let (start, mut prev) = self.chars.next()?;
        let mut end = start + prev.len_utf8();

        while let Some(&(idx, current)) = self.chars.peek() {
            if current == '_' {
                break;
            }

            let next = self.source[idx + current.len_utf8()..].chars().next();
            if self.splits_before(prev, current, next) {
                break;
            }

            self.chars.next();
            end = idx + current.len_utf8();
            prev = current;
        }

        Some(Word::new(&self.source[start..end]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<&str> {
        tokenize(s, Boundaries::default()).map(|w| w.as_str()).collect()
    }

    fn words_glued(s: &str) -> Vec<&str> {
        tokenize(s, Boundaries::without_letter_digit())
            .map(|w| w.as_str())
            .collect()
    }

    #[test]
    fn test_empty_and_underscores_only() {
        assert!(words("").is_empty());
        assert!(words("___").is_empty());
    }

    #[test]
    fn test_underscore_is_hard_boundary() {
        assert_eq!(words("two_word"), vec!["two", "word"]);
        assert_eq!(words("_leading__double_"), vec!["leading", "double"]);
    }

    #[test]
    fn test_case_transitions() {
        assert_eq!(words("TwoWord"), vec!["Two", "Word"]);
        assert_eq!(words("OnlyOneLetterA"), vec!["Only", "One", "Letter", "A"]);
        assert_eq!(words("BOnlyOneLetter"), vec!["B", "Only", "One", "Letter"]);
        assert_eq!(words("OnlyCLetter"), vec!["Only", "C", "Letter"]);
    }

    #[test]
    fn test_acronym_run() {
        assert_eq!(words("WordWITHCaps"), vec!["Word", "WITH", "Caps"]);
        assert_eq!(words("UPPERCASE"), vec!["UPPERCASE"]);
        assert_eq!(words("HTTPServer"), vec!["HTTP", "Server"]);
    }

    #[test]
    fn test_digit_transitions() {
        assert_eq!(words("Key10"), vec!["Key", "10"]);
        assert_eq!(words("OptionS10"), vec!["Option", "S", "10"]);
        assert_eq!(words("Pascal10Case"), vec!["Pascal", "10", "Case"]);
        assert_eq!(
            words("Mix123123aAndLetters"),
            vec!["Mix", "123123a", "And", "Letters"]
        );
        assert_eq!(words("123Abc"), vec!["123", "Abc"]);
        assert_eq!(words("1abc"), vec!["1abc"]);
    }

    #[test]
    fn test_acronym_next_to_digits() {
        assert_eq!(words("ABC123def"), vec!["ABC", "123def"]);
        assert_eq!(words_glued("ABC123def"), vec!["ABC123def"]);
    }

    #[test]
    fn test_letter_digit_split_disabled() {
        assert_eq!(
            words_glued("NoUnderscoreBefore123"),
            vec!["No", "Underscore", "Before123"]
        );
        // digit -> uppercase still splits
        assert_eq!(words_glued("Before123Next"), vec!["Before123", "Next"]);
    }

    #[test]
    fn test_other_characters_stay_inside_words() {
        assert_eq!(words("user.email"), vec!["user.email"]);
        assert_eq!(words("--"), vec!["--"]);
        // non-ASCII letters have no case class here
        assert_eq!(words("caféBar"), vec!["caféBar"]);
    }

    #[test]
    fn test_word_kinds() {
        let kinds: Vec<WordKind> = tokenize("Mix123WITHCaps_low_7", Boundaries::default())
            .map(|w| w.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                WordKind::Capitalized,
                WordKind::Digits,
                WordKind::Upper,
                WordKind::Capitalized,
                WordKind::Lower,
                WordKind::Digits,
            ]
        );
        assert_eq!(classify("123123a"), WordKind::Mixed);
    }
}
