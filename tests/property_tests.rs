//! Property-based tests for the conversion guarantees that hold for whole
//! families of inputs rather than single examples.

use proptest::prelude::*;
use serde_pascal_case::case::{to_pascal, to_snake};
use serde_pascal_case::{pascalize, underscoreize, Key, Value};

/// Snake keys without ambiguous boundaries: every letter word has at least two
/// letters and digit words never touch each other.
fn snake_key() -> impl Strategy<Value = String> {
    prop::collection::vec(("[a-z]{2,8}", proptest::option::of("[0-9]{1,3}")), 1..5).prop_map(
        |parts| {
            parts
                .into_iter()
                .flat_map(|(word, digits)| std::iter::once(word).chain(digits))
                .collect::<Vec<_>>()
                .join("_")
        },
    )
}

fn nested_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z_ ]{0,10}".prop_map(Value::from),
    ];
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((snake_key(), inner), 0..6).prop_map(|entries| {
                Value::Object(
                    entries
                        .into_iter()
                        .map(|(k, v)| (Key::from(k), v))
                        .collect(),
                )
            }),
        ]
    })
}

proptest! {
    #[test]
    fn prop_snake_key_round_trips(key in snake_key()) {
        prop_assert_eq!(to_snake(&to_pascal(&key), false), key);
    }

    #[test]
    fn prop_pascal_output_has_no_underscores(key in "[A-Za-z0-9_]{0,24}") {
        prop_assert!(!to_pascal(&key).contains('_'));
    }

    #[test]
    fn prop_snake_output_is_lowercase(key in "[A-Za-z0-9_]{0,24}", glued in any::<bool>()) {
        let snake = to_snake(&key, glued);
        prop_assert!(!snake.chars().any(|c| c.is_ascii_uppercase()));
        prop_assert!(!snake.starts_with('_') && !snake.ends_with('_'));
        prop_assert!(!snake.contains("__"));
    }

    #[test]
    fn prop_to_snake_is_idempotent(key in "[A-Za-z0-9_]{0,24}", glued in any::<bool>()) {
        let once = to_snake(&key, glued);
        prop_assert_eq!(to_snake(&once, glued), once);
    }

    #[test]
    fn prop_nested_round_trip(value in nested_value()) {
        let reference = value.clone();
        let pascalized = pascalize(&value);
        prop_assert_eq!(&value, &reference);
        prop_assert_eq!(underscoreize(&pascalized), reference);
    }
}
