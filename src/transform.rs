//! Recursive key conversion over nested values.
//!
//! [`transform`] rebuilds a [`Value`] tree with every object key converted in
//! one [`Direction`]. The input is only borrowed; the result is always a new
//! tree. Traversal keeps its own heap-allocated stack of open containers, so
//! deeply nested input cannot overflow the call stack, including subtrees
//! copied under an ignored field. Dropping such a tree is still recursive.
//!
//! For each object entry `(key, value)`:
//!
//! 1. the key is converted unless its original or converted spelling is in
//!    `ignore_keys`;
//! 2. the value is converted recursively unless the key's original or
//!    converted spelling is in `ignore_fields`, in which case it is copied
//!    with every nested key kept as it is;
//! 3. the entry is inserted into the new object in source order.
//!
//! Integer keys are never converted and never match an ignore list. Object
//! [`Metadata`](crate::Metadata) is carried over to the rebuilt object.

use crate::{case, ConversionOptions, Key, Map, Value};

/// Which way keys are converted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `snake_case` → `PascalCase`
    ToPascal,
    /// `PascalCase` → `snake_case`
    ToSnake,
}

impl Direction {
    /// Converts a single identifier in this direction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_pascal_case::{ConversionOptions, Direction};
    ///
    /// let options = ConversionOptions::new();
    /// assert_eq!(Direction::ToPascal.convert("two_word", &options), "TwoWord");
    /// assert_eq!(Direction::ToSnake.convert("TwoWord", &options), "two_word");
    /// ```
    #[must_use]
    pub fn convert(self, text: &str, options: &ConversionOptions) -> String {
        match self {
            Direction::ToPascal => case::to_pascal(text),
            Direction::ToSnake => case::to_snake(text, options.no_underscore_before_number),
        }
    }
}

/// Converts every object key in `value`.
///
/// # Examples
///
/// ```rust
/// use serde_pascal_case::{transform, value, ConversionOptions, Direction};
///
/// let input = value!({"order_items": [{"unit_price": 3}]});
/// let output = transform(&input, Direction::ToPascal, &ConversionOptions::new());
/// assert_eq!(output, value!({"OrderItems": [{"UnitPrice": 3}]}));
/// ```
#[must_use]
pub fn transform(value: &Value, direction: Direction, options: &ConversionOptions) -> Value {
    Transformer { direction, options }.run(value)
}

/// Drains `values` and returns the converted elements as a [`Value::Array`].
///
/// The source must be finite; an endless iterator never returns.
///
/// # Examples
///
/// ```rust
/// use serde_pascal_case::{transform_iter, value, ConversionOptions, Direction};
///
/// let source = (1..=2).map(|n| value!({"page_number": n}));
/// let output = transform_iter(source, Direction::ToPascal, &ConversionOptions::new());
/// assert_eq!(output, value!([{"PageNumber": 1}, {"PageNumber": 2}]));
/// ```
#[must_use]
pub fn transform_iter<I>(values: I, direction: Direction, options: &ConversionOptions) -> Value
where
    I: IntoIterator<Item = Value>,
{
    let transformer = Transformer { direction, options };
    values.into_iter().map(|v| transformer.run(&v)).collect()
}

struct Transformer<'o> {
    direction: Direction,
    options: &'o ConversionOptions,
}

/// Whether a container's keys are converted or copied as they are.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Convert,
    Copy,
}

enum Entered<'a> {
    Leaf(Value),
    Open(Frame<'a>),
}

enum Frame<'a> {
    Array {
        source: std::slice::Iter<'a, Value>,
        output: Vec<Value>,
        mode: Mode,
    },
    Object {
        source: indexmap::map::Iter<'a, Key, Value>,
        output: Map,
        mode: Mode,
        // Set whenever a child value is being built.
        pending: Option<Key>,
    },
}

impl<'o> Transformer<'o> {
    fn run(&self, root: &Value) -> Value {
        let mut current = match Self::enter(root, Mode::Convert) {
            Entered::Leaf(value) => return value,
            Entered::Open(frame) => frame,
        };
        let mut parents: Vec<Frame<'_>> = Vec::new();

        loop {
            match current.next_child(self) {
                Some((child, mode)) => match Self::enter(child, mode) {
                    Entered::Leaf(value) => current.push(value),
                    Entered::Open(frame) => parents.push(std::mem::replace(&mut current, frame)),
                },
                None => match parents.pop() {
                    Some(mut parent) => {
                        parent.push(current.finish());
                        current = parent;
                    }
                    None => return current.finish(),
                },
            }
        }
    }

    fn enter(value: &Value, mode: Mode) -> Entered<'_> {
        match value {
            Value::Array(items) => Entered::Open(Frame::Array {
                source: items.iter(),
                output: Vec::with_capacity(items.len()),
                mode,
            }),
            Value::Object(map) => {
                let mut output = Map::with_capacity(map.len());
                output.set_metadata(map.metadata().cloned());
                Entered::Open(Frame::Object {
                    source: map.iter(),
                    output,
                    mode,
                    pending: None,
                })
            }
            scalar => Entered::Leaf(scalar.clone()),
        }
    }

    /// Returns the output key and how its value is built.
    fn rename(&self, key: &Key) -> (Key, Mode) {
        let Some(original) = key.as_text() else {
            return (key.clone(), Mode::Convert);
        };

        let converted = self.direction.convert(original, self.options);
        let mode = if self.options.ignores_field(original, &converted) {
            Mode::Copy
        } else {
            Mode::Convert
        };
        if self.options.ignores_key(original, &converted) {
            (key.to_resolved(), mode)
        } else {
            (Key::String(converted), mode)
        }
    }
}

impl<'a> Frame<'a> {
    /// Advances to the next child value and the mode it is built in.
    fn next_child(&mut self, transformer: &Transformer<'_>) -> Option<(&'a Value, Mode)> {
        match self {
            Frame::Array { source, mode, .. } => source.next().map(|value| (value, *mode)),
            Frame::Object {
                source,
                mode,
                pending,
                ..
            } => {
                let (key, value) = source.next()?;
                let (renamed, child_mode) = match mode {
                    Mode::Convert => transformer.rename(key),
                    Mode::Copy => (key.clone(), Mode::Copy),
                };
                *pending = Some(renamed);
                Some((value, child_mode))
            }
        }
    }

    fn push(&mut self, value: Value) {
        match self {
            Frame::Array { output, .. } => output.push(value),
            Frame::Object {
                output, pending, ..
            } => {
                if let Some(key) = pending.take() {
                    output.insert(key, value);
                }
            }
        }
    }

    fn finish(self) -> Value {
        match self {
            Frame::Array { output, .. } => Value::Array(output),
            Frame::Object { output, .. } => Value::Object(output),
        }
    }
}
