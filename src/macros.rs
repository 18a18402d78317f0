/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Object keys may be string or integer literals; any other expression is
/// turned into a value with `Value::from`.
///
/// ```rust
/// use serde_pascal_case::{value, Key, Value};
///
/// let data = value!({
///     "user_name": "Alice",
///     "roles": ["admin", null],
///     1: true
/// });
///
/// let obj = data.as_object().unwrap();
/// assert_eq!(obj.get("user_name"), Some(&Value::from("Alice")));
/// assert_eq!(obj.get_key(&Key::Integer(1)), Some(&Value::Bool(true)));
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($crate::Key::from($key), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
