use serde_pascal_case::{pascalize, value, Key, Map, Number, Value};

#[test]
fn test_value_macro_null() {
    assert_eq!(value!(null), Value::Null);
}

#[test]
fn test_value_macro_booleans() {
    assert_eq!(value!(true), Value::Bool(true));
    assert_eq!(value!(false), Value::Bool(false));
}

#[test]
fn test_value_macro_numbers() {
    assert_eq!(value!(42), Value::Number(Number::Integer(42)));
    assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
    assert_eq!(value!((-123)), Value::Number(Number::Integer(-123)));
}

#[test]
fn test_value_macro_strings() {
    assert_eq!(value!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(value!(""), Value::String(String::new()));
}

#[test]
fn test_value_macro_variables() {
    let name = String::from("Alice");
    let count = 3i64;
    let obj = value!({"user_name": name, "login_count": count});
    let map = obj.as_object().unwrap();
    assert_eq!(map.get("user_name").and_then(Value::as_str), Some("Alice"));
    assert_eq!(map.get("login_count").and_then(Value::as_i64), Some(3));
}

#[test]
fn test_value_macro_nested() {
    let data = value!({
        "page_info": {"has_next_page": true, "end_cursor": null},
        "edges": [{"node_id": 1}, {"node_id": 2}],
        404: "not_found"
    });

    let mut page_info = Map::new();
    page_info.insert(Key::from("has_next_page"), Value::Bool(true));
    page_info.insert(Key::from("end_cursor"), Value::Null);

    let map = data.as_object().unwrap();
    assert_eq!(map.get("page_info"), Some(&Value::Object(page_info)));
    assert_eq!(
        map.get("edges").and_then(Value::as_array).map(Vec::len),
        Some(2)
    );
    assert_eq!(
        map.get_key(&Key::Integer(404)),
        Some(&Value::from("not_found"))
    );
}

#[test]
fn test_value_macro_output_converts() {
    let data = value!({"page_info": {"has_next_page": true}});
    assert_eq!(
        pascalize(&data),
        value!({"PageInfo": {"HasNextPage": true}})
    );
}
