use dotwalk::{data_get, data_set, dot, undot, Value};
use serde_json::json;

fn v(json: serde_json::Value) -> Value {
    json.into()
}

#[test]
fn test_dot_flattens_nested_objects() {
    let value = v(json!({"a": {"b": 1}}));

    assert_eq!(dot(&value), v(json!({"a.b": 1})));
}

#[test]
fn test_dot_flattens_arrays_with_index_segments() {
    let value = v(json!({"a": [1, {"b": 2}]}));

    assert_eq!(dot(&value), v(json!({"a.0": 1, "a.1.b": 2})));
}

#[test]
fn test_dot_keeps_empty_containers_as_leaves() {
    let value = v(json!({"a": {}, "b": [], "c": {"d": {}}}));

    assert_eq!(dot(&value), v(json!({"a": {}, "b": [], "c.d": {}})));
}

#[test]
fn test_dot_on_scalar_passes_through() {
    assert_eq!(dot(&Value::from(5)), Value::from(5));
}

#[test]
fn test_undot_builds_nested_objects() {
    let flat = v(json!({"a.b": 1}));

    assert_eq!(undot(&flat), v(json!({"a": {"b": 1}})));
}

#[test]
fn test_undot_rebuilds_arrays_from_index_segments() {
    let flat = v(json!({"a.0": 1, "a.1": 2}));

    assert_eq!(undot(&flat), v(json!({"a": [1, 2]})));
}

#[test]
fn test_undot_dot_round_trip() {
    let cases = [
        json!({"a": {"b": 1}}),
        json!({"a": [1, 2], "b": {"c": [3]}}),
        json!([1, [2, 3]]),
        json!({"a": {}, "b": [], "c": {"d": {}}}),
        json!({"users": [{"name": "a"}, {"name": "b", "tags": ["x"]}]}),
        json!({"list": [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]}),
    ];

    for case in cases {
        let value = v(case);
        assert_eq!(undot(&dot(&value)), value);
    }
}

#[test]
fn test_data_get_without_key_returns_the_target() {
    let value = v(json!({"a": 1}));

    assert_eq!(data_get(&value, None, ()), value);
}

#[test]
fn test_data_get_plain_path() {
    let value = v(json!({"a": {"b": 2}}));

    assert_eq!(data_get(&value, Some("a.b"), ()), Value::Number(2.0));
    assert_eq!(data_get(&value, Some("a.x"), 7), Value::Number(7.0));
}

#[test]
fn test_data_get_wildcard_collects() {
    let value = v(json!({"users": [{"name": "a"}, {"name": "b"}]}));

    assert_eq!(
        data_get(&value, Some("users.*.name"), ()),
        v(json!(["a", "b"]))
    );
}

#[test]
fn test_data_get_wildcard_fills_misses_with_null() {
    let value = v(json!({"users": [{"name": "a"}, {"id": 2}]}));

    assert_eq!(
        data_get(&value, Some("users.*.name"), ()),
        v(json!(["a", null]))
    );
}

#[test]
fn test_data_get_wildcard_over_objects() {
    let value = v(json!({"a": {"x": 1}, "b": {"x": 2}}));

    assert_eq!(data_get(&value, Some("*.x"), ()), v(json!([1, 2])));
}

#[test]
fn test_data_get_wildcard_on_scalar_is_a_miss() {
    let value = v(json!({"a": 1}));

    assert_eq!(data_get(&value, Some("a.*"), "none"), Value::from("none"));
}

#[test]
fn test_data_set_plain_path() {
    let mut value = v(json!({"a": {"b": 1}}));

    data_set(&mut value, "a.b", Value::from(2), true);

    assert_eq!(value, v(json!({"a": {"b": 2}})));
}

#[test]
fn test_data_set_materializes_over_scalars() {
    let mut value = Value::Null;

    data_set(&mut value, "a.b", Value::from(1), true);

    assert_eq!(value, v(json!({"a": {"b": 1}})));
}

#[test]
fn test_data_set_wildcard_fan_out() {
    let mut value = v(json!({"users": [{"name": "a"}, {"name": "b"}]}));

    data_set(&mut value, "users.*.active", Value::from(true), true);

    assert_eq!(
        value,
        v(json!({"users": [
            {"name": "a", "active": true},
            {"name": "b", "active": true}
        ]}))
    );
}

#[test]
fn test_data_set_trailing_wildcard_overwrites_every_entry() {
    let mut value = v(json!({"a": 1, "b": 2}));

    data_set(&mut value, "*", Value::from(0), true);

    assert_eq!(value, v(json!({"a": 0, "b": 0})));
}

#[test]
fn test_data_set_without_overwrite_only_fills_gaps() {
    let mut value = v(json!({"a": {"b": 1}}));

    data_set(&mut value, "a.b", Value::from(9), false);
    data_set(&mut value, "a.c", Value::from(9), false);

    assert_eq!(value, v(json!({"a": {"b": 1, "c": 9}})));
}

#[test]
fn test_data_set_trailing_wildcard_without_overwrite_is_a_no_op() {
    let mut value = v(json!({"a": 1, "b": 2}));

    data_set(&mut value, "*", Value::from(0), false);

    assert_eq!(value, v(json!({"a": 1, "b": 2})));
}

#[test]
fn test_value_serializes_to_json_and_yaml() {
    let value = v(json!({"name": "app", "port": 8080.0, "tags": ["a"]}));

    let as_json: serde_json::Value = serde_json::from_str(&value.to_json().unwrap()).unwrap();
    assert_eq!(as_json, json!({"name": "app", "port": 8080.0, "tags": ["a"]}));

    let yaml = value.to_yaml().unwrap();
    assert!(yaml.contains("name: app"));
    assert!(yaml.contains("port: 8080"));
}
