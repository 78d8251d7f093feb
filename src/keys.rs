//! Top-level key renaming for object values, one helper per naming
//! convention. Non-object inputs pass through unchanged.

use crate::case;
use crate::value::Value;

/// Rewrites an object's top-level keys to `snake_case`.
pub fn key_snake(target: &Value) -> Value {
    transform_keys(target, case::snake)
}

/// Rewrites an object's top-level keys from `snake_case` or `kebab-case`
/// to `camelCase`.
pub fn key_camel(target: &Value) -> Value {
    transform_keys(target, case::camel)
}

/// Rewrites an object's top-level keys from `snake_case` to `camelCase`.
pub fn key_snake_to_camel(target: &Value) -> Value {
    transform_keys(target, case::snake_to_camel)
}

/// Rewrites an object's top-level keys from `kebab-case` to `camelCase`.
pub fn key_kebab_to_camel(target: &Value) -> Value {
    transform_keys(target, case::kebab_to_camel)
}

fn transform_keys<F>(target: &Value, convert: F) -> Value
where
    F: Fn(&str) -> String,
{
    match target {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (convert(key), value.clone()))
                .collect(),
        ),
        other => other.clone(),
    }
}
