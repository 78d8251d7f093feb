use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The mapping used for object values. Keys are always strings; numeric
/// path segments address `Array` values by index instead.
pub type Map = BTreeMap<String, Value>;

/// A schema-less nested value: a scalar, an ordered sequence, or a
/// string-keyed mapping, to arbitrary depth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Number(f64),
    Bool(bool),
    Null,
    Array(Vec<Value>),
    Object(Map),
}

impl Value {
    /// Creates an empty object value.
    pub fn object() -> Value {
        Value::Object(Map::new())
    }

    /// Creates an empty array value.
    pub fn array() -> Value {
        Value::Array(Vec::new())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Whether this value can be traversed into: an object or an array.
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }

    /// Whether this value is a container with no entries. Scalars are
    /// never "empty" in this sense; `dot` relies on that distinction to
    /// keep empty containers as leaves.
    pub fn is_empty_container(&self) -> bool {
        match self {
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Serializes the value into a pretty-printed JSON string.
    ///
    /// # Errors
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the value into a YAML string.
    ///
    /// # Errors
    /// Returns a `serde_yaml::Error` if serialization fails.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Number(n) => serde_json::Number::from_f64(n)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, serde_json::Value::from(value)))
                    .collect(),
            ),
        }
    }
}

/// A default that is either a plain value or a deferred producer. The
/// producer is invoked at most once, and only when the lookup actually
/// misses, so expensive defaults cost nothing on the hit path.
pub enum DefaultValue<'a> {
    Plain(Value),
    Producer(Box<dyn FnOnce() -> Value + 'a>),
}

impl<'a> DefaultValue<'a> {
    /// Wraps a deferred computation that is only run on a miss.
    pub fn lazy<F>(producer: F) -> Self
    where
        F: FnOnce() -> Value + 'a,
    {
        DefaultValue::Producer(Box::new(producer))
    }

    /// Materializes the default, running the producer if there is one.
    pub fn resolve(self) -> Value {
        match self {
            DefaultValue::Plain(value) => value,
            DefaultValue::Producer(producer) => producer(),
        }
    }
}

impl From<Value> for DefaultValue<'_> {
    fn from(value: Value) -> Self {
        DefaultValue::Plain(value)
    }
}

impl From<&str> for DefaultValue<'_> {
    fn from(value: &str) -> Self {
        DefaultValue::Plain(Value::from(value))
    }
}

impl From<String> for DefaultValue<'_> {
    fn from(value: String) -> Self {
        DefaultValue::Plain(Value::from(value))
    }
}

impl From<bool> for DefaultValue<'_> {
    fn from(value: bool) -> Self {
        DefaultValue::Plain(Value::from(value))
    }
}

impl From<f64> for DefaultValue<'_> {
    fn from(value: f64) -> Self {
        DefaultValue::Plain(Value::from(value))
    }
}

impl From<i32> for DefaultValue<'_> {
    fn from(value: i32) -> Self {
        DefaultValue::Plain(Value::from(value))
    }
}

impl From<i64> for DefaultValue<'_> {
    fn from(value: i64) -> Self {
        DefaultValue::Plain(Value::from(value))
    }
}

impl From<()> for DefaultValue<'_> {
    fn from(_: ()) -> Self {
        DefaultValue::Plain(Value::Null)
    }
}
