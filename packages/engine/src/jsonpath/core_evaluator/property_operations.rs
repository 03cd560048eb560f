//! Property access operations for JSONPath evaluation
//!
//! Key lookup on objects, mapped key lookup over arrays, and the descendant
//! collection used by the opt-in recursive search mode.

use serde_json::Value;

use crate::jsonpath::error::{JsonPathError, JsonPathResult};

/// Property access engine for JSONPath evaluation
pub struct PropertyOperations;

impl PropertyOperations {
    /// Select the child named `name`
    ///
    /// On an object this is a plain lookup. On an array the lookup is mapped over
    /// every element and elements where it fails are dropped, so the result is
    /// always an array (possibly empty). Any other shape is rejected.
    pub fn get_key(value: &Value, name: &str) -> JsonPathResult<Value> {
        match value {
            Value::Object(map) => map
                .get(name)
                .cloned()
                .ok_or_else(|| JsonPathError::key_not_found(name)),
            Value::Array(items) => Ok(Value::Array(
                items
                    .iter()
                    .filter_map(|item| Self::get_key(item, name).ok())
                    .collect(),
            )),
            other => Err(JsonPathError::not_an_object("object", type_name(other))),
        }
    }

    /// Collect `value` and all of its descendants in pre-order
    pub fn collect_descendants(value: &Value) -> Vec<Value> {
        let mut results = Vec::new();
        Self::collect_descendants_impl(value, &mut results);
        results
    }

    fn collect_descendants_impl(value: &Value, results: &mut Vec<Value>) {
        results.push(value.clone());
        match value {
            Value::Object(map) => {
                for child in map.values() {
                    Self::collect_descendants_impl(child, results);
                }
            }
            Value::Array(items) => {
                for child in items {
                    Self::collect_descendants_impl(child, results);
                }
            }
            _ => {}
        }
    }
}

/// Select the child named `name`; see [`PropertyOperations::get_key`]
#[inline]
pub fn get_key(value: &Value, name: &str) -> JsonPathResult<Value> {
    PropertyOperations::get_key(value, name)
}

/// Get the JSON type name for a value
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
