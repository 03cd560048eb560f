//! Array operations for JSONPath evaluation
//!
//! This module handles positional indexing and inclusive range slicing.

use serde_json::Value;

use super::property_operations::type_name;
use crate::jsonpath::error::{JsonPathError, JsonPathResult};

/// Array operations engine for JSONPath evaluation
pub struct ArrayOperations;

impl ArrayOperations {
    /// Select the element at `index`; negative indices count from the end
    pub fn get_index(value: &Value, index: i64) -> JsonPathResult<Value> {
        let arr = Self::as_array(value)?;
        let len = arr.len() as i64;

        let actual = if index < 0 { len + index } else { index };
        if actual < 0 || actual >= len {
            return Err(JsonPathError::index_out_of_range("index", arr.len(), index));
        }

        Ok(arr[actual as usize].clone())
    }

    /// Select the sub-sequence between `from` and `to`, both inclusive as written
    ///
    /// A missing `from` starts at the first element and a missing `to` runs to
    /// the last. Negative bounds count from the end, so `to = -1` is the last
    /// element.
    pub fn get_range(value: &Value, from: Option<i64>, to: Option<i64>) -> JsonPathResult<Value> {
        let arr = Self::as_array(value)?;
        let len = arr.len() as i64;

        let start = match from {
            None => 0,
            Some(f) if f < 0 => len + f,
            Some(f) => f,
        };
        // exclusive internally
        let end = match to {
            None => Some(len),
            Some(t) if t < 0 => Some(len + t + 1),
            Some(t) => t.checked_add(1),
        };
        let Some(end) = end else {
            return Err(JsonPathError::index_out_of_range("to", arr.len(), to.unwrap_or(i64::MAX)));
        };

        if start < 0 || start >= len {
            return Err(JsonPathError::index_out_of_range(
                "from",
                arr.len(),
                from.unwrap_or(start),
            ));
        }
        if end < 0 || end > len {
            return Err(JsonPathError::index_out_of_range(
                "to",
                arr.len(),
                to.unwrap_or(end),
            ));
        }

        tracing::trace!(
            target: "pathq::jsonpath::range",
            start = start,
            end = end,
            "get_range"
        );

        if end <= start {
            return Ok(Value::Array(Vec::new()));
        }
        Ok(Value::Array(arr[start as usize..end as usize].to_vec()))
    }

    fn as_array(value: &Value) -> JsonPathResult<&[Value]> {
        match value {
            Value::Array(arr) => Ok(arr.as_slice()),
            other => Err(JsonPathError::not_an_object("array", type_name(other))),
        }
    }
}

/// Select one element; see [`ArrayOperations::get_index`]
#[inline]
pub fn get_index(value: &Value, index: i64) -> JsonPathResult<Value> {
    ArrayOperations::get_index(value, index)
}

/// Select an inclusive sub-sequence; see [`ArrayOperations::get_range`]
#[inline]
pub fn get_range(value: &Value, from: Option<i64>, to: Option<i64>) -> JsonPathResult<Value> {
    ArrayOperations::get_range(value, from, to)
}
