//! pathq public API
//!
//! JSONPath-style lookups over parsed `serde_json::Value` documents, with a
//! fluent [`PathQuery`] builder and typed extraction through serde.
//!
//! ```rust
//! use serde_json::json;
//!
//! let doc = json!({"items": [{"v": 1}, {"v": 5}]});
//! let hits = pathq::lookup(&doc, "$.items[?(@.v > 2)]").unwrap();
//! assert_eq!(hits, json!([{"v": 5}]));
//!
//! let prices: Vec<u32> = pathq::PathQuery::new("$.items[0,1].v")
//!     .lookup_as(&doc)
//!     .unwrap();
//! assert_eq!(prices, vec![1, 5]);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;
pub mod error;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use builder::PathQuery;
pub use error::{QueryError, QueryResult};

// Re-export the engine surface
pub use pathq_engine::{
    ConfigurationError, DescentMode, ErrorKind, FilterRoot, JsonPath, JsonPathError, JsonPathResult,
    LookupConfig, LookupStats, NoopSink, Step, TraceEvent, TraceSink, TracingSink, Validator,
};

/// Evaluate `path` against `document` with the default configuration
///
/// # Errors
/// Returns the engine error for the first step that fails.
pub fn lookup(document: &Value, path: &str) -> JsonPathResult<Value> {
    pathq_engine::lookup(document, path)
}

/// Evaluate `path` with an explicit configuration and trace sink
///
/// # Errors
/// Returns the engine error for the first step that fails.
pub fn lookup_with(
    document: &Value,
    path: &str,
    config: &LookupConfig,
    sink: &dyn TraceSink,
) -> JsonPathResult<Value> {
    pathq_engine::lookup_with(document, path, config, sink)
}

/// Evaluate `path` and deserialize the result into `T`
///
/// # Errors
/// Returns [`QueryError::Path`] when the lookup fails and
/// [`QueryError::Deserialize`] when the result does not fit `T`.
pub fn lookup_as<T: DeserializeOwned>(document: &Value, path: &str) -> QueryResult<T> {
    let value = lookup(document, path)?;
    Ok(serde_json::from_value(value)?)
}
