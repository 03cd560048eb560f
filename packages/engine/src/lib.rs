//! # pathq engine
//!
//! Path-query engine for JSONPath-style expressions over in-memory
//! `serde_json::Value` documents.
//!
//! ## Features
//!
//! - **Dotted keys, index lists, inclusive ranges and filters** (`$.a.b[0,1]`, `$.a[1:3]`, `$.a[?(@.v > 2)]`)
//! - **Isolation**: the document is deep-copied once per lookup and never mutated
//! - **Structured errors** callers can branch on by [`ErrorKind`]
//! - **Injectable tracing** through the [`TraceSink`] trait
//!
//! ## Usage
//!
//! ```rust
//! use serde_json::json;
//!
//! let doc = json!({"store": {"book": [{"price": 10}, {"price": 20}]}});
//! let prices = pathq_engine::lookup(&doc, "$.store.book[0,1].price").unwrap();
//! assert_eq!(prices, json!([10, 20]));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod jsonpath;
pub mod telemetry;

use serde_json::Value;

pub use config::{ConfigResult, ConfigurationError, DescentMode, FilterRoot, LookupConfig, Validator};
pub use jsonpath::{ErrorKind, JsonPath, JsonPathError, JsonPathResult, PathEvaluator, Step};
pub use telemetry::{LookupStats, NoopSink, TraceEvent, TraceSink, TracingSink};

/// Evaluate `path` against `document` with the default configuration
///
/// # Errors
/// Returns the first error raised while tokenizing, classifying or applying a
/// step. Errors raised by a step carry that step's token.
pub fn lookup(document: &Value, path: &str) -> JsonPathResult<Value> {
    lookup_with(document, path, &LookupConfig::default(), &NoopSink)
}

/// Evaluate `path` against `document` with an explicit configuration and trace sink
///
/// # Errors
/// See [`lookup`].
pub fn lookup_with(
    document: &Value,
    path: &str,
    config: &LookupConfig,
    sink: &dyn TraceSink,
) -> JsonPathResult<Value> {
    PathEvaluator::new(config, sink).lookup(document, path)
}
