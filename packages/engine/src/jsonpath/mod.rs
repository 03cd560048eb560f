//! Path-query engine over `serde_json::Value` trees
//!
//! Evaluates compact JSONPath-style expressions such as `$.store.book[0,1].price`
//! or `$.items[?(@.v > 2)]` against a document the caller already holds.
//!
//! # Pipeline
//!
//! - [`tokenizer`] splits the path into step tokens
//! - [`selector_parser`] classifies each token into a [`Step`]
//! - [`core_evaluator`] applies the steps with the key, index and range accessors
//! - [`filter_parser`] and [`filter`] implement the predicate sub-language
//!
//! # Examples
//!
//! ```rust
//! use pathq_engine::jsonpath::{JsonPath, ErrorKind};
//! use serde_json::json;
//!
//! let doc = json!({"items": [{"v": 1}, {"v": 5}]});
//! let path = JsonPath::compile("$.items[?(@.v > 2)]").unwrap();
//! assert_eq!(path.evaluate(&doc).unwrap(), json!([{"v": 5}]));
//!
//! let err = JsonPath::compile("items").unwrap_err();
//! assert_eq!(err.kind, ErrorKind::InvalidAnchor);
//! ```

pub mod ast;
pub mod compiler;
pub mod core_evaluator;
pub mod error;
pub mod filter;
pub mod filter_parser;
pub mod selector_parser;
pub mod tokenizer;

pub use self::{
    ast::{ComparisonOp, FilterOperator, Operand, Predicate, Step},
    compiler::JsonPath,
    core_evaluator::{PathEvaluator, get_index, get_key, get_range},
    error::{ErrorKind, JsonPathError, JsonPathResult},
    filter::{FilterEvaluator, get_filtered},
    filter_parser::parse_predicate,
    selector_parser::classify,
    tokenizer::tokenize,
};
