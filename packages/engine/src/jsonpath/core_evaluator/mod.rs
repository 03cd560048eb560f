//! Core `JSONPath` evaluator module
//!
//! Value accessors (key lookup, positional index, inclusive range) and the
//! path evaluator that folds a document through a sequence of steps.

pub mod array_operations;
pub mod engine;
pub mod property_operations;

pub use array_operations::{ArrayOperations, get_index, get_range};
pub use engine::PathEvaluator;
pub use property_operations::{PropertyOperations, get_key};
