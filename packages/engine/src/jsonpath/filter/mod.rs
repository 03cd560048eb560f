//! `JSONPath` Filter Predicate Evaluation
//!
//! Handles evaluation of filter predicates including:
//! - Operand resolution (`@.` relative to the element, `$.` relative to the document)
//! - Presence tests (`[?(@.isbn)]`)
//! - Comparisons (`==`, `<`, `<=`, `>=`, `>`), numeric when both sides are numbers

mod comparisons;
mod core;
mod property;

pub use comparisons::compare_values;
pub use core::{FilterEvaluator, get_filtered};
pub use property::{OperandValue, PropertyResolver};
