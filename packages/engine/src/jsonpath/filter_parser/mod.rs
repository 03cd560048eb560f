//! Filter predicate parsing
//!
//! Splits predicate text into left operand, operator and right operand.

mod core;

pub use core::parse_predicate;
