//! JSONPath step classification
//!
//! Turns one path token into a typed [`Step`](crate::jsonpath::ast::Step):
//! plain keys, the scan marker, and the bracketed index, range and filter forms.

pub mod bracket;
pub mod core;
pub mod slice;

pub use core::{StepClassifier, classify};
