//! JSONPath path tokenizer
//!
//! Splits a raw path string into its ordered step tokens. Performs no semantic
//! interpretation; classifying each token is the job of the selector parser.

mod core;

pub use core::{PathTokenizer, SCAN_MARKER, tokenize};
