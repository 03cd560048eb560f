//! JSONPath error handling module
//!
//! Error kinds, the error struct callers branch on, and the named
//! constructors used throughout the engine.

mod constructors;
mod types;

pub use types::{ErrorKind, JsonPathError, JsonPathResult};
