//! Lookup configuration
//!
//! Evaluation options with defaults that preserve the engine's documented
//! behavior, fluent builders, and validation.

mod builders;
mod types;
mod validation;

pub use types::{DescentMode, FilterRoot, LookupConfig};
pub use validation::{ConfigResult, ConfigurationError, Validator};
