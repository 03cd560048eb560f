//! Fluent query builder
//!
//! [`PathQuery`] collects a path, a lookup configuration and an optional trace
//! sink, then runs against any number of documents.

pub mod core;
pub mod methods;

pub use self::core::PathQuery;
