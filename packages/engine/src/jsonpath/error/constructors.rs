//! Core error constructor functions
//!
//! Named factory methods, one per error kind, so call sites read as the
//! failure they report.

use super::types::{ErrorKind, JsonPathError};

impl JsonPathError {
    /// Creates an invalid anchor error
    ///
    /// # Examples
    /// ```
    /// use pathq_engine::jsonpath::error::{ErrorKind, JsonPathError};
    ///
    /// let error = JsonPathError::invalid_anchor("store.book");
    /// assert_eq!(error.kind, ErrorKind::InvalidAnchor);
    /// ```
    pub fn invalid_anchor(path: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::InvalidAnchor,
            format!("path '{}' should start with '$' or '@'", path.into()),
        )
    }

    pub fn malformed_bracket(token: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::MalformedBracket,
            format!("bracket in '{}' must contain at least one character", token.into()),
        )
    }

    pub fn malformed_range(tail: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::MalformedRange,
            format!("only one range (from:to) is supported, got '{}'", tail.into()),
        )
    }

    pub fn malformed_filter(tail: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::MalformedFilter,
            format!("filter must have the form ?( predicate ), got '{}'", tail.into()),
        )
    }

    pub fn invalid_index(text: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::InvalidIndex,
            format!("'{}' is not an integer index", text.into()),
        )
    }

    pub fn key_not_found(key: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::KeyNotFound,
            format!("key error: {} not found in object", key.into()),
        )
    }

    pub fn not_an_object(expected: &str, found: &str) -> Self {
        Self::new(
            ErrorKind::NotAnObject,
            format!("expected {expected}, found {found}"),
        )
    }

    pub fn not_filterable(found: &str) -> Self {
        Self::new(
            ErrorKind::NotFilterable,
            format!("cannot filter a value of type {found}"),
        )
    }

    /// Creates an out of range error for an index or a range bound
    ///
    /// # Arguments
    /// * `what` - Which bound overflowed (`index`, `from` or `to`)
    /// * `len` - Length of the array being accessed
    /// * `value` - Bound as written in the path
    pub fn index_out_of_range(what: &str, len: usize, value: i64) -> Self {
        Self::new(
            ErrorKind::IndexOutOfRange,
            format!("{what} out of range: len: {len}, {what}: {value}"),
        )
    }

    #[must_use]
    pub fn empty_index_set() -> Self {
        Self::new(ErrorKind::EmptyIndexSet, "cannot index on empty index set")
    }

    pub fn invalid_operator(op: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::InvalidOperator,
            format!(
                "operator '{}' is not supported, expected one of <, <=, ==, >=, >",
                op.into()
            ),
        )
    }

    /// Creates an unsupported feature error
    ///
    /// # Examples
    /// ```
    /// use pathq_engine::jsonpath::error::{ErrorKind, JsonPathError};
    ///
    /// let error = JsonPathError::unsupported("regex match (=~)");
    /// assert_eq!(error.kind, ErrorKind::Unsupported);
    /// ```
    pub fn unsupported(feature: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::Unsupported,
            format!("{} is not supported", feature.into()),
        )
    }
}
