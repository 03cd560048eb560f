//! JSON Path Error Types
//!
//! Core error types for path tokenization, step classification and evaluation.

use std::fmt;

/// JSON Path processing error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Path does not start with `$` or `@`
    InvalidAnchor,
    /// Bracket contents are empty or otherwise unrecognized
    MalformedBracket,
    /// Range bracket does not have exactly one `:`
    MalformedRange,
    /// Filter bracket is not of the form `?( ... )`
    MalformedFilter,
    /// Non-integer text where an integer index was required
    InvalidIndex,
    /// Object lacks the requested key
    KeyNotFound,
    /// Key lookup or positional access on an incompatible shape
    NotAnObject,
    /// Filter applied to something that is neither array nor object
    NotFilterable,
    /// Index or range bound outside the array
    IndexOutOfRange,
    /// Index step with no indices
    EmptyIndexSet,
    /// Comparison operator outside `<`, `<=`, `==`, `>=`, `>`
    InvalidOperator,
    /// Recognized but unimplemented feature
    Unsupported,
}

impl ErrorKind {
    /// Whether this kind describes malformed path text rather than a data mismatch.
    ///
    /// Syntax errors are never swallowed, not even by the `exists` operator.
    #[must_use]
    pub fn is_syntax(self) -> bool {
        matches!(
            self,
            ErrorKind::InvalidAnchor
                | ErrorKind::MalformedBracket
                | ErrorKind::MalformedRange
                | ErrorKind::MalformedFilter
                | ErrorKind::InvalidIndex
                | ErrorKind::EmptyIndexSet
                | ErrorKind::InvalidOperator
                | ErrorKind::Unsupported
        )
    }

    /// Stable lowercase name, used in logs and trace events
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidAnchor => "invalid_anchor",
            ErrorKind::MalformedBracket => "malformed_bracket",
            ErrorKind::MalformedRange => "malformed_range",
            ErrorKind::MalformedFilter => "malformed_filter",
            ErrorKind::InvalidIndex => "invalid_index",
            ErrorKind::KeyNotFound => "key_not_found",
            ErrorKind::NotAnObject => "not_an_object",
            ErrorKind::NotFilterable => "not_filterable",
            ErrorKind::IndexOutOfRange => "index_out_of_range",
            ErrorKind::EmptyIndexSet => "empty_index_set",
            ErrorKind::InvalidOperator => "invalid_operator",
            ErrorKind::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main JSON Path error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("JSON Path Error: {message}{}", StepSuffix(.step.as_deref()))]
pub struct JsonPathError {
    pub kind: ErrorKind,
    pub message: String,
    /// Path token that was being applied when the error was raised
    pub step: Option<String>,
}

struct StepSuffix<'a>(Option<&'a str>);

impl fmt::Display for StepSuffix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(step) => write!(f, " (at step '{step}')"),
            None => Ok(()),
        }
    }
}

/// Result type for JSON Path operations
pub type JsonPathResult<T> = Result<T, JsonPathError>;

impl JsonPathError {
    #[must_use]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            step: None,
        }
    }

    /// Annotate the error with the step that failed.
    ///
    /// The innermost annotation wins, so a nested evaluation that already
    /// tagged its own step keeps that tag.
    #[must_use]
    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        if self.step.is_none() {
            self.step = Some(step.into());
        }
        self
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[must_use]
    pub fn step(&self) -> Option<&str> {
        self.step.as_deref()
    }
}
