//! Facade error type

use pathq_engine::{ConfigurationError, JsonPathError};

/// Result type for facade operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised by the facade
///
/// Wraps engine errors unchanged so callers can still branch on
/// [`JsonPathError::kind`].
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    Path(#[from] JsonPathError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigurationError),

    #[error("Failed to deserialize lookup result: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl QueryError {
    /// The engine error, when the failure came from the lookup itself
    #[must_use]
    pub fn as_path_error(&self) -> Option<&JsonPathError> {
        match self {
            QueryError::Path(e) => Some(e),
            _ => None,
        }
    }
}
