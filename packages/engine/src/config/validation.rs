//! Configuration validation

use super::types::LookupConfig;

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid limit: {0}")]
    InvalidLimit(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidLimit` if a limit is zero.
    fn validate(&self) -> ConfigResult<()>;
}

impl Validator for LookupConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_path_length == 0 {
            return Err(ConfigurationError::InvalidLimit(
                "max_path_length cannot be zero".to_string(),
            ));
        }
        if self.max_indices == 0 {
            return Err(ConfigurationError::InvalidLimit(
                "max_indices cannot be zero".to_string(),
            ));
        }
        Ok(())
    }
}
