//! Configuration validation
//!
//! Validation trait and error type for [`PathConfig`](super::PathConfig).

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns a `ConfigurationError` variant if any validation fails:
    /// - `InvalidParameter` - if a limit is zero
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub struct ConfigValidator;

impl ConfigValidator {
    /// Reject a zero limit
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` when `value` is zero.
    pub fn validate_non_zero(value: usize, name: &str) -> ConfigResult<()> {
        if value == 0 {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} cannot be zero"
            )));
        }
        Ok(())
    }
}
