//! Path compilation configuration
//!
//! - `types`: the [`PathConfig`] struct and its builder methods
//! - `defaults`: default limits
//! - `validation`: the [`Validator`] trait and [`ConfigurationError`]

pub mod defaults;
pub mod types;
pub mod validation;

pub use types::PathConfig;
pub use validation::{ConfigResult, ConfigValidator, ConfigurationError, Validator};
