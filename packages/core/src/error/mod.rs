//! JSONPath error handling module
//!
//! Error taxonomy shared by the compiler, evaluator and mutation engine.
//! Absent keys ([`ErrorKind::NotExist`]) are kept distinct from malformed
//! paths and type errors so callers can branch on the difference.

mod constructors;
mod types;

pub use constructors::invalid_expression_error;
pub use types::{ErrorKind, JsonPathError, JsonPathResult};
