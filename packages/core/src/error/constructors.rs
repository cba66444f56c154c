//! Error constructor functions
//!
//! Factory helpers so message formatting lives in one place.

use super::types::JsonPathError;

impl JsonPathError {
    /// Creates a syntax error for a path expression
    ///
    /// # Examples
    /// ```
    /// use jpath_core::error::{ErrorKind, JsonPathError};
    ///
    /// let error = JsonPathError::syntax("$.users[", "unterminated bracket", Some(7));
    /// assert_eq!(error.kind(), ErrorKind::Syntax);
    /// ```
    pub fn syntax(
        path: impl Into<String>,
        reason: impl Into<String>,
        position: Option<usize>,
    ) -> Self {
        Self::Syntax {
            path: path.into(),
            reason: reason.into(),
            position,
        }
    }

    /// Creates an error for an absent key
    pub fn not_exist(key: impl Into<String>) -> Self {
        Self::NotExist { key: key.into() }
    }

    /// Creates an error for a key lookup on `null`
    pub fn null_traversal(key: impl Into<String>) -> Self {
        Self::NullTraversal { key: key.into() }
    }

    /// Creates a type mismatch error
    pub fn type_mismatch(
        expected: &'static str,
        found: &'static str,
        context: impl Into<String>,
    ) -> Self {
        Self::TypeMismatch {
            expected,
            found,
            context: context.into(),
        }
    }

    /// Creates an out-of-range error
    #[must_use]
    pub fn range(index: i64, len: usize) -> Self {
        Self::Range { index, len }
    }

    /// Creates an evaluation error
    pub fn eval(reason: impl Into<String>) -> Self {
        Self::Eval {
            reason: reason.into(),
        }
    }
}

/// Shorthand used by the tokenizer and step compiler
#[inline]
pub fn invalid_expression_error(
    path: &str,
    reason: impl Into<String>,
    position: Option<usize>,
) -> JsonPathError {
    JsonPathError::syntax(path, reason, position)
}
