//! JSON Path Error Types
//!
//! Core error taxonomy for path compilation, traversal and mutation.

use crate::config::ConfigurationError;

/// Fieldless classification of [`JsonPathError`] for cheap branching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed path text, rejected at compile time
    Syntax,
    /// Well-formed path whose key is absent from the document
    NotExist,
    /// Key lookup attempted on a null value
    NullTraversal,
    /// Operation applied to a value of the wrong type
    TypeMismatch,
    /// Index or slice bound outside the container
    Range,
    /// Filter or script evaluation failure
    Eval,
    /// Invalid configuration
    Config,
}

/// Main JSON Path error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JsonPathError {
    /// The path expression could not be compiled
    #[error("invalid path '{path}': {reason}{}", format_position(.position))]
    Syntax {
        /// Path text as supplied by the caller
        path: String,
        /// What was wrong with it
        reason: String,
        /// Byte offset of the offending segment, when known
        position: Option<usize>,
    },

    /// A traversed key is absent
    #[error("key error: \"{key}\" not found in object")]
    NotExist {
        /// The missing key
        key: String,
    },

    /// A key was looked up on `null`
    #[error("get attribute \"{key}\" from null object")]
    NullTraversal {
        /// The key that was requested
        key: String,
    },

    /// A step met a value of the wrong shape
    #[error("{context}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Accepted value kinds
        expected: &'static str,
        /// Kind actually encountered
        found: &'static str,
        /// Operation that was attempted
        context: String,
    },

    /// Index or slice bound out of range
    #[error("index out of range: len: {len}, idx: {index}")]
    Range {
        /// Bound as written in the path
        index: i64,
        /// Length of the container
        len: usize,
    },

    /// Filter clause or script expression could not be evaluated
    #[error("evaluation error: {reason}")]
    Eval {
        /// Description of the failure
        reason: String,
    },

    /// Rejected configuration
    #[error(transparent)]
    Config(#[from] ConfigurationError),
}

/// Result type for JSON Path operations
pub type JsonPathResult<T> = Result<T, JsonPathError>;

fn format_position(position: &Option<usize>) -> String {
    match position {
        Some(pos) => format!(" (at position {pos})"),
        None => String::new(),
    }
}

impl JsonPathError {
    /// Classify this error
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax { .. } => ErrorKind::Syntax,
            Self::NotExist { .. } => ErrorKind::NotExist,
            Self::NullTraversal { .. } => ErrorKind::NullTraversal,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::Range { .. } => ErrorKind::Range,
            Self::Eval { .. } => ErrorKind::Eval,
            Self::Config(_) => ErrorKind::Config,
        }
    }

    /// True when the path was well formed but addressed an absent key
    #[inline]
    #[must_use]
    pub fn is_not_exist(&self) -> bool {
        matches!(self, Self::NotExist { .. })
    }

    /// The missing key carried by a [`JsonPathError::NotExist`]
    #[must_use]
    pub fn missing_key(&self) -> Option<&str> {
        match self {
            Self::NotExist { key } => Some(key),
            _ => None,
        }
    }
}
