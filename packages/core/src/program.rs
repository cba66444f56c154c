//! Compiled programs
//!
//! A [`Program`] is immutable once built; the same instance can serve any
//! number of lookups against any number of documents.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::{
    ast::Step,
    compiler::JsonPathCompiler,
    config::PathConfig,
    core_evaluator::{Selection, Traversal},
    error::{JsonPathError, JsonPathResult},
    mutation,
};

/// Compiled, reusable path expression
#[derive(Debug, Clone)]
pub struct Program {
    steps: Vec<Step>,
    path: String,
}

impl Program {
    #[inline]
    pub(crate) fn new(path: String, steps: Vec<Step>) -> Self {
        Self { steps, path }
    }

    /// Compile with the default configuration
    ///
    /// # Examples
    /// ```
    /// use jpath_core::Program;
    /// use serde_json::json;
    ///
    /// let program = Program::compile("$.a.b[-1]").unwrap();
    /// assert_eq!(program.lookup(&json!({"a": {"b": [1, 2, 3]}})).unwrap(), json!(3));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `JsonPathError::Syntax` for malformed paths.
    #[inline]
    pub fn compile(path: &str) -> JsonPathResult<Self> {
        JsonPathCompiler::compile(path)
    }

    /// Compile under explicit limits
    ///
    /// # Errors
    ///
    /// Returns `JsonPathError::Config` or `JsonPathError::Syntax`.
    #[inline]
    pub fn compile_with(path: &str, config: &PathConfig) -> JsonPathResult<Self> {
        JsonPathCompiler::compile_with(path, config)
    }

    /// Evaluate against `root` and return an owned copy of the result
    ///
    /// Multi-valued steps produce a JSON array.
    ///
    /// # Errors
    ///
    /// Returns the first step failure; partial results are never returned.
    pub fn lookup(&self, root: &Value) -> JsonPathResult<Value> {
        self.select(root)?
            .materialize(root)
            .inspect_err(|err| self.log_failure("lookup", err))
    }

    /// Evaluate against `root` and return node handles instead of values
    ///
    /// # Errors
    ///
    /// Same as [`Program::lookup`].
    pub fn select(&self, root: &Value) -> JsonPathResult<Selection> {
        Traversal::new(root)
            .run(&self.steps)
            .inspect_err(|err| self.log_failure("select", err))
    }

    /// Write `value` at the location this program addresses
    ///
    /// # Errors
    ///
    /// Returns traversal errors, or `TypeMismatch`/`Eval` when the final
    /// step cannot be written through.
    pub fn set(&self, root: &mut Value, value: Value) -> JsonPathResult<()> {
        mutation::set(root, &self.steps, value)
    }

    /// Remove the key or indices this program addresses
    ///
    /// # Errors
    ///
    /// Returns traversal errors, or `Eval` for steps that cannot delete.
    pub fn delete(&self, root: &mut Value) -> JsonPathResult<()> {
        mutation::delete(root, &self.steps)
    }

    /// Append `value` to the array, or insert it into the object, this program addresses
    ///
    /// # Errors
    ///
    /// Returns traversal errors, or `TypeMismatch`/`Eval` when the target
    /// cannot take a new element.
    pub fn append(&self, root: &mut Value, value: Value) -> JsonPathResult<()> {
        mutation::append(root, &self.steps, value)
    }

    /// Path text this program was compiled from
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Compiled steps, root marker excluded
    #[inline]
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    fn log_failure(&self, operation: &'static str, err: &JsonPathError) {
        tracing::debug!(
            target: "jpath::evaluator",
            path = %self.path,
            operation,
            error = %err,
            "evaluation failed"
        );
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Compiled lookup: {}", self.path)
    }
}

impl FromStr for Program {
    type Err = JsonPathError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        Self::compile(path)
    }
}

impl TryFrom<&str> for Program {
    type Error = JsonPathError;

    fn try_from(path: &str) -> Result<Self, Self::Error> {
        Self::compile(path)
    }
}
