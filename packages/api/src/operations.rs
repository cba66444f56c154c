//! One-shot entry points taking path text

use jpath_core::{JsonPathResult, PathConfig, Program};
use serde_json::Value;

/// Compile `path` into a reusable [`Program`]
///
/// # Errors
///
/// Returns `JsonPathError::Syntax` for malformed paths.
#[inline]
pub fn compile(path: &str) -> JsonPathResult<Program> {
    Program::compile(path)
}

/// Compile `path` under explicit limits
///
/// # Errors
///
/// Returns `JsonPathError::Config` for an invalid configuration and
/// `JsonPathError::Syntax` for malformed paths.
#[inline]
pub fn compile_with(path: &str, config: &PathConfig) -> JsonPathResult<Program> {
    Program::compile_with(path, config)
}

/// Compile `path` and evaluate it against `root`
///
/// # Errors
///
/// Returns the compile error, or the first step failure.
pub fn lookup(root: &Value, path: &str) -> JsonPathResult<Value> {
    compile(path)?.lookup(root)
}

/// Compile `path` and write `value` at that location
///
/// # Errors
///
/// Returns the compile error, or the reason the write was rejected.
pub fn set(root: &mut Value, path: &str, value: impl Into<Value>) -> JsonPathResult<()> {
    compile(path)?.set(root, value.into())
}

/// Compile `path` and remove what it addresses
///
/// # Errors
///
/// Returns the compile error, or the reason the delete was rejected.
pub fn delete(root: &mut Value, path: &str) -> JsonPathResult<()> {
    compile(path)?.delete(root)
}

/// Compile `path` and append `value` to the container it addresses
///
/// # Errors
///
/// Returns the compile error, or the reason the append was rejected.
pub fn append(root: &mut Value, path: &str, value: impl Into<Value>) -> JsonPathResult<()> {
    compile(path)?.append(root, value.into())
}
