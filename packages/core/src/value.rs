//! Typed accessors over `serde_json::Value`
//!
//! Type mismatches name the expected and found kinds through
//! [`ValueExt::kind`] so they read the same from every component.

use serde_json::{Map, Value};

use crate::error::{JsonPathError, JsonPathResult};

/// Key or index produced by a scripted step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptTarget {
    /// Member name
    Key(String),
    /// Array position, possibly negative
    Index(i64),
}

/// Extension methods used across the evaluator and mutation engine
pub trait ValueExt {
    /// Short kind name used in error messages
    fn kind(&self) -> &'static str;

    /// Borrow as an array or report a type mismatch
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` when the value is not an array.
    fn expect_array(&self, context: &str) -> JsonPathResult<&Vec<Value>>;

    /// Mutably borrow as an array or report a type mismatch
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` when the value is not an array.
    fn expect_array_mut(&mut self, context: &str) -> JsonPathResult<&mut Vec<Value>>;

    /// Mutably borrow as an object or report a type mismatch
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` when the value is not an object.
    fn expect_object_mut(&mut self, context: &str) -> JsonPathResult<&mut Map<String, Value>>;

    /// Numeric reading for comparisons: numbers, and strings that parse as finite floats
    ///
    /// Strings are parsed as written; surrounding whitespace makes them non-numeric.
    fn as_comparable_number(&self) -> Option<f64>;

    /// String reading for comparisons; strings are taken raw, everything else is serialized
    fn as_comparable_string(&self) -> String;

    /// Interpret a resolved script value as a key or index
    ///
    /// # Errors
    ///
    /// Returns `Eval` for values that are neither strings nor integers.
    fn as_script_target(&self) -> JsonPathResult<ScriptTarget>;
}

impl ValueExt for Value {
    fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    fn expect_array(&self, context: &str) -> JsonPathResult<&Vec<Value>> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(JsonPathError::type_mismatch("array", other.kind(), context)),
        }
    }

    fn expect_array_mut(&mut self, context: &str) -> JsonPathResult<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(JsonPathError::type_mismatch("array", other.kind(), context)),
        }
    }

    fn expect_object_mut(&mut self, context: &str) -> JsonPathResult<&mut Map<String, Value>> {
        match self {
            Value::Object(map) => Ok(map),
            other => Err(JsonPathError::type_mismatch("object", other.kind(), context)),
        }
    }

    fn as_comparable_number(&self) -> Option<f64> {
        let number = match self {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.parse::<f64>().ok(),
            _ => None,
        }?;
        number.is_finite().then_some(number)
    }

    fn as_comparable_string(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    fn as_script_target(&self) -> JsonPathResult<ScriptTarget> {
        match self {
            Value::String(key) => Ok(ScriptTarget::Key(key.clone())),
            Value::Number(n) => n
                .as_i64()
                .map(ScriptTarget::Index)
                .ok_or_else(|| JsonPathError::eval(format!("script result {n} is not an integer index"))),
            other => Err(JsonPathError::eval(format!(
                "script result must be a string or integer, found {}",
                other.kind()
            ))),
        }
    }
}
