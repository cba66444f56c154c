//! Clause matching

use serde_json::Value;

use super::comparisons::compare_values;
use crate::{
    ast::{FilterClause, Operand, Predicate},
    error::{JsonPathError, JsonPathResult},
    value::ValueExt,
};

impl FilterClause {
    /// Fail early for clauses that compiled but cannot be evaluated
    ///
    /// # Errors
    ///
    /// Returns `Eval` for an unknown operator or a missing right operand.
    pub fn ensure_evaluable(&self) -> JsonPathResult<()> {
        match &self.predicate {
            Predicate::Unsupported { reason } => Err(JsonPathError::eval(reason.clone())),
            _ => Ok(()),
        }
    }

    /// Evaluate the clause for one candidate element
    ///
    /// An operand that cannot be resolved makes the candidate fail to
    /// match rather than aborting the filter.
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` when a regex is applied to a non-string and
    /// `Eval` for an unsupported clause.
    pub fn matches(&self, candidate: &Value, root: &Value) -> JsonPathResult<bool> {
        let Some(left) = resolve_or_skip(&self.left, candidate, root) else {
            return Ok(false);
        };

        match &self.predicate {
            Predicate::Exists => Ok(!left.is_null()),
            Predicate::Compare { op, right } => {
                let Some(right) = resolve_or_skip(right, candidate, root) else {
                    return Ok(false);
                };
                Ok(compare_values(&left, *op, &right))
            }
            Predicate::Matches { regex } => match &*left {
                Value::String(text) => Ok(regex.is_match(text)),
                other => Err(JsonPathError::type_mismatch(
                    "string",
                    other.kind(),
                    format!("regex match {}", regex.as_str()),
                )),
            },
            Predicate::Unsupported { reason } => Err(JsonPathError::eval(reason.clone())),
        }
    }
}

fn resolve_or_skip<'v>(
    operand: &Operand,
    candidate: &'v Value,
    root: &'v Value,
) -> Option<std::borrow::Cow<'v, Value>> {
    match operand.resolve(candidate, root) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::trace!(target: "jpath::filter", error = %err, "operand did not resolve");
            None
        }
    }
}
