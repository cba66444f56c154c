//! Comparison operations for filter clauses

use serde_json::Value;

use crate::{ast::ComparisonOp, value::ValueExt};

/// Compare two resolved operands
///
/// Numbers, and strings that read as finite numbers, compare numerically.
/// Any other pair compares by string representation.
///
/// # Examples
/// ```
/// use jpath_core::ast::ComparisonOp;
/// use jpath_core::filter::compare_values;
/// use serde_json::json;
///
/// assert!(compare_values(&json!(12.99), ComparisonOp::Greater, &json!("10")));
/// assert!(compare_values(&json!("fiction"), ComparisonOp::Equal, &json!("fiction")));
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn compare_values(left: &Value, op: ComparisonOp, right: &Value) -> bool {
    match (left.as_comparable_number(), right.as_comparable_number()) {
        (Some(a), Some(b)) => match op {
            ComparisonOp::Equal => a == b,
            ComparisonOp::Less => a < b,
            ComparisonOp::LessEq => a <= b,
            ComparisonOp::GreaterEq => a >= b,
            ComparisonOp::Greater => a > b,
        },
        _ => {
            let (a, b) = (left.as_comparable_string(), right.as_comparable_string());
            match op {
                ComparisonOp::Equal => a == b,
                ComparisonOp::Less => a < b,
                ComparisonOp::LessEq => a <= b,
                ComparisonOp::GreaterEq => a >= b,
                ComparisonOp::Greater => a > b,
            }
        }
    }
}
