//! Operand resolution

use std::borrow::Cow;

use serde_json::Value;

use crate::{
    ast::{Anchor, Operand, OperandPath},
    core_evaluator::Traversal,
    error::JsonPathResult,
};

impl OperandPath {
    /// Resolve against the candidate element or the document root
    ///
    /// # Errors
    ///
    /// Propagates traversal failures such as a missing key.
    pub fn resolve<'v>(&self, current: &'v Value, root: &'v Value) -> JsonPathResult<Cow<'v, Value>> {
        let origin = match self.anchor {
            Anchor::Current => current,
            Anchor::Root => root,
        };
        Traversal::new(origin).run(&self.steps)?.view(origin)
    }
}

impl Operand {
    /// Resolve to a value; literals become strings
    ///
    /// # Errors
    ///
    /// Propagates path resolution failures.
    pub fn resolve<'v>(&self, current: &'v Value, root: &'v Value) -> JsonPathResult<Cow<'v, Value>> {
        match self {
            Operand::Path(path) => path.resolve(current, root),
            Operand::Literal(text) => Ok(Cow::Owned(Value::String(text.clone()))),
        }
    }
}
