//! Mutation engine
//!
//! Set, delete and append share one traversal: a [`MutationCursor`] walks
//! every step but the last and yields the parent selection. The final
//! step is turned into a list of [`Edit`]s against node handles while the
//! document is only borrowed for reading; the edits are then committed
//! through a single mutable borrow.

mod append;
mod cursor;
mod delete;
mod edit;
mod set;

pub use cursor::{CursorState, MutationCursor};
pub use edit::Edit;

use serde_json::Value;

use crate::{ast::Step, core_evaluator::Traversal, error::JsonPathResult};

/// Write `value` at the location addressed by `steps`
pub(crate) fn set(root: &mut Value, steps: &[Step], value: Value) -> JsonPathResult<()> {
    let edits = set::plan(Traversal::new(root), steps, value);
    edit::commit(root, edits, "set")
}

/// Remove the key or indices addressed by `steps`
pub(crate) fn delete(root: &mut Value, steps: &[Step]) -> JsonPathResult<()> {
    let edits = delete::plan(Traversal::new(root), steps);
    edit::commit(root, edits, "delete")
}

/// Push `value` onto, or insert it into, the container addressed by `steps`
pub(crate) fn append(root: &mut Value, steps: &[Step], value: Value) -> JsonPathResult<()> {
    let edits = append::plan(Traversal::new(root), steps, value);
    edit::commit(root, edits, "append")
}
