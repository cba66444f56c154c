//! Planned writes and their commit

use std::mem;

use serde_json::Value;

use crate::{
    core_evaluator::Selection,
    error::{JsonPathError, JsonPathResult},
    normalized_paths::NodePath,
    value::ValueExt,
};

/// One write against a node handle
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// Replace the node at `at`
    Replace { at: NodePath, value: Value },
    /// Insert or overwrite `key` in the object at `object`
    InsertMember {
        object: NodePath,
        key: String,
        value: Value,
    },
    /// Remove `key` from the object at `object`
    RemoveMember { object: NodePath, key: String },
    /// Rebuild the array at `array` without these positions
    RemoveIndices { array: NodePath, indices: Vec<usize> },
    /// Push onto the array at `array`
    Push { array: NodePath, value: Value },
}

impl Edit {
    /// Handle this edit writes through
    #[must_use]
    pub fn target(&self) -> &NodePath {
        match self {
            Edit::Replace { at, .. } => at,
            Edit::InsertMember { object, .. } | Edit::RemoveMember { object, .. } => object,
            Edit::RemoveIndices { array, .. } | Edit::Push { array, .. } => array,
        }
    }

    fn apply(self, root: &mut Value) -> JsonPathResult<()> {
        let path = self.target().clone();
        let node = path
            .resolve_mut(root)
            .ok_or_else(|| JsonPathError::eval(format!("node {path} is not present")))?;

        match self {
            Edit::Replace { value, .. } => *node = value,
            Edit::InsertMember { key, value, .. } => {
                node.expect_object_mut("insert member")?.insert(key, value);
            }
            Edit::RemoveMember { key, .. } => {
                node.expect_object_mut("delete member")?.remove(&key);
            }
            Edit::RemoveIndices { indices, .. } => {
                let items = node.expect_array_mut("delete index")?;
                *items = mem::take(items)
                    .into_iter()
                    .enumerate()
                    .filter_map(|(pos, item)| (!indices.contains(&pos)).then_some(item))
                    .collect();
            }
            Edit::Push { value, .. } => node.expect_array_mut("append")?.push(value),
        }
        Ok(())
    }
}

/// Replace every node of a selection with a copy of `value`
pub(super) fn replace_all(selection: &Selection, value: &Value) -> Vec<Edit> {
    selection
        .nodes()
        .into_iter()
        .map(|at| Edit::Replace {
            at: at.clone(),
            value: value.clone(),
        })
        .collect()
}

/// Apply planned edits in order
pub(super) fn commit(
    root: &mut Value,
    edits: JsonPathResult<Vec<Edit>>,
    operation: &'static str,
) -> JsonPathResult<()> {
    let result = edits.and_then(|edits| {
        let count = edits.len();
        edits.into_iter().try_for_each(|edit| edit.apply(root))?;
        Ok(count)
    });
    match result {
        Ok(count) => {
            tracing::debug!(target: "jpath::mutation", operation, edits = count, "mutation applied");
            Ok(())
        }
        Err(err) => {
            tracing::debug!(target: "jpath::mutation", operation, error = %err, "mutation rejected");
            Err(err)
        }
    }
}
