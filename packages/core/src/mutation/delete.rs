//! Delete planning

use serde_json::Value;

use super::{cursor::MutationCursor, edit::Edit};
use crate::{
    ast::{Selector, Step},
    core_evaluator::{Selection, Traversal, array_operations::normalize_index},
    error::{JsonPathError, JsonPathResult},
    normalized_paths::NodePath,
    value::ValueExt,
};

pub(super) fn plan(traversal: Traversal<'_>, steps: &[Step]) -> JsonPathResult<Vec<Edit>> {
    let Some((last, intermediate)) = steps.split_last() else {
        return Err(JsonPathError::eval("cannot delete the document root"));
    };
    let parent = MutationCursor::new(traversal, intermediate).descend()?;

    match last.selector() {
        Selector::Key { subkey } => {
            let key = last
                .key()
                .ok_or_else(|| JsonPathError::eval("key step without a key"))?;
            let (object, key) = match subkey {
                Some(subkey) => (traversal.select_key(&parent, key)?, subkey.as_str()),
                None => (parent, key),
            };
            let path = single_node(&object, "delete member")?;
            match traversal.node(path)? {
                Value::Object(map) if map.contains_key(key) => Ok(vec![Edit::RemoveMember {
                    object: path.clone(),
                    key: key.to_string(),
                }]),
                Value::Object(_) => Err(JsonPathError::not_exist(key)),
                other => Err(JsonPathError::type_mismatch(
                    "object",
                    other.kind(),
                    format!("delete '{key}'"),
                )),
            }
        }
        Selector::Index { indices } => {
            let array = match last.key() {
                Some(key) => traversal.select_key(&parent, key)?,
                None => parent,
            };
            let path = single_node(&array, "delete index")?;
            let len = traversal.node(path)?.expect_array("delete index")?.len();
            let mut positions = indices
                .iter()
                .map(|&index| normalize_index(index, len))
                .collect::<JsonPathResult<Vec<_>>>()?;
            positions.sort_unstable();
            positions.dedup();
            Ok(vec![Edit::RemoveIndices {
                array: path.clone(),
                indices: positions,
            }])
        }
        _ => Err(JsonPathError::eval(format!(
            "delete does not support {:?} steps",
            last.operation()
        ))),
    }
}

/// Deletes go through one concrete container, never a synthesized group
fn single_node<'s>(
    selection: &'s Selection,
    context: &str,
) -> JsonPathResult<&'s NodePath> {
    selection
        .as_node()
        .ok_or_else(|| JsonPathError::type_mismatch("object or array", "sequence", context))
}
