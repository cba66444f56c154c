//! Append planning

use serde_json::Value;

use super::{cursor::MutationCursor, edit::Edit};
use crate::{
    ast::{Selector, Step},
    core_evaluator::{Selection, Traversal},
    error::{JsonPathError, JsonPathResult},
    normalized_paths::NodePath,
    value::ValueExt,
};

pub(super) fn plan(traversal: Traversal<'_>, steps: &[Step], value: Value) -> JsonPathResult<Vec<Edit>> {
    let Some((last, intermediate)) = steps.split_last() else {
        return push_into(&traversal, &Selection::root(), None, value);
    };
    let parent = MutationCursor::new(traversal, intermediate).descend()?;

    match last.selector() {
        Selector::Key { subkey } => {
            let key = last
                .key()
                .ok_or_else(|| JsonPathError::eval("key step without a key"))?;
            let outer = traversal.select_key(&parent, key)?;
            let Some(subkey) = subkey else {
                return push_into(&traversal, &outer, None, value);
            };
            match traversal.select_key(&outer, subkey) {
                Ok(child) => push_into(&traversal, &child, Some(subkey), value),
                // An absent subkey becomes a new member of the outer object
                Err(err) if err.is_not_exist() => {
                    let object = container(&outer)?;
                    match traversal.node(object)? {
                        Value::Object(_) => Ok(vec![Edit::InsertMember {
                            object: object.clone(),
                            key: subkey.clone(),
                            value,
                        }]),
                        other => Err(JsonPathError::type_mismatch(
                            "object",
                            other.kind(),
                            format!("append ['{subkey}']"),
                        )),
                    }
                }
                Err(err) => Err(err),
            }
        }
        Selector::Index { indices } => {
            if indices.len() != 1 {
                return Err(JsonPathError::eval("append needs exactly one index"));
            }
            let child = traversal.apply_step(parent, last)?;
            push_into(&traversal, &child, None, value)
        }
        _ => Err(JsonPathError::eval(format!(
            "append does not support {:?} steps",
            last.operation()
        ))),
    }
}

/// Push onto an array, or insert `subkey` into an object
fn push_into(
    traversal: &Traversal<'_>,
    target: &Selection,
    subkey: Option<&String>,
    value: Value,
) -> JsonPathResult<Vec<Edit>> {
    let path = container(target)?;
    match (traversal.node(path)?, subkey) {
        (Value::Array(_), _) => Ok(vec![Edit::Push {
            array: path.clone(),
            value,
        }]),
        (Value::Object(_), Some(subkey)) => Ok(vec![Edit::InsertMember {
            object: path.clone(),
            key: subkey.clone(),
            value,
        }]),
        (Value::Object(_), None) => Err(JsonPathError::eval(
            "appending to an object needs a quoted key, e.g. ['name']",
        )),
        (other, _) => Err(JsonPathError::type_mismatch(
            "array or object",
            other.kind(),
            "append",
        )),
    }
}

fn container(selection: &Selection) -> JsonPathResult<&NodePath> {
    selection
        .as_node()
        .ok_or_else(|| JsonPathError::type_mismatch("array or object", "sequence", "append"))
}
