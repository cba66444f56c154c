//! Set planning

use serde_json::{Map, Value};

use super::{
    cursor::MutationCursor,
    edit::{Edit, replace_all},
};
use crate::{
    ast::{Selector, Step},
    core_evaluator::{Selection, Traversal},
    error::{JsonPathError, JsonPathResult},
    normalized_paths::NodePath,
    value::{ScriptTarget, ValueExt},
};

pub(super) fn plan(traversal: Traversal<'_>, steps: &[Step], value: Value) -> JsonPathResult<Vec<Edit>> {
    let Some((last, intermediate)) = steps.split_last() else {
        return Ok(vec![Edit::Replace {
            at: NodePath::root(),
            value,
        }]);
    };
    let parent = MutationCursor::new(traversal, intermediate).descend()?;

    match last.selector() {
        Selector::Key { subkey } => {
            let key = last
                .key()
                .ok_or_else(|| JsonPathError::eval("key step without a key"))?;
            plan_key(&traversal, &parent, key, subkey.as_deref(), &value)
        }
        Selector::Index { .. } | Selector::Slice { .. } | Selector::Filter { .. } => {
            let selected = traversal.apply_step(parent, last)?;
            Ok(replace_all(&selected, &value))
        }
        Selector::Script { target, .. } => {
            let container = match last.key() {
                Some(key) => traversal.select_key(&parent, key)?,
                None => parent,
            };
            match traversal.resolve_script(&container, target)? {
                ScriptTarget::Key(key) => plan_key(&traversal, &container, &key, None, &value),
                ScriptTarget::Index(index) => {
                    let selected = traversal.select_indices(&container, &[index])?;
                    Ok(replace_all(&selected, &value))
                }
            }
        }
        Selector::Wildcard => Err(JsonPathError::eval("cannot set through a wildcard step")),
    }
}

/// Write `key` (and optional literal `subkey`) below every object of `selection`
///
/// Arrays and groups broadcast the write to each element.
fn plan_key(
    traversal: &Traversal<'_>,
    selection: &Selection,
    key: &str,
    subkey: Option<&str>,
    value: &Value,
) -> JsonPathResult<Vec<Edit>> {
    let path = match selection {
        Selection::Node(path) => path,
        Selection::Group(members) => return broadcast(traversal, members.iter().cloned(), key, subkey, value),
    };

    match traversal.node(path)? {
        Value::Object(map) => {
            let Some(subkey) = subkey else {
                return Ok(vec![insert(path.clone(), key, value.clone())]);
            };
            match map.get(key) {
                Some(Value::Object(_)) => Ok(vec![insert(path.child_member(key), subkey, value.clone())]),
                Some(Value::Array(_)) => plan_key(
                    traversal,
                    &Selection::Node(path.child_member(key)),
                    subkey,
                    None,
                    value,
                ),
                None | Some(Value::Null) => {
                    let mut wrapped = Map::new();
                    wrapped.insert(subkey.to_string(), value.clone());
                    Ok(vec![insert(path.clone(), key, Value::Object(wrapped))])
                }
                Some(other) => Err(JsonPathError::type_mismatch(
                    "object or array",
                    other.kind(),
                    format!("set ['{subkey}'] below '{key}'"),
                )),
            }
        }
        Value::Array(items) => broadcast(
            traversal,
            (0..items.len()).map(|index| Selection::Node(path.child_index(index))),
            key,
            subkey,
            value,
        ),
        Value::Null => Err(JsonPathError::null_traversal(key)),
        other => Err(JsonPathError::type_mismatch(
            "object or array",
            other.kind(),
            format!("set '{key}'"),
        )),
    }
}

fn broadcast(
    traversal: &Traversal<'_>,
    members: impl Iterator<Item = Selection>,
    key: &str,
    subkey: Option<&str>,
    value: &Value,
) -> JsonPathResult<Vec<Edit>> {
    let mut edits = Vec::new();
    for member in members {
        edits.extend(plan_key(traversal, &member, key, subkey, value)?);
    }
    Ok(edits)
}

fn insert(object: NodePath, key: &str, value: Value) -> Edit {
    Edit::InsertMember {
        object,
        key: key.to_string(),
        value,
    }
}
