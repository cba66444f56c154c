//! Key lookups

use serde_json::Value;

use super::{engine::Traversal, selection::Selection};
use crate::{
    error::{JsonPathError, JsonPathResult},
    value::ValueExt,
};

impl Traversal<'_> {
    /// Look up `key` on an object, or on every element of an array or group
    ///
    /// Over a sequence, elements where the lookup fails are skipped; the
    /// step fails with `NotExist` only when no element has the key.
    ///
    /// # Errors
    ///
    /// `NotExist` for an absent key, `NullTraversal` for `null`, and
    /// `TypeMismatch` for scalars.
    pub fn select_key(&self, selection: &Selection, key: &str) -> JsonPathResult<Selection> {
        match selection {
            Selection::Node(path) => match self.node(path)? {
                Value::Object(map) if map.contains_key(key) => {
                    Ok(Selection::Node(path.child_member(key)))
                }
                Value::Object(_) => Err(JsonPathError::not_exist(key)),
                Value::Array(items) => self.select_key_across(
                    (0..items.len()).map(|index| Selection::Node(path.child_index(index))),
                    key,
                ),
                Value::Null => Err(JsonPathError::null_traversal(key)),
                other => Err(JsonPathError::type_mismatch(
                    "object or array",
                    other.kind(),
                    format!("key '{key}'"),
                )),
            },
            Selection::Group(members) => self.select_key_across(members.iter().cloned(), key),
        }
    }

    fn select_key_across(
        &self,
        members: impl Iterator<Item = Selection>,
        key: &str,
    ) -> JsonPathResult<Selection> {
        let found: Vec<Selection> = members
            .filter_map(|member| self.select_key(&member, key).ok())
            .collect();
        if found.is_empty() {
            return Err(JsonPathError::not_exist(key));
        }
        Ok(Selection::Group(found))
    }
}
