//! Filter and script steps

use serde_json::Value;

use super::{engine::Traversal, selection::Selection};
use crate::{
    ast::{FilterClause, OperandPath},
    error::{JsonPathError, JsonPathResult},
    value::{ScriptTarget, ValueExt},
};

impl Traversal<'_> {
    /// Keep the elements of a container that satisfy `clause`
    ///
    /// Arrays and groups keep their order; objects follow the map's
    /// iteration order. No match yields an empty group.
    ///
    /// # Errors
    ///
    /// `TypeMismatch` for scalar containers, plus any clause error.
    pub fn select_filtered(&self, selection: &Selection, clause: &FilterClause) -> JsonPathResult<Selection> {
        clause.ensure_evaluable()?;

        let candidates: Vec<Selection> = match selection {
            Selection::Node(path) => match self.node(path)? {
                Value::Array(items) => (0..items.len())
                    .map(|index| Selection::Node(path.child_index(index)))
                    .collect(),
                Value::Object(map) => map
                    .keys()
                    .map(|key| Selection::Node(path.child_member(key)))
                    .collect(),
                other => {
                    return Err(JsonPathError::type_mismatch(
                        "array or object",
                        other.kind(),
                        "filter",
                    ));
                }
            },
            Selection::Group(members) => members.clone(),
        };

        let mut matched = Vec::new();
        for candidate in candidates {
            let value = candidate.view(self.root)?;
            if clause.matches(&value, self.root)? {
                matched.push(candidate);
            }
        }
        tracing::trace!(target: "jpath::filter", matched = matched.len(), "filter applied");
        Ok(Selection::Group(matched))
    }

    /// Resolve a scripted key or index and apply it
    ///
    /// # Errors
    ///
    /// `Eval` when the expression yields neither a string nor an integer,
    /// plus the resulting key or index error.
    pub fn select_scripted(&self, selection: &Selection, target: &OperandPath) -> JsonPathResult<Selection> {
        match self.resolve_script(selection, target)? {
            ScriptTarget::Key(key) => self.select_key(selection, &key),
            ScriptTarget::Index(index) => self.select_indices(selection, &[index]),
        }
    }

    /// Evaluate a script expression with `selection` as the current value
    ///
    /// # Errors
    ///
    /// Propagates resolution failures; `Eval` for unusable result types.
    pub fn resolve_script(&self, selection: &Selection, target: &OperandPath) -> JsonPathResult<ScriptTarget> {
        let container = selection.view(self.root)?;
        let resolved = target.resolve(&container, self.root)?;
        resolved.as_script_target()
    }
}
