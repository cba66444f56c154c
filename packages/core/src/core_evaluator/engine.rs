//! Step-by-step traversal

use serde_json::Value;

use super::selection::{Selection, Sequence};
use crate::{
    ast::{Selector, Step},
    error::{JsonPathError, JsonPathResult},
    normalized_paths::NodePath,
    value::ValueExt,
};

/// Read-only traversal over one document
///
/// The root stays available to every step so `$.` operands in filters
/// and scripts resolve against the whole document.
#[derive(Debug, Clone, Copy)]
pub struct Traversal<'v> {
    pub(crate) root: &'v Value,
}

impl<'v> Traversal<'v> {
    #[inline]
    #[must_use]
    pub fn new(root: &'v Value) -> Self {
        Self { root }
    }

    /// Run `steps` from the root
    ///
    /// # Errors
    ///
    /// The first failing step aborts the traversal.
    pub fn run(&self, steps: &[Step]) -> JsonPathResult<Selection> {
        self.run_from(Selection::root(), steps)
    }

    /// Run `steps` from an existing selection
    ///
    /// # Errors
    ///
    /// The first failing step aborts the traversal.
    pub fn run_from(&self, start: Selection, steps: &[Step]) -> JsonPathResult<Selection> {
        steps
            .iter()
            .try_fold(start, |selection, step| self.apply_step(selection, step))
    }

    /// Apply one step: its leading key first, then its selector
    ///
    /// # Errors
    ///
    /// Returns the step's lookup, range, type or filter error.
    pub fn apply_step(&self, selection: Selection, step: &Step) -> JsonPathResult<Selection> {
        tracing::trace!(target: "jpath::evaluator", step = %step, "applying step");
        let selection = match step.key() {
            Some(key) => self.select_key(&selection, key)?,
            None => selection,
        };

        match step.selector() {
            Selector::Key { subkey: Some(subkey) } => self.select_key(&selection, subkey),
            Selector::Key { subkey: None } | Selector::Wildcard => Ok(selection),
            Selector::Index { indices } => self.select_indices(&selection, indices),
            Selector::Slice { from, to } => self.select_slice(&selection, *from, *to),
            Selector::Filter { filter, .. } => self.select_filtered(&selection, filter),
            Selector::Script { target, .. } => self.select_scripted(&selection, target),
        }
    }

    /// Resolve a handle produced by this traversal
    pub(crate) fn node(&self, path: &NodePath) -> JsonPathResult<&'v Value> {
        path.resolve(self.root)
            .ok_or_else(|| JsonPathError::eval(format!("node {path} is not present")))
    }

    /// Indexable view of a selection, or a type mismatch
    pub(crate) fn sequence<'s>(
        &self,
        selection: &'s Selection,
        context: &str,
    ) -> JsonPathResult<Sequence<'s>> {
        match selection {
            Selection::Node(path) => {
                let len = self.node(path)?.expect_array(context)?.len();
                Ok(Sequence::Array { path, len })
            }
            Selection::Group(members) => Ok(Sequence::Group(members)),
        }
    }
}
