//! Selection handles

use std::borrow::Cow;

use serde_json::Value;

use crate::{
    error::{JsonPathError, JsonPathResult},
    normalized_paths::NodePath,
};

/// Result of running steps: one node, or an ordered group of selections
///
/// Groups are what key-over-array, multi-index, slice and filter steps
/// produce. They read back as JSON arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A single node of the document
    Node(NodePath),
    /// Synthesized sequence
    Group(Vec<Selection>),
}

impl Selection {
    /// Selection holding the document root
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self::Node(NodePath::root())
    }

    /// Read the selection back out of `root`
    ///
    /// Single nodes are borrowed; groups are assembled into a new array.
    ///
    /// # Errors
    ///
    /// Returns `Eval` when a handle no longer resolves in `root`.
    pub fn view<'v>(&self, root: &'v Value) -> JsonPathResult<Cow<'v, Value>> {
        match self {
            Selection::Node(path) => path
                .resolve(root)
                .map(Cow::Borrowed)
                .ok_or_else(|| JsonPathError::eval(format!("node {path} is not present"))),
            Selection::Group(members) => members
                .iter()
                .map(|member| member.view(root).map(Cow::into_owned))
                .collect::<JsonPathResult<Vec<_>>>()
                .map(|items| Cow::Owned(Value::Array(items))),
        }
    }

    /// Owned copy of [`Selection::view`]
    ///
    /// # Errors
    ///
    /// Same as [`Selection::view`].
    pub fn materialize(&self, root: &Value) -> JsonPathResult<Value> {
        self.view(root).map(Cow::into_owned)
    }

    /// Every node handle in the selection, depth first
    #[must_use]
    pub fn nodes(&self) -> Vec<&NodePath> {
        let mut out = Vec::new();
        self.collect_nodes(&mut out);
        out
    }

    fn collect_nodes<'s>(&'s self, out: &mut Vec<&'s NodePath>) {
        match self {
            Selection::Node(path) => out.push(path),
            Selection::Group(members) => members.iter().for_each(|m| m.collect_nodes(out)),
        }
    }

    /// The handle of a single-node selection
    #[inline]
    #[must_use]
    pub fn as_node(&self) -> Option<&NodePath> {
        match self {
            Selection::Node(path) => Some(path),
            Selection::Group(_) => None,
        }
    }
}

/// Indexable view over an array node or a group
#[derive(Debug, Clone, Copy)]
pub enum Sequence<'s> {
    /// Elements of the array at `path`
    Array { path: &'s NodePath, len: usize },
    /// Members of a group
    Group(&'s [Selection]),
}

impl Sequence<'_> {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Sequence::Array { len, .. } => *len,
            Sequence::Group(members) => members.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Selection for position `index`, or `None` past the end
    #[must_use]
    pub fn member(&self, index: usize) -> Option<Selection> {
        match self {
            Sequence::Array { path, len } => {
                (index < *len).then(|| Selection::Node(path.child_index(index)))
            }
            Sequence::Group(members) => members.get(index).cloned(),
        }
    }
}
