//! Handle derivation and resolution against a document

use serde_json::Value;

use super::types::{NodePath, PathSegment};

impl NodePath {
    /// Handle of an object member below this node
    #[inline]
    #[must_use]
    pub fn child_member(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Member(name.to_string()));
        Self { segments }
    }

    /// Handle of an array element below this node
    #[inline]
    #[must_use]
    pub fn child_index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Handle of the enclosing node; `None` for the root
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, parent) = self.segments.split_last()?;
        Some(Self {
            segments: parent.to_vec(),
        })
    }

    /// Final hop; `None` for the root
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Follow this handle through `root`
    ///
    /// Returns `None` when any hop no longer matches the document.
    #[must_use]
    pub fn resolve<'v>(&self, root: &'v Value) -> Option<&'v Value> {
        self.segments
            .iter()
            .try_fold(root, |current, segment| match (segment, current) {
                (PathSegment::Member(name), Value::Object(map)) => map.get(name),
                (PathSegment::Index(index), Value::Array(items)) => items.get(*index),
                _ => None,
            })
    }

    /// Mutable counterpart of [`NodePath::resolve`]
    #[must_use]
    pub fn resolve_mut<'v>(&self, root: &'v mut Value) -> Option<&'v mut Value> {
        let mut current = root;
        for segment in &self.segments {
            current = match (segment, current) {
                (PathSegment::Member(name), Value::Object(map)) => map.get_mut(name)?,
                (PathSegment::Index(index), Value::Array(items)) => items.get_mut(*index)?,
                _ => return None,
            };
        }
        Some(current)
    }
}
