//! Core handle types

use std::fmt;

/// Canonical address of a single node, relative to the document root
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath {
    pub(crate) segments: Vec<PathSegment>,
}

/// One hop of a [`NodePath`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Object member (`['name']`)
    Member(String),
    /// Array position (`[index]`), always non-negative
    Index(usize),
}

impl NodePath {
    /// The root node (`$`)
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Hops from the root
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of hops from the root
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        self.segments.iter().try_for_each(|segment| write!(f, "{segment}"))
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Member(name) => write!(f, "['{name}']"),
            PathSegment::Index(index) => write!(f, "[{index}]"),
        }
    }
}
