//! Node handles
//!
//! A [`NodePath`] names one node of a document by the member names and
//! array positions leading to it from the root. Selections carry these
//! handles instead of references, so a query result can later be turned
//! into a mutable borrow of the same node.

pub mod operations;
pub mod types;

pub use types::{NodePath, PathSegment};
