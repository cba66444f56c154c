//! Path queries and updates for `serde_json` documents
//!
//! Compile a path once with [`compile`] and reuse the [`Program`], or use
//! the one-shot helpers that take the path text directly.
//!
//! ```
//! use serde_json::json;
//!
//! let mut doc = json!({"x": {"y": 1}});
//! jpath::set(&mut doc, "$.x.y", 5).unwrap();
//! assert_eq!(jpath::lookup(&doc, "$.x.y").unwrap(), json!(5));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod operations;
pub mod prelude;

pub use operations::{append, compile, compile_with, delete, lookup, set};

// Re-export important types from the core package
pub use jpath_core::{
    ErrorKind, JsonPathError, JsonPathResult, NodePath, PathConfig, PathSegment, Program,
    Selection, Step,
};
