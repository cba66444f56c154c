//! Common imports
//!
//! ```
//! use jpath::prelude::*;
//! use serde_json::json;
//!
//! let program: Program = "$.a".parse().unwrap();
//! assert_eq!(program.lookup(&json!({"a": 1})).unwrap(), json!(1));
//! ```

pub use jpath_core::{
    ErrorKind, JsonPathError, JsonPathResult, PathConfig, Program, Selection, ValueExt,
};

pub use crate::operations::{append, compile, delete, lookup, set};
