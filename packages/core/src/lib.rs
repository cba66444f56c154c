//! Path expressions over `serde_json` trees
//!
//! Compiles dotted/bracketed path text (`$.store.book[?(@.price > 10)].title`)
//! into a reusable [`Program`], evaluates it against a document, and
//! writes through it with set, delete and append.
//!
//! ```
//! use jpath_core::Program;
//! use serde_json::json;
//!
//! let mut doc = json!({"arr": [1, 2, 3]});
//! let program = Program::compile("$.arr").unwrap();
//! program.append(&mut doc, json!(4)).unwrap();
//! assert_eq!(program.lookup(&doc).unwrap(), json!([1, 2, 3, 4]));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod ast;
pub mod compiler;
pub mod config;
pub mod core_evaluator;
pub mod error;
pub mod filter;
pub mod filter_parser;
pub mod mutation;
pub mod normalized_paths;
pub mod program;
pub mod regex_cache;
pub mod selector_parser;
pub mod tokenizer;
pub mod value;

pub use ast::{ComparisonOp, Operation, Selector, Step};
pub use compiler::JsonPathCompiler;
pub use config::{ConfigurationError, PathConfig, Validator};
pub use core_evaluator::{Selection, Traversal};
pub use error::{ErrorKind, JsonPathError, JsonPathResult};
pub use normalized_paths::{NodePath, PathSegment};
pub use program::Program;
pub use value::{ScriptTarget, ValueExt};
