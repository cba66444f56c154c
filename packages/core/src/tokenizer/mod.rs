//! Path text tokenizer
//!
//! Splits a path expression into raw segment tokens. The leading `$` or
//! `@` becomes its own token, `..` expands into a wildcard marker, and
//! bracket groups are kept whole even when they contain dots.

mod core;

pub use self::core::{RawToken, WILDCARD, tokenize};
