//! Step compiler
//!
//! Classifies raw tokens into [`Step`](crate::ast::Step)s. Bracket payloads
//! are tried in a fixed order: quoted key, filter, script, slice, `*`, and
//! finally an index list.

pub mod bracket;
pub mod core;
pub mod slice;

pub use self::core::StepParser;
