//! Core path evaluator
//!
//! Runs compiled steps against a document. Traversal works on handles
//! ([`Selection`]) rather than borrowed values; a read materializes the
//! final selection, a write resolves its handles mutably.

pub mod array_operations;
pub mod engine;
pub mod filter_evaluation;
pub mod property_operations;
pub mod selection;

pub use engine::Traversal;
pub use selection::{Selection, Sequence};
