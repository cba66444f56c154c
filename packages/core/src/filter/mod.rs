//! Filter clause evaluation
//!
//! Resolves clause operands against a candidate element and the document
//! root, then applies the fixed operator set through a dedicated
//! comparator.

pub mod comparisons;
mod core;
mod operand;

pub use comparisons::compare_values;
