//! Filter clause parser
//!
//! A clause is at most three whitespace-separated tokens: a left operand,
//! an operator, and a right operand. Single quotes group a token and mark
//! it as a string literal.

mod clause;
mod operand;
mod regex_literal;

pub use clause::{ClauseToken, split_clause};
