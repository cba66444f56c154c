//! Step parser entry point

use crate::{
    ast::{Selector, Step},
    config::PathConfig,
    error::{JsonPathError, JsonPathResult, invalid_expression_error},
    tokenizer::{RawToken, WILDCARD},
};

/// Compiles raw tokens of one path into steps
pub struct StepParser<'a> {
    pub(crate) path: &'a str,
    pub(crate) config: &'a PathConfig,
}

impl<'a> StepParser<'a> {
    /// Create a parser for tokens of `path`
    #[inline]
    #[must_use]
    pub fn new(path: &'a str, config: &'a PathConfig) -> Self {
        Self { path, config }
    }

    /// Compile one token
    ///
    /// # Errors
    ///
    /// Returns a syntax error for empty segments, unterminated brackets and
    /// malformed bracket payloads.
    pub fn parse_step(&self, token: &RawToken) -> JsonPathResult<Step> {
        let text = token.text.as_str();
        if text == WILDCARD {
            return Ok(Step::wildcard());
        }

        let Some(open) = text.find('[') else {
            if text.is_empty() {
                return Err(self.error("empty path segment", token.offset));
            }
            return Ok(Step::new(
                Some(text.to_string()),
                Selector::Key { subkey: None },
            ));
        };

        let Some(inner) = text[open + 1..].strip_suffix(']') else {
            return Err(self.error("unterminated bracket", token.offset + open));
        };
        self.parse_bracket(&text[..open], inner, token.offset + open)
    }

    /// Compile every token after the leading root marker
    ///
    /// # Errors
    ///
    /// Propagates the first failing [`StepParser::parse_step`].
    pub fn parse_steps(&self, tokens: &[RawToken]) -> JsonPathResult<Vec<Step>> {
        tokens
            .iter()
            .skip(1)
            .map(|token| self.parse_step(token))
            .collect()
    }

    #[inline]
    pub(crate) fn error(&self, reason: impl Into<String>, position: usize) -> JsonPathError {
        invalid_expression_error(self.path, reason, Some(position))
    }
}
