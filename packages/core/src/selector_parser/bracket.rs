//! Bracket payload classification

use super::core::StepParser;
use crate::{
    ast::{Selector, Step},
    error::JsonPathResult,
};

impl StepParser<'_> {
    /// Classify the text between `[` and `]`
    ///
    /// `key` is whatever preceded the bracket and may be empty.
    pub(crate) fn parse_bracket(
        &self,
        key: &str,
        inner: &str,
        position: usize,
    ) -> JsonPathResult<Step> {
        let key = (!key.is_empty()).then(|| key.to_string());

        if let Some(quoted) = quoted_literal(inner) {
            if quoted.is_empty() {
                return Err(self.error("empty quoted key", position));
            }
            let quoted = quoted.to_string();
            // `['x']` with nothing before it is the same as `.x`
            return Ok(match key {
                Some(key) => Step::new(Some(key), Selector::Key { subkey: Some(quoted) }),
                None => Step::new(Some(quoted), Selector::Key { subkey: None }),
            });
        }

        let selector = if inner.contains('?') {
            self.parse_filter_selector(inner, position)?
        } else if let Some(expression) = parenthesized(inner) {
            self.parse_script_selector(expression, position)?
        } else if inner.contains(':') {
            self.parse_slice(inner, position)?
        } else if inner.trim() == "*" {
            Selector::Slice { from: None, to: None }
        } else {
            self.parse_index_list(inner, position)?
        };
        Ok(Step::new(key, selector))
    }

    fn parse_filter_selector(&self, inner: &str, position: usize) -> JsonPathResult<Selector> {
        let Some(clause) = parenthesized(inner) else {
            return Err(self.error("filter must be wrapped in '?( … )'", position));
        };
        if !is_anchored(clause) {
            return Err(self.error(
                format!("filter clause '{clause}' must start with '@.' or '$.'"),
                position,
            ));
        }
        let filter = self.parse_filter_clause(clause, position)?;
        Ok(Selector::Filter {
            clause: clause.to_string(),
            filter,
        })
    }

    fn parse_script_selector(&self, expression: &str, position: usize) -> JsonPathResult<Selector> {
        if !is_anchored(expression) {
            return Err(self.error(
                format!("script '{expression}' must start with '@.' or '$.'"),
                position,
            ));
        }
        let target = self.parse_operand_path(expression, position)?;
        Ok(Selector::Script {
            expression: expression.to_string(),
            target,
        })
    }
}

/// Interior of a `'…'` payload
fn quoted_literal(inner: &str) -> Option<&str> {
    (inner.len() >= 2 && inner.starts_with('\'') && inner.ends_with('\''))
        .then(|| &inner[1..inner.len() - 1])
}

/// Trimmed text between the first `(` and the last `)`
pub(crate) fn parenthesized(inner: &str) -> Option<&str> {
    let open = inner.find('(')?;
    let close = inner.rfind(')')?;
    (open < close).then(|| inner[open + 1..close].trim())
}

#[inline]
pub(crate) fn is_anchored(expression: &str) -> bool {
    expression.starts_with("@.") || expression.starts_with("$.")
}
