//! Slice and index-list payloads

use super::core::StepParser;
use crate::{ast::Selector, error::JsonPathResult};

impl StepParser<'_> {
    /// Parse `from:to`; either bound may be omitted
    pub(crate) fn parse_slice(&self, inner: &str, position: usize) -> JsonPathResult<Selector> {
        let mut bounds = inner.split(':');
        let (Some(from), Some(to), None) = (bounds.next(), bounds.next(), bounds.next()) else {
            return Err(self.error("only one range (from:to) is supported", position));
        };
        Ok(Selector::Slice {
            from: self.parse_bound(from, position)?,
            to: self.parse_bound(to, position)?,
        })
    }

    /// Parse a comma-separated list of signed integers
    pub(crate) fn parse_index_list(&self, inner: &str, position: usize) -> JsonPathResult<Selector> {
        let indices = inner
            .split(',')
            .map(|piece| {
                let piece = piece.trim();
                piece.parse::<i64>().map_err(|_| {
                    self.error(format!("index '{piece}' is not an integer"), position)
                })
            })
            .collect::<JsonPathResult<Vec<_>>>()?;
        Ok(Selector::Index { indices })
    }

    fn parse_bound(&self, bound: &str, position: usize) -> JsonPathResult<Option<i64>> {
        let bound = bound.trim();
        if bound.is_empty() {
            return Ok(None);
        }
        bound
            .parse::<i64>()
            .map(Some)
            .map_err(|_| self.error(format!("slice bound '{bound}' is not an integer"), position))
    }
}
