//! `/pattern/flags` literals for the `=~` operator

use regex::Regex;

use super::clause::ClauseToken;
use crate::{
    error::JsonPathResult,
    regex_cache::{REGEX_CACHE, REGEX_FLAGS},
    selector_parser::StepParser,
};

impl StepParser<'_> {
    pub(crate) fn parse_regex_literal(
        &self,
        token: Option<&ClauseToken>,
        position: usize,
    ) -> JsonPathResult<Regex> {
        let malformed = || self.error("regex operand should be in /pattern/ form", position);

        let token = token.filter(|t| !t.quoted).ok_or_else(malformed)?;
        let body = token.text.strip_prefix('/').ok_or_else(malformed)?;
        let close = body.rfind('/').ok_or_else(malformed)?;
        let (pattern, flags) = (&body[..close], &body[close + 1..]);

        if pattern.is_empty() {
            return Err(self.error("empty regex pattern", position));
        }
        if let Some(flag) = flags.chars().find(|f| !REGEX_FLAGS.contains(*f)) {
            return Err(self.error(format!("unsupported regex flag '{flag}'"), position));
        }

        REGEX_CACHE
            .get_or_compile(
                pattern,
                flags,
                self.config.regex_size_limit,
                self.config.regex_cache_capacity,
            )
            .map_err(|err| self.error(format!("invalid regex /{pattern}/: {err}"), position))
    }
}
