//! Core path configuration structure

use serde::Deserialize;

use super::validation::{ConfigResult, ConfigValidator, Validator};

/// Compilation limits for path expressions
///
/// Deserializable so hosts can load it alongside their own settings; any
/// field left out falls back to [`PathConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Longest accepted path text, in bytes
    pub max_path_length: usize,

    /// Compiled size limit handed to the regex engine for `=~` patterns
    pub regex_size_limit: usize,

    /// Number of distinct regex patterns kept in the shared cache
    pub regex_cache_capacity: usize,
}

impl PathConfig {
    /// Set the longest accepted path text
    #[must_use]
    pub fn with_max_path_length(mut self, max_path_length: usize) -> Self {
        self.max_path_length = max_path_length;
        self
    }

    /// Set the compiled regex size limit
    #[must_use]
    pub fn with_regex_size_limit(mut self, regex_size_limit: usize) -> Self {
        self.regex_size_limit = regex_size_limit;
        self
    }

    /// Set the regex cache capacity
    #[must_use]
    pub fn with_regex_cache_capacity(mut self, regex_cache_capacity: usize) -> Self {
        self.regex_cache_capacity = regex_cache_capacity;
        self
    }
}

impl Validator for PathConfig {
    fn validate(&self) -> ConfigResult<()> {
        ConfigValidator::validate_non_zero(self.max_path_length, "max_path_length")?;
        ConfigValidator::validate_non_zero(self.regex_size_limit, "regex_size_limit")?;
        ConfigValidator::validate_non_zero(self.regex_cache_capacity, "regex_cache_capacity")
    }
}
