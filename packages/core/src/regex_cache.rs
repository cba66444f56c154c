//! Regex compilation cache for `=~` filter clauses
//!
//! Patterns are compiled once per process and shared between programs.

use std::sync::RwLock;

use hashbrown::HashMap;
use regex::{Regex, RegexBuilder};

/// Inline flags accepted after the closing slash of a regex literal
pub const REGEX_FLAGS: &str = "imsxU";

/// Bounded cache of compiled patterns, keyed by flags and pattern text
pub struct RegexCache {
    cache: RwLock<HashMap<String, Regex>>,
}

impl RegexCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Get compiled regex from cache or compile and cache if not present
    ///
    /// Once `capacity` patterns are cached, new patterns are compiled but
    /// not retained.
    ///
    /// # Errors
    ///
    /// Returns the regex engine's error when the pattern does not compile
    /// within `size_limit`.
    pub fn get_or_compile(
        &self,
        pattern: &str,
        flags: &str,
        size_limit: usize,
        capacity: usize,
    ) -> Result<Regex, regex::Error> {
        let cache_key = format!("{flags}/{pattern}");
        if let Ok(cache) = self.cache.read() {
            if let Some(regex) = cache.get(&cache_key) {
                return Ok(regex.clone());
            }
        }

        let source = if flags.is_empty() {
            pattern.to_string()
        } else {
            format!("(?{flags}){pattern}")
        };
        let regex = RegexBuilder::new(&source).size_limit(size_limit).build()?;
        tracing::debug!(target: "jpath::filter", pattern = %source, "compiled regex");

        if let Ok(mut cache) = self.cache.write() {
            if cache.len() < capacity {
                cache.insert(cache_key, regex.clone());
            }
        }
        Ok(regex)
    }

    /// Number of cached patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.read().map(|cache| cache.len()).unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RegexCache {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    pub static ref REGEX_CACHE: RegexCache = RegexCache::new();
}
