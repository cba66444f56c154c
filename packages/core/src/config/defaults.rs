//! Default values for path configuration

use super::types::PathConfig;

/// Default longest accepted path text, in bytes
pub const DEFAULT_MAX_PATH_LENGTH: usize = 4096;

/// Default compiled regex size limit (1 MiB)
pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 1 << 20;

/// Default number of cached regex patterns
pub const DEFAULT_REGEX_CACHE_CAPACITY: usize = 32;

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            max_path_length: DEFAULT_MAX_PATH_LENGTH,
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
            regex_cache_capacity: DEFAULT_REGEX_CACHE_CAPACITY,
        }
    }
}
