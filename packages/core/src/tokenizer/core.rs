//! Segment scanner

use crate::error::{JsonPathResult, invalid_expression_error};

/// Token text standing for a scan marker
pub const WILDCARD: &str = "*";

/// One segment of path text, not yet classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    /// Segment text without the separating dot
    pub text: String,
    /// Byte offset of the segment in the path
    pub offset: usize,
}

impl RawToken {
    fn new(text: impl Into<String>, offset: usize) -> Self {
        Self {
            text: text.into(),
            offset,
        }
    }
}

/// Split a path into raw tokens
///
/// # Examples
/// ```
/// use jpath_core::tokenizer::tokenize;
///
/// let tokens = tokenize("$.store.book[?(@.price < 10)].title").unwrap();
/// let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(texts, ["$", "store", "book[?(@.price < 10)]", "title"]);
/// ```
///
/// # Errors
///
/// Returns a syntax error when the path is empty or does not start with
/// `$` or `@`.
pub fn tokenize(path: &str) -> JsonPathResult<Vec<RawToken>> {
    let mut chars = path.char_indices();
    let root = match chars.next() {
        Some((_, c @ ('$' | '@'))) => c,
        Some(_) => {
            return Err(invalid_expression_error(
                path,
                "path must start with '$' or '@'",
                Some(0),
            ));
        }
        None => return Err(invalid_expression_error(path, "empty path", None)),
    };

    let mut scanner = Scanner {
        tokens: vec![RawToken::new(root.to_string(), 0)],
        buffer: String::new(),
        start: 1,
        depth: 0,
    };
    for (idx, c) in chars {
        scanner.feed(idx, c);
    }
    Ok(scanner.finish())
}

struct Scanner {
    tokens: Vec<RawToken>,
    buffer: String,
    /// Byte offset where `buffer` begins
    start: usize,
    /// Open brackets in `buffer`
    depth: usize,
}

impl Scanner {
    fn feed(&mut self, idx: usize, c: char) {
        if self.buffer.is_empty() {
            self.start = idx;
        }
        self.buffer.push(c);

        match self.buffer.as_str() {
            "." => return,
            ".." => {
                self.push_wildcard(self.start);
                self.buffer.truncate(1);
                self.start = idx;
                return;
            }
            _ => {}
        }

        if c == '[' {
            self.depth += 1;
        } else if self.depth > 0 {
            // A bracket group ends at the unescaped ']' that balances it
            if c == ']' && !self.buffer[..self.buffer.len() - 1].ends_with('\\') {
                self.depth -= 1;
                if self.depth == 0 {
                    self.flush();
                }
            }
        } else if c == '.' {
            self.buffer.pop();
            self.flush();
            self.buffer.push('.');
            self.start = idx;
        }
    }

    fn flush(&mut self) {
        let buffer = std::mem::take(&mut self.buffer);
        let token = match buffer.strip_prefix('.') {
            Some(text) => RawToken::new(text, self.start + 1),
            None => RawToken::new(buffer, self.start),
        };
        self.tokens.push(token);
    }

    fn push_wildcard(&mut self, offset: usize) {
        if !self.last_is_wildcard() {
            self.tokens.push(RawToken::new(WILDCARD, offset));
        }
    }

    fn last_is_wildcard(&self) -> bool {
        self.tokens.last().is_some_and(|t| t.text == WILDCARD)
    }

    fn finish(mut self) -> Vec<RawToken> {
        if !self.buffer.is_empty() {
            let trailing_wildcard = self.buffer.trim_start_matches('.') == WILDCARD;
            if !(trailing_wildcard && self.last_is_wildcard()) {
                self.flush();
            }
        }
        self.tokens
    }
}
