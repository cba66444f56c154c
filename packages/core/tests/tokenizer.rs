//! Tokenizer tests
//!
//! Splitting of path text into raw segment tokens.

use jpath_core::error::ErrorKind;
use jpath_core::tokenizer::{WILDCARD, tokenize};

fn texts(path: &str) -> Vec<String> {
    tokenize(path)
        .expect("path should tokenize")
        .into_iter()
        .map(|token| token.text)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_segments() {
        assert_eq!(texts("$.store.book.title"), ["$", "store", "book", "title"]);
        assert_eq!(texts("@.price"), ["@", "price"]);
        assert_eq!(texts("$"), ["$"]);
    }

    #[test]
    fn test_bracket_groups_keep_dots_and_spaces() {
        assert_eq!(
            texts("$.store.book[?(@.price < 10)].title"),
            ["$", "store", "book[?(@.price < 10)]", "title"]
        );
        assert_eq!(
            texts("$.['values.wi:th/Dot'][1]"),
            ["$", "['values.wi:th/Dot']", "[1]"]
        );
    }

    #[test]
    fn test_nested_brackets_close_on_balance() {
        assert_eq!(
            texts("$.items[?(@.tags[0] == 'c')].id"),
            ["$", "items[?(@.tags[0] == 'c')]", "id"]
        );
    }

    #[test]
    fn test_nested_array_roots() {
        assert_eq!(texts("$[0].[0].test"), ["$", "[0]", "[0]", "test"]);
    }

    #[test]
    fn test_double_dot_inserts_wildcard() {
        assert_eq!(texts("$..author"), ["$", WILDCARD, "author"]);
        assert_eq!(
            texts("$..book[?(@.price <= $.expensive)]"),
            ["$", WILDCARD, "book[?(@.price <= $.expensive)]"]
        );
        assert_eq!(texts("$.a[0]..b"), ["$", "a[0]", WILDCARD, "b"]);
    }

    #[test]
    fn test_trailing_wildcard_is_not_repeated() {
        assert_eq!(texts("$..*"), ["$", WILDCARD]);
        assert_eq!(texts("$.*"), ["$", WILDCARD]);
        assert_eq!(texts("$.a.*"), ["$", "a", WILDCARD]);
    }

    #[test]
    fn test_offsets_point_at_segment_text() {
        let tokens = tokenize("$.a.bc[1]").expect("path should tokenize");
        let offsets: Vec<usize> = tokens.iter().map(|t| t.offset).collect();
        assert_eq!(offsets, [0, 2, 4]);
    }

    #[test]
    fn test_empty_trailing_segment_survives_tokenizing() {
        // rejected later by the step compiler
        assert_eq!(texts("$.a."), ["$", "a", ""]);
    }

    #[test]
    fn test_missing_root_marker() {
        let err = tokenize("nopath").expect_err("path without root must fail");
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert!(err.to_string().contains("'$' or '@'"), "unexpected message: {err}");

        let err = tokenize("").expect_err("empty path must fail");
        assert_eq!(err.kind(), ErrorKind::Syntax);
    }
}
