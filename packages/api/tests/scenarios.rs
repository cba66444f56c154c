//! End-to-end tests through the public facade

use jpath::prelude::*;
use serde_json::{Value, json};

fn bookstore() -> Value {
    json!({
        "store": {
            "book": [
                {"category": "reference", "author": "Nigel Rees",
                 "title": "Sayings of the Century", "price": 8.95},
                {"category": "fiction", "author": "Evelyn Waugh",
                 "title": "Sword of Honour", "price": 12.99},
                {"category": "fiction", "author": "Herman Melville",
                 "title": "Moby Dick", "isbn": "0-553-21311-3", "price": 8.99},
                {"category": "fiction", "author": "J. R. R. Tolkien",
                 "title": "The Lord of the Rings", "isbn": "0-395-19395-8", "price": 22.99}
            ]
        }
    })
}

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn test_negative_index_lookup() {
        let doc = json!({"a": {"b": [1, 2, 3]}});
        assert_eq!(lookup(&doc, "$.a.b[-1]").expect("lookup"), json!(3));
    }

    #[test]
    fn test_filtered_titles() {
        assert_eq!(
            lookup(&bookstore(), "$.store.book[?(@.price > 10)].title").expect("lookup"),
            json!(["Sword of Honour", "The Lord of the Rings"])
        );
    }

    #[test]
    fn test_set_then_lookup() {
        let mut doc = json!({"x": {"y": 1}});
        set(&mut doc, "$.x.y", 5).expect("set");
        assert_eq!(lookup(&doc, "$.x.y").expect("lookup"), json!(5));
    }

    #[test]
    fn test_delete_first_element() {
        let mut doc = json!({"arr": [1, 2, 3]});
        delete(&mut doc, "$.arr[0]").expect("delete");
        assert_eq!(doc["arr"], json!([2, 3]));
    }

    #[test]
    fn test_append_element() {
        let mut doc = json!({"arr": [1, 2, 3]});
        append(&mut doc, "$.arr", 4).expect("append");
        assert_eq!(doc["arr"], json!([1, 2, 3, 4]));
    }

    #[test]
    fn test_missing_root_marker() {
        let err = compile("nopath").expect_err("no root marker");
        assert_eq!(err.kind(), ErrorKind::Syntax);
    }
}

#[cfg(test)]
mod law_tests {
    use super::*;

    #[test]
    fn test_recompiling_is_pure() {
        let doc = bookstore();
        let path = "$.store.book[?(@.isbn)].author";
        let first = lookup(&doc, path).expect("lookup");
        let second = compile(path).expect("compile").lookup(&doc).expect("lookup");
        assert_eq!(first, second);
        assert_eq!(first, json!(["Herman Melville", "J. R. R. Tolkien"]));
    }

    #[test]
    fn test_negative_index_law() {
        let doc = json!({"seq": ["a", "b", "c"]});
        assert_eq!(
            lookup(&doc, "$.seq[-1]").expect("lookup"),
            lookup(&doc, "$.seq[2]").expect("lookup")
        );
        assert_eq!(
            lookup(&doc, "$.seq[-4]").expect_err("past the start").kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn test_slice_laws() {
        let doc = json!({"seq": [1, 2, 3]});
        assert_eq!(lookup(&doc, "$.seq[:]").expect("lookup"), json!([1, 2, 3]));
        assert_eq!(lookup(&doc, "$.seq[0:2]").expect("lookup"), json!([1, 2, 3]));
        assert_eq!(
            lookup(&doc, "$.seq[0:7]").expect_err("bound past the end").kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn test_absent_key_is_distinct_from_malformed_path() {
        let doc = json!({"a": 1});
        let absent = lookup(&doc, "$.b").expect_err("absent");
        assert!(absent.is_not_exist());
        assert_eq!(absent.missing_key(), Some("b"));

        let malformed = compile("$.a[").expect_err("unterminated bracket");
        assert!(!malformed.is_not_exist());
        assert_eq!(malformed.kind(), ErrorKind::Syntax);
    }
}

#[cfg(test)]
mod program_tests {
    use super::*;

    #[test]
    fn test_program_conversions() {
        let parsed: Program = "$.store.book[0]".parse().expect("parse");
        let converted = Program::try_from("$.store.book[0]").expect("convert");
        assert_eq!(parsed.path(), converted.path());
        assert_eq!(parsed.len(), 2);
        assert!(!parsed.is_empty());
        assert_eq!(parsed.to_string(), "Compiled lookup: $.store.book[0]");
    }

    #[test]
    fn test_program_is_reusable_across_documents() {
        let program = compile("$.store.book[0].title").expect("compile");
        let mut doc = bookstore();
        assert_eq!(program.lookup(&doc).expect("lookup"), json!("Sayings of the Century"));

        program.set(&mut doc, json!("Renamed")).expect("set");
        assert_eq!(program.lookup(&doc).expect("lookup"), json!("Renamed"));
        assert_eq!(
            program.lookup(&json!({"store": {"book": []}})).expect_err("empty").kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn test_compile_with_config() {
        let config = PathConfig::default().with_max_path_length(4);
        assert!(jpath::compile_with("$.ab", &config).is_ok());
        assert_eq!(
            jpath::compile_with("$.abc", &config).expect_err("too long").kind(),
            ErrorKind::Syntax
        );
    }

    #[test]
    fn test_selection_handles() {
        let doc = bookstore();
        let selection = compile("$.store.book[?(@.price < 9)]")
            .expect("compile")
            .select(&doc)
            .expect("select");
        let rendered: Vec<String> = selection.nodes().iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["$['store']['book'][0]", "$['store']['book'][2]"]);
    }
}
