//! Evaluator tests
//!
//! Lookups against the bookstore document, covering every step kind and
//! the error taxonomy.

use jpath_core::core_evaluator::Sequence;
use jpath_core::{ErrorKind, JsonPathError, NodePath, PathSegment, Program, Selection};
use serde_json::{Value, json};

fn bookstore() -> Value {
    json!({
        "main": "bicycle",
        "store": {
            "book": [
                {
                    "category": "reference",
                    "author": "Nigel Rees",
                    "title": "Sayings of the Century",
                    "price": 8.95
                },
                {
                    "category": "fiction",
                    "author": "Evelyn Waugh",
                    "title": "Sword of Honour",
                    "price": 12.99
                },
                {
                    "category": "fiction",
                    "author": "Herman Melville",
                    "title": "Moby Dick",
                    "isbn": "0-553-21311-3",
                    "price": 8.99
                },
                {
                    "category": "fiction",
                    "author": "J. R. R. Tolkien",
                    "title": "The Lord of the Rings",
                    "isbn": "0-395-19395-8",
                    "price": 22.99
                }
            ],
            "bicycle": {
                "color": "red",
                "price": 19.95
            }
        },
        "expensive": 10
    })
}

fn lookup(root: &Value, path: &str) -> Value {
    Program::compile(path)
        .expect("path should compile")
        .lookup(root)
        .unwrap_or_else(|err| panic!("lookup {path} failed: {err}"))
}

fn lookup_err(root: &Value, path: &str) -> JsonPathError {
    Program::compile(path)
        .expect("path should compile")
        .lookup(root)
        .expect_err("lookup should fail")
}

#[cfg(test)]
mod key_tests {
    use super::*;

    #[test]
    fn test_root_and_keys() {
        let doc = bookstore();
        assert_eq!(lookup(&doc, "$"), doc);
        assert_eq!(lookup(&doc, "$.expensive"), json!(10));
        assert_eq!(lookup(&doc, "@.expensive"), json!(10));
        assert_eq!(lookup(&doc, "$.store.bicycle.color"), json!("red"));
        assert_eq!(lookup(&doc, "$['main']"), json!("bicycle"));
    }

    #[test]
    fn test_key_maps_across_arrays() {
        let doc = bookstore();
        assert_eq!(
            lookup(&doc, "$.store.book.isbn"),
            json!(["0-553-21311-3", "0-395-19395-8"])
        );
        assert_eq!(
            lookup(&doc, "$.store.book[*].price"),
            json!([8.95, 12.99, 8.99, 22.99])
        );
    }

    #[test]
    fn test_reserved_characters_in_keys() {
        let doc = json!({
            "second": {"sec.1": "x"},
            "values.wi:th/Dot": [1, 2]
        });
        assert_eq!(lookup(&doc, "$.second['sec.1']"), json!("x"));
        assert_eq!(lookup(&doc, "$.['values.wi:th/Dot'][1]"), json!(2));
    }

    #[test]
    fn test_wildcard_is_a_pass_through() {
        let doc = bookstore();
        assert_eq!(lookup(&doc, "$..expensive"), json!(10));
        assert_eq!(lookup(&doc, "$.store.bicycle.*"), json!({"color": "red", "price": 19.95}));
        assert_eq!(lookup_err(&doc, "$..author").kind(), ErrorKind::NotExist);
    }

    #[test]
    fn test_missing_keys() {
        let doc = bookstore();
        let err = lookup_err(&doc, "$.store.nope");
        assert!(err.is_not_exist());
        assert_eq!(err.missing_key(), Some("nope"));
        assert_eq!(err.to_string(), "key error: \"nope\" not found in object");

        let err = lookup_err(&doc, "$.store.book[*].nope");
        assert_eq!(err.missing_key(), Some("nope"));
    }

    #[test]
    fn test_key_on_null_and_scalars() {
        let doc = json!({"a": null, "n": 1});
        assert_eq!(lookup_err(&doc, "$.a.b").kind(), ErrorKind::NullTraversal);
        assert_eq!(lookup_err(&doc, "$.n.b").kind(), ErrorKind::TypeMismatch);
    }
}

#[cfg(test)]
mod array_tests {
    use super::*;

    #[test]
    fn test_indices() {
        let doc = bookstore();
        assert_eq!(lookup(&doc, "$.store.book[0].price"), json!(8.95));
        assert_eq!(lookup(&doc, "$.store.book[-1].isbn"), json!("0-395-19395-8"));
        assert_eq!(lookup(&doc, "$.store.book[3,0].price"), json!([22.99, 8.95]));
    }

    #[test]
    fn test_nested_arrays() {
        let doc = json!([[{"test": 1}], [{"test": 2}]]);
        assert_eq!(lookup(&doc, "$[0].[0].test"), json!(1));
        assert_eq!(lookup(&doc, "$[1][0].test"), json!(2));
    }

    #[test]
    fn test_negative_index_law() {
        let doc = json!({"seq": [4, 5, 6]});
        assert_eq!(lookup(&doc, "$.seq[-1]"), lookup(&doc, "$.seq[2]"));
        let err = lookup_err(&doc, "$.seq[-4]");
        assert_eq!(err, JsonPathError::range(-4, 3));
        assert_eq!(err.to_string(), "index out of range: len: 3, idx: -4");
        assert_eq!(lookup_err(&doc, "$.seq[3]").kind(), ErrorKind::Range);
    }

    #[test]
    fn test_slices_use_inclusive_upper_bound() {
        let doc = bookstore();
        assert_eq!(lookup(&doc, "$.store.book[0:1].price"), json!([8.95, 12.99]));
        assert_eq!(
            lookup(&doc, "$.store.book[-2:].title"),
            json!(["Moby Dick", "The Lord of the Rings"])
        );
        assert_eq!(lookup(&doc, "$.store.book[:0].price"), json!([8.95]));
    }

    #[test]
    fn test_slice_laws() {
        let doc = json!({"seq": [1, 2, 3]});
        assert_eq!(lookup(&doc, "$.seq[*]"), json!([1, 2, 3]));
        assert_eq!(lookup(&doc, "$.seq[:]"), json!([1, 2, 3]));
        assert_eq!(lookup(&doc, "$.seq[0:2]"), json!([1, 2, 3]));
        assert_eq!(lookup(&doc, "$.seq[0:-1]"), json!([1, 2, 3]));
        assert_eq!(lookup_err(&doc, "$.seq[4:]").kind(), ErrorKind::Range);
        assert_eq!(lookup_err(&doc, "$.seq[0:3]").kind(), ErrorKind::Range);
        assert_eq!(lookup_err(&doc, "$.seq[-4:]").kind(), ErrorKind::Range);
        assert_eq!(lookup_err(&doc, "$.seq[2:0]").kind(), ErrorKind::Range);
    }

    #[test]
    fn test_empty_array_slices() {
        let doc = json!({"seq": []});
        assert_eq!(lookup(&doc, "$.seq[*]"), json!([]));
        assert_eq!(lookup_err(&doc, "$.seq[0]").kind(), ErrorKind::Range);
    }

    #[test]
    fn test_indexing_non_arrays() {
        let doc = bookstore();
        assert_eq!(lookup_err(&doc, "$.expensive[0]").kind(), ErrorKind::TypeMismatch);
        assert_eq!(lookup_err(&doc, "$.store[1:2]").kind(), ErrorKind::TypeMismatch);
    }
}

#[cfg(test)]
mod filter_tests {
    use super::*;

    #[test]
    fn test_filter_equality_distinguishes_close_numbers() {
        let doc = json!({"items": [{"x": 0}, {"x": 1e-16}]});
        assert_eq!(
            lookup(&doc, "$.items[?(@.x == 0.0000000000000001)]"),
            json!([{"x": 1e-16}])
        );
    }

    #[test]
    fn test_filter_by_comparison() {
        let doc = bookstore();
        assert_eq!(
            lookup(&doc, "$.store.book[?(@.price > 10)].title"),
            json!(["Sword of Honour", "The Lord of the Rings"])
        );
        assert_eq!(
            lookup(&doc, "$.store.book[?(@.category == 'fiction')].author"),
            json!(["Evelyn Waugh", "Herman Melville", "J. R. R. Tolkien"])
        );
        assert_eq!(
            lookup(&doc, "$.store.book[?(@.author == 'Nigel Rees')].title"),
            json!(["Sayings of the Century"])
        );
    }

    #[test]
    fn test_filter_against_root_values() {
        let doc = bookstore();
        assert_eq!(
            lookup(&doc, "$.store.book[?(@.price > $.expensive)].price"),
            json!([12.99, 22.99])
        );
        assert_eq!(
            lookup(&doc, "$.store.book[?(@.price < $.expensive)].price"),
            json!([8.95, 8.99])
        );
        assert_eq!(
            lookup(&doc, "$..book[?(@.price <= $.expensive)].title"),
            json!(["Sayings of the Century", "Moby Dick"])
        );
    }

    #[test]
    fn test_default_operator_is_exists() {
        let doc = bookstore();
        let implicit = lookup(&doc, "$.store.book[?(@.isbn)].price");
        let explicit = lookup(&doc, "$.store.book[?(@.isbn exists)].price");
        assert_eq!(implicit, json!([8.99, 22.99]));
        assert_eq!(implicit, explicit);
    }

    #[test]
    fn test_regex_filters() {
        let doc = bookstore();
        assert_eq!(
            lookup(&doc, "$.store.book[?(@.author =~ /(?i).*REES/)].author"),
            json!(["Nigel Rees"])
        );
        assert_eq!(
            lookup(&doc, "$.store.book[?(@.title =~ /^the/i)].title"),
            json!(["The Lord of the Rings"])
        );
        assert_eq!(
            lookup_err(&doc, "$.store.book[?(@.price =~ /9/)]").kind(),
            ErrorKind::TypeMismatch
        );
    }

    #[test]
    fn test_filter_over_object_members() {
        let doc = bookstore();
        assert_eq!(
            lookup(&doc, "$.store[?(@.color == 'red')].price"),
            json!([19.95])
        );
    }

    #[test]
    fn test_filter_operand_with_index() {
        let doc = json!({"items": [
            {"id": 1, "tags": ["a", "b"]},
            {"id": 2, "tags": ["c"]}
        ]});
        assert_eq!(lookup(&doc, "$.items[?(@.tags[0] == 'c')].id"), json!([2]));
    }

    #[test]
    fn test_filter_without_matches() {
        let doc = bookstore();
        assert_eq!(lookup(&doc, "$.store.book[?(@.price > 100)]"), json!([]));
    }

    #[test]
    fn test_unsupported_operator_fails_at_evaluation() {
        let doc = bookstore();
        let err = lookup_err(&doc, "$.store.book[?(@.price ~~ 3)]");
        assert_eq!(err.kind(), ErrorKind::Eval);
        assert!(err.to_string().contains("~~"), "unexpected message: {err}");

        let err = lookup_err(&doc, "$.store.book[?(@.price >)]");
        assert_eq!(err.kind(), ErrorKind::Eval);
    }

    #[test]
    fn test_filtering_scalars() {
        let doc = bookstore();
        assert_eq!(
            lookup_err(&doc, "$.expensive[?(@.x)]").kind(),
            ErrorKind::TypeMismatch
        );
    }
}

#[cfg(test)]
mod script_tests {
    use super::*;

    #[test]
    fn test_script_key_from_root() {
        let doc = bookstore();
        assert_eq!(lookup(&doc, "$.store[($.main)].color"), json!("red"));
    }

    #[test]
    fn test_script_index() {
        let doc = json!({"pick": 1, "seq": ["a", "b"]});
        assert_eq!(lookup(&doc, "$.seq[($.pick)]"), json!("b"));

        let doc = json!({"pick": 5, "seq": ["a", "b"]});
        assert_eq!(lookup_err(&doc, "$.seq[($.pick)]").kind(), ErrorKind::Range);
    }

    #[test]
    fn test_script_relative_to_current_value() {
        let doc = json!({"obj": {"which": "b", "b": 2}});
        assert_eq!(lookup(&doc, "$.obj[(@.which)]"), json!(2));
    }

    #[test]
    fn test_script_result_must_be_key_or_index() {
        let doc = json!({"pick": true, "seq": ["a"]});
        assert_eq!(lookup_err(&doc, "$.seq[($.pick)]").kind(), ErrorKind::Eval);
    }
}

#[cfg(test)]
mod selection_tests {
    use super::*;

    #[test]
    fn test_select_returns_node_handles() {
        let doc = bookstore();
        let selection = Program::compile("$.store.book[?(@.isbn)]")
            .expect("compiles")
            .select(&doc)
            .expect("selects");
        let handles: Vec<String> = selection.nodes().iter().map(ToString::to_string).collect();
        assert_eq!(
            handles,
            ["$['store']['book'][2]", "$['store']['book'][3]"]
        );
    }

    #[test]
    fn test_single_node_selection() {
        let doc = bookstore();
        let selection = Program::compile("$.store.bicycle")
            .expect("compiles")
            .select(&doc)
            .expect("selects");
        let expected = NodePath::root().child_member("store").child_member("bicycle");
        assert_eq!(selection, Selection::Node(expected.clone()));
        assert_eq!(expected.resolve(&doc), Some(&doc["store"]["bicycle"]));
    }

    #[test]
    fn test_sequence_members_are_bounded() {
        let array = NodePath::root().child_member("arr");
        let sequence = Sequence::Array { path: &array, len: 2 };
        assert_eq!(sequence.member(1), Some(Selection::Node(array.child_index(1))));
        assert_eq!(sequence.member(2), None);

        let members = [Selection::root()];
        let group = Sequence::Group(&members);
        assert_eq!(group.member(0), Some(Selection::root()));
        assert_eq!(group.member(1), None);
    }

    #[test]
    fn test_handle_navigation() {
        let handle = NodePath::root().child_member("store").child_member("book").child_index(1);
        assert_eq!(handle.depth(), 3);
        assert!(!handle.is_root());
        assert_eq!(handle.last(), Some(&PathSegment::Index(1)));
        assert_eq!(handle.segments()[0], PathSegment::Member("store".to_string()));

        let parent = handle.parent().expect("has a parent");
        assert_eq!(parent.to_string(), "$['store']['book']");
        assert!(NodePath::root().is_root());
        assert_eq!(NodePath::root().parent(), None);

        let mut doc = bookstore();
        let node = handle.resolve_mut(&mut doc).expect("resolves");
        node["price"] = json!(1);
        assert_eq!(doc["store"]["book"][1]["price"], json!(1));
    }

    #[test]
    fn test_recompiling_is_pure() {
        let doc = bookstore();
        let path = "$.store.book[?(@.price > 10)].title";
        assert_eq!(lookup(&doc, path), lookup(&doc, path));
    }

    #[test]
    fn test_lookup_does_not_mutate() {
        let doc = bookstore();
        let before = doc.clone();
        let _ = lookup(&doc, "$.store.book[0:2].title");
        assert_eq!(doc, before);
    }
}
