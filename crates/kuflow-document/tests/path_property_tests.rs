//! Property tests for dotted paths and write/read agreement

use kuflow_document::*;
use proptest::prelude::*;
use serde_json::{json, Value};

/// Raw key candidates, including ones no dotted path can express
fn raw_key() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_ -]{0,8}",
        "[0-9]{1,4}",
        "[a-z0-9]{0,3}\\.[a-z0-9]{0,3}",
        Just(String::new()),
    ]
}

#[derive(Debug)]
enum Step {
    Key(String),
    Index(usize),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        raw_key().prop_map(Step::Key),
        (0usize..1000).prop_map(Step::Index),
    ]
}

fn is_expressible(key: &str) -> bool {
    !key.is_empty() && !key.contains('.') && !key.bytes().all(|b| b.is_ascii_digit())
}

fn key_path() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-z0-9_]{0,6}", 1..5)
}

proptest! {
    #[test]
    fn prop_path_display_parse_round_trip(
        first in raw_key(),
        rest in prop::collection::vec(step(), 0..8),
    ) {
        let mut expressible = is_expressible(&first);
        let mut built = Path::from_key(first);
        for step in rest {
            built = built.and_then(|path| match step {
                Step::Key(key) => {
                    expressible &= is_expressible(&key);
                    path.key(key)
                }
                Step::Index(index) => Ok(path.index(index)),
            });
        }

        match built {
            Ok(path) => {
                prop_assert!(expressible);
                let parsed: Path = path.to_string().parse().unwrap();
                prop_assert_eq!(parsed, path);
            }
            Err(err) => {
                prop_assert!(!expressible);
                prop_assert!(matches!(err, DocumentError::InvalidPath { .. }), "expected InvalidPath, got {:?}", err);
            }
        }
    }

    #[test]
    fn prop_set_then_get(keys in key_path(), text in ".*") {
        let path = keys.join(".");
        let mut doc = json!({});
        set(&mut doc, path.as_str(), text.as_str()).unwrap();
        prop_assert_eq!(get_string(&doc, path.as_str()).unwrap(), text);
    }

    #[test]
    fn prop_set_then_delete_leaves_empty_document(keys in key_path(), n in any::<i64>()) {
        let path = keys.join(".");
        let mut doc = json!({});
        set(&mut doc, path.as_str(), n).unwrap();
        delete(&mut doc, path.as_str()).unwrap();
        prop_assert_eq!(doc, json!({}));
    }

    #[test]
    fn prop_delete_missing_is_noop(keys in key_path()) {
        let original = json!({"other": {"value": [1, 2, 3]}});
        let mut doc = original.clone();
        let path = format!("missing.{}", keys.join("."));
        delete(&mut doc, path.as_str()).unwrap();
        prop_assert_eq!(doc, original);
    }

    #[test]
    fn prop_reads_never_panic(path in "[a-z0-9.]{0,20}") {
        let doc: Value = kuflow_test_utils::sample_document();
        let _ = find::<String>(&doc, path.as_str());
        let _ = find_list::<bool>(&doc, path.as_str());
    }
}
