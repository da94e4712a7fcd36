//! Property-based tests for path resolution.

use super::resolver::PathResolver;
use super::types::{Delimiter, Depth, PathExpr};
use crate::accessor::Accessor;
use proptest::prelude::*;
use serde_json::{json, Value};

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

// Segments that are either plain keys or small indices.
fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![key_strategy(), (0usize..4).prop_map(|i| i.to_string())]
}

fn json_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z]{0,8}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map(key_strategy(), inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

// Walk `doc` following `choices`, returning the segments of an existing path.
fn existing_path(doc: &Value, choices: &[usize]) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = doc;
    for choice in choices {
        match current {
            Value::Object(map) if !map.is_empty() => {
                let (key, child) = map.iter().nth(choice % map.len()).unwrap();
                segments.push(key.clone());
                current = child;
            }
            Value::Array(items) if !items.is_empty() => {
                let idx = choice % items.len();
                segments.push(idx.to_string());
                current = &items[idx];
            }
            _ => break,
        }
    }
    segments
}

fn manual_walk<'v>(doc: &'v Value, segments: &[String]) -> &'v Value {
    segments.iter().fold(doc, |current, segment| match current {
        Value::Array(items) => &items[segment.parse::<usize>().unwrap()],
        _ => &current[segment.as_str()],
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Resolving an existing path lands on the same value as walking by hand.
    #[test]
    fn resolve_matches_manual_walk(
        doc in json_strategy(),
        choices in prop::collection::vec(any::<usize>(), 0..6)
    ) {
        let segments = existing_path(&doc, &choices);
        let path = PathExpr::from_segments(segments.clone());

        let found = PathResolver::new().resolve(&doc, &path, Depth::Full).unwrap();
        prop_assert_eq!(found, Some(manual_walk(&doc, &segments)));
    }

    // Reading never changes the root.
    #[test]
    fn find_does_not_mutate(
        doc in json_strategy(),
        segments in prop::collection::vec(segment_strategy(), 0..5)
    ) {
        let accessor = Accessor::new(doc.clone());
        let _ = accessor.find(&segments.join("."));
        prop_assert_eq!(accessor.root(), &doc);
    }

    // A write into an empty mapping can always be read back.
    #[test]
    fn update_then_find_returns_value(
        segments in prop::collection::vec(segment_strategy(), 1..6),
        value in json_strategy()
    ) {
        let path = segments.join(".");
        let mut accessor = Accessor::new(json!({}));

        // A leading index segment against the root mapping is just a key.
        accessor.update(&path, value.clone()).unwrap();
        prop_assert_eq!(accessor.find(&path).unwrap(), Some(&value));
    }

    // Repeating an identical write leaves the same root.
    #[test]
    fn update_is_idempotent(
        segments in prop::collection::vec(segment_strategy(), 1..6),
        value in json_strategy()
    ) {
        let path = segments.join(".");
        let mut accessor = Accessor::new(json!({}));

        accessor.update(&path, value.clone()).unwrap();
        let once = accessor.root().clone();
        accessor.update(&path, value).unwrap();
        prop_assert_eq!(accessor.root(), &once);
    }

    // Parsing and joining with the same delimiter is lossless for non-empty input.
    #[test]
    fn parse_join_roundtrip(segments in prop::collection::vec(key_strategy(), 1..6)) {
        let delimiter = Delimiter::default();
        let input = segments.join(".");
        prop_assert_eq!(PathExpr::parse(&input, &delimiter).join(&delimiter), input);
    }
}
