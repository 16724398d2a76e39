//! Property tests for the transform invariants.

use proptest::prelude::*;
use serde_json::{Map, Value};

use dpt_transform::{is_empty_value, is_valid_field_name, normalize_keys, prune_empty};

/// Arbitrary trees with keys drawn from printable ASCII, so both valid and
/// invalid field names show up.
fn arb_tree() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[ -~]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::vec(("[ -~]{0,8}", inner), 0..5).prop_map(|entries| {
                let mut map = Map::new();
                for (key, value) in entries {
                    map.insert(key, value);
                }
                Value::Object(map)
            }),
        ]
    })
}

fn all_keys_valid(tree: &Value) -> bool {
    match tree {
        Value::Object(entries) => entries
            .iter()
            .all(|(key, value)| is_valid_field_name(key) && all_keys_valid(value)),
        Value::Array(items) => items.iter().all(all_keys_valid),
        _ => true,
    }
}

fn no_empty_entries(tree: &Value) -> bool {
    match tree {
        Value::Object(entries) => entries
            .values()
            .all(|value| !is_empty_value(value) && no_empty_entries(value)),
        Value::Array(items) => items.iter().all(no_empty_entries),
        _ => true,
    }
}

fn array_lengths_match(before: &Value, after: &Value) -> bool {
    match (before, after) {
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| array_lengths_match(x, y))
        }
        (Value::Object(a), Value::Object(b)) => b
            .iter()
            .all(|(key, value)| a.get(key).is_some_and(|orig| array_lengths_match(orig, value))),
        _ => true,
    }
}

proptest! {
    #[test]
    fn normalize_keys_is_idempotent(tree in arb_tree()) {
        let once = normalize_keys(&tree).unwrap();
        let twice = normalize_keys(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalize_keys_yields_valid_field_names(tree in arb_tree()) {
        let normalized = normalize_keys(&tree).unwrap();
        prop_assert!(all_keys_valid(&normalized));
    }

    #[test]
    fn prune_empty_is_idempotent(tree in arb_tree()) {
        let once = prune_empty(&tree).unwrap();
        let twice = prune_empty(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prune_empty_leaves_no_empty_entries(tree in arb_tree()) {
        let pruned = prune_empty(&tree).unwrap();
        prop_assert!(no_empty_entries(&pruned));
    }

    #[test]
    fn prune_empty_preserves_array_lengths(tree in arb_tree()) {
        let pruned = prune_empty(&tree).unwrap();
        prop_assert!(array_lengths_match(&tree, &pruned));
    }

    #[test]
    fn transforms_compose(tree in arb_tree()) {
        // The pipeline order: normalize first, then prune. The composed
        // result must itself satisfy both invariants.
        let out = prune_empty(&normalize_keys(&tree).unwrap()).unwrap();
        prop_assert!(all_keys_valid(&out));
        prop_assert!(no_empty_entries(&out));
    }
}
