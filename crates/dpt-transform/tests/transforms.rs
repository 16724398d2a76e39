//! Tests for key normalization and empty-value pruning.

use serde_json::json;

use dpt_transform::{
    TransformError, normalize_keys, normalize_keys_with_limit, prune_empty, prune_empty_with_limit,
};

#[test]
fn normalize_rewrites_keys_at_every_depth() {
    let tree = json!({
        "top-level": {
            "nested key": [{"deep.key": 1}, "scalar"],
        },
    });
    let normalized = normalize_keys(&tree).unwrap();
    assert_eq!(
        normalized,
        json!({
            "top_level": {
                "nested_key": [{"deep_key": 1}, "scalar"],
            },
        })
    );
}

#[test]
fn normalize_leaves_non_mapping_trees_unchanged() {
    for tree in [json!(null), json!(42), json!("text"), json!([1, "a", true])] {
        assert_eq!(normalize_keys(&tree).unwrap(), tree);
    }
}

#[test]
fn normalize_prefixes_leading_digit_keys() {
    let normalized = normalize_keys(&json!({"1field": "x"})).unwrap();
    assert_eq!(normalized, json!({"_1field": "x"}));
}

#[test]
fn normalize_collision_is_last_write_wins() {
    let normalized = normalize_keys(&json!({"a-b": 1, "a_b": 2})).unwrap();
    assert_eq!(normalized, json!({"a_b": 2}));
}

#[test]
fn normalize_does_not_alter_values() {
    let tree = json!({"bad key": {"inner": [null, 0, false, ""]}});
    let normalized = normalize_keys(&tree).unwrap();
    assert_eq!(normalized, json!({"bad_key": {"inner": [null, 0, false, ""]}}));
}

#[test]
fn normalize_rejects_excessive_nesting() {
    let tree = (0..6).fold(json!(1), |acc, _| json!({"k": acc}));
    assert_eq!(
        normalize_keys_with_limit(&tree, 3),
        Err(TransformError::DepthLimitExceeded { limit: 3 })
    );
    assert!(normalize_keys_with_limit(&tree, 16).is_ok());
}

#[test]
fn prune_drops_null_and_empty_containers() {
    let tree = json!({"a": null, "b": [], "c": {}, "d": 1});
    assert_eq!(prune_empty(&tree).unwrap(), json!({"d": 1}));
}

#[test]
fn prune_keeps_falsy_scalars() {
    let tree = json!({"a": 0, "b": false, "c": ""});
    assert_eq!(prune_empty(&tree).unwrap(), tree);
}

#[test]
fn prune_cascades_bottom_up() {
    assert_eq!(prune_empty(&json!({"a": {"b": []}})).unwrap(), json!({}));
    assert_eq!(
        prune_empty(&json!({"a": {"b": {"c": null}}, "keep": 1})).unwrap(),
        json!({"keep": 1})
    );
}

#[test]
fn prune_never_changes_sequence_length() {
    let tree = json!([{}, {"x": null}, {"y": 1}]);
    assert_eq!(prune_empty(&tree).unwrap(), json!([{}, {}, {"y": 1}]));

    // Empty and null elements stay in place inside arrays.
    let tree = json!({"a": [null, [], {}, 1]});
    assert_eq!(prune_empty(&tree).unwrap(), json!({"a": [null, [], {}, 1]}));
}

#[test]
fn prune_leaves_scalar_roots_unchanged() {
    for tree in [json!(null), json!(0), json!(""), json!([])] {
        assert_eq!(prune_empty(&tree).unwrap(), tree);
    }
}

#[test]
fn prune_rejects_excessive_nesting() {
    let tree = (0..6).fold(json!([]), |acc, _| json!([acc]));
    assert_eq!(
        prune_empty_with_limit(&tree, 3),
        Err(TransformError::DepthLimitExceeded { limit: 3 })
    );
}

#[test]
fn normalize_then_prune_end_to_end() {
    let records = json!([
        {"key": "value", "another_key": []},
        {"key": "value", "another_key": "x"},
    ]);
    let normalized = normalize_keys(&records).unwrap();
    assert_eq!(normalized, records); // keys already valid
    let pruned = prune_empty(&normalized).unwrap();
    assert_eq!(
        pruned,
        json!([
            {"key": "value"},
            {"key": "value", "another_key": "x"},
        ])
    );
}
