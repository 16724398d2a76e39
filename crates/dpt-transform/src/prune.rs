//! Bottom-up pruning of empty mapping entries.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::{DEFAULT_MAX_DEPTH, ensure_depth};

/// Recursively drop mapping entries whose value is empty under the
/// warehouse rule: `null`, `[]`, or `{}`.
///
/// The traversal is post-order: each child subtree is fully pruned first,
/// then the now-pruned value is tested, so a container that becomes empty
/// through pruning removes its own entry from the parent in the same pass.
///
/// Only mapping entries are ever removed. Array elements are pruned in
/// place but never dropped - pruning changes object arity, never array
/// length - so a record that empties to `{}` inside a top-level array is
/// retained as `{}`. Dropping whole records is the caller's decision.
///
/// The falsy scalars `0`, `false`, and `""` are not empty and survive
/// unchanged.
///
/// Equivalent to [`prune_empty_with_limit`] with [`DEFAULT_MAX_DEPTH`].
pub fn prune_empty(tree: &Value) -> Result<Value> {
    prune_empty_with_limit(tree, DEFAULT_MAX_DEPTH)
}

/// Like [`prune_empty`], but rejecting containers nested beyond `max_depth`
/// levels with [`crate::TransformError::DepthLimitExceeded`].
pub fn prune_empty_with_limit(tree: &Value, max_depth: usize) -> Result<Value> {
    prune_value(tree, 0, max_depth)
}

/// Whether a value is empty under the warehouse rule.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
        Value::Bool(_) | Value::Number(_) | Value::String(_) => false,
    }
}

fn prune_value(value: &Value, depth: usize, limit: usize) -> Result<Value> {
    match value {
        Value::Object(entries) => {
            ensure_depth(depth, limit)?;
            let mut kept = Map::with_capacity(entries.len());
            for (key, child) in entries {
                let pruned = prune_value(child, depth + 1, limit)?;
                if !is_empty_value(&pruned) {
                    kept.insert(key.clone(), pruned);
                }
            }
            Ok(Value::Object(kept))
        }
        Value::Array(items) => {
            ensure_depth(depth, limit)?;
            let pruned = items
                .iter()
                .map(|item| prune_value(item, depth + 1, limit))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Array(pruned))
        }
        scalar => Ok(scalar.clone()),
    }
}
