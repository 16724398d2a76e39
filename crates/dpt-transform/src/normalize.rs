//! Recursive mapping-key normalization.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::field_name::sanitize_field_name;
use crate::{DEFAULT_MAX_DEPTH, ensure_depth};

/// Rewrite every mapping key in `tree`, at every nesting depth, into a
/// warehouse-safe field name.
///
/// Scalars and array structure are left untouched; only object keys change.
/// If two distinct keys sanitize to the same name, the later entry wins -
/// this is observable, documented behavior, not a silent collision.
///
/// Equivalent to [`normalize_keys_with_limit`] with [`DEFAULT_MAX_DEPTH`].
pub fn normalize_keys(tree: &Value) -> Result<Value> {
    normalize_keys_with_limit(tree, DEFAULT_MAX_DEPTH)
}

/// Like [`normalize_keys`], but rejecting containers nested beyond
/// `max_depth` levels with [`crate::TransformError::DepthLimitExceeded`].
pub fn normalize_keys_with_limit(tree: &Value, max_depth: usize) -> Result<Value> {
    normalize_value(tree, 0, max_depth)
}

fn normalize_value(value: &Value, depth: usize, limit: usize) -> Result<Value> {
    match value {
        Value::Object(entries) => {
            ensure_depth(depth, limit)?;
            let mut normalized = Map::with_capacity(entries.len());
            for (key, child) in entries {
                // Last write wins when two keys sanitize to the same name.
                normalized.insert(
                    sanitize_field_name(key),
                    normalize_value(child, depth + 1, limit)?,
                );
            }
            Ok(Value::Object(normalized))
        }
        Value::Array(items) => {
            ensure_depth(depth, limit)?;
            let normalized = items
                .iter()
                .map(|item| normalize_value(item, depth + 1, limit))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Array(normalized))
        }
        scalar => Ok(scalar.clone()),
    }
}
