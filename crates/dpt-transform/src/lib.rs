//! Tree transforms for loading semi-structured records into a columnar
//! warehouse.
//!
//! This crate provides the two recursive transforms applied to decoded
//! records before load:
//!
//! - **Key normalization** ([`normalize_keys`]): rewrite every mapping key,
//!   at every nesting depth, into a warehouse-safe identifier.
//! - **Empty-value pruning** ([`prune_empty`]): drop mapping entries whose
//!   value is `null`, `[]`, or `{}`, cascading bottom-up so that emptying a
//!   child never leaves an orphaned empty parent.
//!
//! Trees are plain [`serde_json::Value`]s: scalars, arrays, and objects.
//! Both transforms are pure functions over their input - they allocate a new
//! tree and never mutate the argument - and both are idempotent. They are
//! typically composed as `normalize_keys` over raw records followed by
//! `prune_empty` over the normalized result, but neither depends on the
//! other.

mod error;
mod field_name;
mod normalize;
mod prune;

pub use error::{Result, TransformError};
pub use field_name::{
    FALLBACK_FIELD_NAME, MAX_FIELD_NAME_LEN, is_valid_field_name, sanitize_field_name,
    sanitize_field_name_with,
};
pub use normalize::{normalize_keys, normalize_keys_with_limit};
pub use prune::{is_empty_value, prune_empty, prune_empty_with_limit};

/// Nesting depth allowed by [`normalize_keys`] and [`prune_empty`] before
/// they give up with [`TransformError::DepthLimitExceeded`].
///
/// Counts container levels (objects and arrays) from the root. Callers with
/// deeper inputs can raise the limit via the `_with_limit` variants.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Reject containers nested beyond `limit` levels.
pub(crate) fn ensure_depth(depth: usize, limit: usize) -> Result<()> {
    if depth >= limit {
        tracing::warn!(limit, "nesting depth limit exceeded");
        return Err(TransformError::DepthLimitExceeded { limit });
    }
    Ok(())
}
