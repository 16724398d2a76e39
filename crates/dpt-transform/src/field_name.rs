//! Warehouse field name sanitization.
//!
//! Column names must contain only letters, digits, or underscores, must not
//! start with a digit, and are capped at [`MAX_FIELD_NAME_LEN`] characters.

/// Maximum length of a warehouse field name.
pub const MAX_FIELD_NAME_LEN: usize = 128;

/// Placeholder used when a key sanitizes to the empty string.
pub const FALLBACK_FIELD_NAME: &str = "_field";

/// Sanitize a raw string into a valid warehouse field name.
///
/// Equivalent to [`sanitize_field_name_with`] with the default
/// [`MAX_FIELD_NAME_LEN`] cap.
pub fn sanitize_field_name(raw: &str) -> String {
    sanitize_field_name_with(raw, MAX_FIELD_NAME_LEN)
}

/// Sanitize a raw string into a valid warehouse field name, capped at
/// `max_len` characters.
///
/// The rewrite is applied in a fixed order:
///
/// 1. every character outside `[A-Za-z0-9_]` becomes `_` (one underscore
///    per character, no collapsing);
/// 2. a leading digit gets a `_` prefix;
/// 3. an empty input falls back to [`FALLBACK_FIELD_NAME`];
/// 4. the result is truncated to `max_len` - truncation runs last, after
///    the digit prefix.
///
/// The function is total and idempotent: every input has a valid sanitized
/// form, and sanitizing an already-sanitized name returns it unchanged.
pub fn sanitize_field_name_with(raw: &str, max_len: usize) -> String {
    let mut safe: String = raw
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() || ch == '_' { ch } else { '_' })
        .collect();

    if safe.is_empty() {
        safe.push_str(FALLBACK_FIELD_NAME);
    } else if safe.as_bytes()[0].is_ascii_digit() {
        safe.insert(0, '_');
    }

    // All-ASCII at this point, so byte truncation is char truncation.
    safe.truncate(max_len);
    safe
}

/// Whether `name` already satisfies the warehouse field name rule
/// (`^[A-Za-z_][A-Za-z0-9_]*$`, at most [`MAX_FIELD_NAME_LEN`] characters).
pub fn is_valid_field_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    name.len() <= MAX_FIELD_NAME_LEN
        && (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}
