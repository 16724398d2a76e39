//! Schema deduction options.

/// Named options controlling schema deduction.
///
/// The defaults match the upstream generator this adapter replaces:
/// everything off, progress logged every 500 records.
#[derive(Debug, Clone)]
pub struct SchemaOptions {
    /// Upgrade fields that are present and non-null in every record from
    /// `NULLABLE` to `REQUIRED`.
    pub infer_mode: bool,
    /// Keep fields whose value is only ever `null` (emitted as a `NULLABLE`
    /// `STRING`). When off, such fields are dropped from the schema.
    pub keep_nulls: bool,
    /// Treat quoted numbers (`"42"`) as strings instead of inferring
    /// `INTEGER`/`FLOAT`. Timestamp and date detection is unaffected.
    pub quoted_values_are_strings: bool,
    /// Emit a `debug`-level progress line every this many records.
    /// Zero disables progress logging.
    pub debugging_interval: usize,
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self {
            infer_mode: false,
            keep_nulls: false,
            quoted_values_are_strings: false,
            debugging_interval: 500,
        }
    }
}
