//! Schema deduction engine.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use serde_json::Value;

use crate::error::{Result, SchemaError};
use crate::options::SchemaOptions;
use crate::types::{FieldMode, FieldType, SchemaDocument, SchemaField};

/// Deduce a BigQuery-style schema from a batch of records.
///
/// Every record must be a JSON object; anything else fails with
/// [`SchemaError::NonRecordInput`]. Types observed for the same field across
/// records are widened: `INTEGER` + `FLOAT` gives `FLOAT`, any other
/// disagreement gives `STRING`. Output fields are sorted by name at every
/// nesting level so the document is deterministic regardless of key order
/// in the input.
pub fn infer_schema(records: &[Value], options: &SchemaOptions) -> Result<SchemaDocument> {
    let mut root: BTreeMap<String, FieldStat> = BTreeMap::new();

    for (index, record) in records.iter().enumerate() {
        let Value::Object(entries) = record else {
            return Err(SchemaError::NonRecordInput { index });
        };
        for (key, value) in entries {
            observe(root.entry(key.clone()).or_default(), value, options);
        }
        if options.debugging_interval > 0 && (index + 1) % options.debugging_interval == 0 {
            tracing::debug!(records = index + 1, "schema deduction progress");
        }
    }

    Ok(flatten(&root, records.len(), options))
}

/// Accumulated observations for a single field across records.
#[derive(Debug, Default)]
struct FieldStat {
    /// Widened type of all non-null values seen so far; `None` until a
    /// typed value shows up.
    field_type: Option<FieldType>,
    /// Any array value was seen, making the field `REPEATED`.
    repeated: bool,
    /// An explicit `null` was seen.
    saw_null: bool,
    /// The field held something BigQuery cannot represent (nested arrays);
    /// it degrades to `STRING`.
    degraded: bool,
    /// Observations with a usable (non-null) value.
    non_null: usize,
    /// Observations where the value was an object, the denominator for
    /// `REQUIRED` inference on child fields.
    object_count: usize,
    /// Child field observations for object values.
    children: BTreeMap<String, FieldStat>,
}

impl FieldStat {
    fn widen(&mut self, observed: FieldType) {
        self.field_type = Some(match self.field_type {
            None => observed,
            Some(current) if current == observed => current,
            Some(FieldType::Integer) if observed == FieldType::Float => FieldType::Float,
            Some(FieldType::Float) if observed == FieldType::Integer => FieldType::Float,
            Some(_) => FieldType::String,
        });
    }
}

fn observe(stat: &mut FieldStat, value: &Value, options: &SchemaOptions) {
    match value {
        Value::Null => stat.saw_null = true,
        Value::Bool(_) => {
            stat.non_null += 1;
            stat.widen(FieldType::Boolean);
        }
        Value::Number(number) => {
            stat.non_null += 1;
            let observed = if number.is_i64() || number.is_u64() {
                FieldType::Integer
            } else {
                FieldType::Float
            };
            stat.widen(observed);
        }
        Value::String(text) => {
            stat.non_null += 1;
            stat.widen(classify_string(text, options));
        }
        Value::Array(items) => {
            stat.non_null += 1;
            stat.repeated = true;
            for item in items {
                observe_element(stat, item, options);
            }
        }
        Value::Object(entries) => {
            stat.non_null += 1;
            stat.object_count += 1;
            stat.widen(FieldType::Record);
            for (key, child) in entries {
                observe(stat.children.entry(key.clone()).or_default(), child, options);
            }
        }
    }
}

/// Observe one element of an array value. Null elements carry no type
/// information; nested arrays have no BigQuery representation and degrade
/// the whole field to `STRING`.
fn observe_element(stat: &mut FieldStat, item: &Value, options: &SchemaOptions) {
    match item {
        Value::Null => {}
        Value::Array(_) => {
            if !stat.degraded {
                tracing::warn!("array of arrays has no BigQuery representation, using STRING");
            }
            stat.degraded = true;
        }
        Value::Object(entries) => {
            stat.object_count += 1;
            stat.widen(FieldType::Record);
            for (key, child) in entries {
                observe(stat.children.entry(key.clone()).or_default(), child, options);
            }
        }
        Value::Bool(_) => stat.widen(FieldType::Boolean),
        Value::Number(number) => {
            let observed = if number.is_i64() || number.is_u64() {
                FieldType::Integer
            } else {
                FieldType::Float
            };
            stat.widen(observed);
        }
        Value::String(text) => stat.widen(classify_string(text, options)),
    }
}

fn classify_string(text: &str, options: &SchemaOptions) -> FieldType {
    if DateTime::parse_from_rfc3339(text).is_ok() {
        return FieldType::Timestamp;
    }
    if NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok() {
        return FieldType::Date;
    }
    if !options.quoted_values_are_strings && looks_numeric(text) {
        if text.parse::<i64>().is_ok() {
            return FieldType::Integer;
        }
        if text.parse::<f64>().is_ok() {
            return FieldType::Float;
        }
    }
    FieldType::String
}

/// Cheap shape check so words like "infinity" never parse as FLOAT.
fn looks_numeric(text: &str) -> bool {
    !text.is_empty()
        && text.chars().any(|ch| ch.is_ascii_digit())
        && text
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '+' | '-' | '.' | 'e' | 'E'))
}

fn flatten(
    stats: &BTreeMap<String, FieldStat>,
    total: usize,
    options: &SchemaOptions,
) -> Vec<SchemaField> {
    let mut fields = Vec::new();
    for (name, stat) in stats {
        let field_type = if stat.degraded {
            FieldType::String
        } else {
            match stat.field_type {
                Some(observed) => observed,
                // Only ever null (or an always-empty array).
                None if options.keep_nulls => FieldType::String,
                None => continue,
            }
        };

        let nested = if field_type == FieldType::Record {
            let children = flatten(&stat.children, stat.object_count, options);
            if children.is_empty() {
                // BigQuery rejects RECORD columns with no children.
                continue;
            }
            children
        } else {
            Vec::new()
        };

        let mode = if stat.repeated {
            FieldMode::Repeated
        } else if options.infer_mode && total > 0 && !stat.saw_null && stat.non_null == total {
            FieldMode::Required
        } else {
            FieldMode::Nullable
        };

        fields.push(SchemaField {
            name: name.clone(),
            field_type,
            mode,
            fields: nested,
        });
    }
    fields
}
