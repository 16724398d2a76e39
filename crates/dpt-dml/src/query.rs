//! DML statement rendering.

use std::fmt;

use chrono::DateTime;
use serde_json::{Map, Value};

use crate::error::{DmlError, Result};

/// Fully qualified BigQuery table reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    /// Cloud project holding the dataset.
    pub project: String,
    /// Dataset holding the table.
    pub dataset: String,
    /// Table name.
    pub table: String,
}

impl TableRef {
    /// Build a reference from its three components.
    pub fn new(
        project: impl Into<String>,
        dataset: impl Into<String>,
        table: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            dataset: dataset.into(),
            table: table.into(),
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.project, self.dataset, self.table)
    }
}

/// Render a `SELECT` statement. Without a selector, selects `*`; the WHERE
/// clause is appended verbatim when given.
pub fn select_query(table: &TableRef, selector: Option<&str>, where_clause: Option<&str>) -> String {
    let selector = selector.unwrap_or("*");
    match where_clause {
        Some(clause) => format!("SELECT {selector} FROM {table} {clause}"),
        None => format!("SELECT {selector} FROM {table}"),
    }
}

/// Render an `INSERT` statement for one record.
///
/// Columns come from the record keys in insertion order; values are
/// rendered by type, with nested mappings as named `STRUCT` expressions.
pub fn insert_query(table: &TableRef, record: &Value) -> Result<String> {
    let Value::Object(entries) = record else {
        return Err(DmlError::NonRecordInput);
    };
    let columns: Vec<&str> = entries.keys().map(String::as_str).collect();
    let values: Vec<String> = entries.values().map(render_value).collect();
    Ok(format!(
        "INSERT `{table}` ({}) VALUES({})",
        columns.join(", "),
        values.join(", ")
    ))
}

/// Render an `UPDATE` statement for one record.
///
/// Nested mappings become dotted assignment paths (`parent.child = ...`);
/// RFC 3339 strings are wrapped in `TIMESTAMP(...)`. The WHERE clause is
/// appended verbatim when given.
pub fn update_query(table: &TableRef, record: &Value, where_clause: Option<&str>) -> Result<String> {
    let Value::Object(entries) = record else {
        return Err(DmlError::NonRecordInput);
    };
    let mut assignments = Vec::new();
    collect_assignments(&mut assignments, None, entries);
    let query = format!("UPDATE {table} SET {}", assignments.join(", "));
    Ok(match where_clause {
        Some(clause) => format!("{query} {clause}"),
        None => query,
    })
}

fn collect_assignments(out: &mut Vec<String>, parent: Option<&str>, entries: &Map<String, Value>) {
    for (key, value) in entries {
        let path = match parent {
            Some(parent) => format!("{parent}.{key}"),
            None => key.clone(),
        };
        match value {
            Value::Object(child) => collect_assignments(out, Some(&path), child),
            Value::String(text) if is_timestamp(text) => {
                out.push(format!("{path} = TIMESTAMP({})", quote_string(text)));
            }
            other => out.push(format!("{path} = {}", render_value(other))),
        }
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => quote_string(text),
        Value::Array(items) => {
            let rendered: Vec<String> = items.iter().map(render_value).collect();
            format!("[{}]", rendered.join(", "))
        }
        Value::Object(entries) => {
            let rendered: Vec<String> = entries
                .iter()
                .map(|(key, child)| format!("{} AS {key}", render_value(child)))
                .collect();
            format!("STRUCT({})", rendered.join(", "))
        }
    }
}

fn quote_string(text: &str) -> String {
    let escaped = text.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

fn is_timestamp(text: &str) -> bool {
    DateTime::parse_from_rfc3339(text).is_ok()
}
