//! Schema document types.
//!
//! These serialize to the BigQuery JSON schema shape: an array of
//! `{"name", "type", "mode", "fields"}` objects, with `fields` present only
//! on `RECORD` columns.

use serde::Serialize;

/// BigQuery column data types deducible from JSON values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldType {
    Boolean,
    Integer,
    Float,
    Timestamp,
    Date,
    String,
    Record,
}

/// BigQuery column modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldMode {
    Nullable,
    Required,
    Repeated,
}

/// One column in a schema document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaField {
    /// Column name, taken verbatim from the record key.
    pub name: String,
    /// Deduced column type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Deduced column mode.
    pub mode: FieldMode,
    /// Child columns; populated only for [`FieldType::Record`].
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<SchemaField>,
}

/// A full schema: the ordered list of top-level columns.
pub type SchemaDocument = Vec<SchemaField>;
