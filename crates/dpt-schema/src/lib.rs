//! BigQuery schema deduction from in-memory JSON records.
//!
//! Given a batch of records (JSON objects), [`infer_schema`] deduces a
//! BigQuery-style column schema: scalar types are classified per value,
//! widened across records (`INTEGER` + `FLOAT` = `FLOAT`, any other
//! conflict = `STRING`), arrays become `REPEATED` fields, and nested
//! objects become `RECORD` fields with recursively deduced children.
//!
//! The behavior knobs - [`SchemaOptions`] - mirror the option surface of
//! the upstream schema generator this adapter stands in for: mode
//! inference, null retention, quoted-value typing, and a progress-logging
//! interval. Callers that only forward options can construct
//! `SchemaOptions::default()` and pass it through untouched.

mod error;
mod generator;
mod options;
mod types;

pub use error::{Result, SchemaError};
pub use generator::infer_schema;
pub use options::SchemaOptions;
pub use types::{FieldMode, FieldType, SchemaDocument, SchemaField};
