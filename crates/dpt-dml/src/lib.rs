//! BigQuery DML query generation from JSON records.
//!
//! Renders `SELECT`, `INSERT`, and `UPDATE` statements for a fully
//! qualified table from in-memory records: strings are quoted and escaped,
//! RFC 3339 strings render as timestamps, nested mappings become `STRUCT`
//! expressions (dotted paths in `UPDATE` assignments), and arrays become
//! BigQuery array literals.
//!
//! Only generation lives here. Running the queries is the job of whatever
//! warehouse client the calling pipeline holds.

mod error;
mod query;

pub use error::{DmlError, Result};
pub use query::{TableRef, insert_query, select_query, update_query};
