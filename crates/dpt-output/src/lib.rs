//! File output for warehouse loads.
//!
//! Serializes a batch of records and their deduced schema to the two-file
//! artifact a load job consumes: newline-delimited JSON for the records
//! (one per line, order preserved) and a pretty-printed JSON schema
//! document, both named from a shared basename with fixed suffixes.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{NDJSON_SUFFIX, SCHEMA_SUFFIX, write_outputs};
