//! NDJSON and schema file writing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use dpt_schema::SchemaDocument;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

/// Suffix appended to the basename for the records file.
pub const NDJSON_SUFFIX: &str = "ndjson";

/// Suffix appended to the basename for the schema file.
pub const SCHEMA_SUFFIX: &str = "bqschema.json";

/// Write `records` as newline-delimited JSON and `schema` as pretty JSON,
/// both named from `basename` with fixed suffixes.
///
/// Records are serialized independently, one per line, in input order. The
/// schema document is written with two-space indentation and recursively
/// sorted keys. Returns the paths of the two files written.
pub fn write_outputs(
    records: &[Value],
    basename: &Path,
    schema: &SchemaDocument,
) -> Result<(PathBuf, PathBuf)> {
    let ndjson_path = path_with_suffix(basename, NDJSON_SUFFIX);
    let schema_path = path_with_suffix(basename, SCHEMA_SUFFIX);

    let mut writer = BufWriter::new(File::create(&ndjson_path)?);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    let document = sort_keys(serde_json::to_value(schema)?);
    let mut writer = BufWriter::new(File::create(&schema_path)?);
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writer.flush()?;

    debug!(
        records = records.len(),
        ndjson = %ndjson_path.display(),
        schema = %schema_path.display(),
        "wrote output file pair"
    );
    Ok((ndjson_path, schema_path))
}

/// `basename` plus `.suffix`, appended to the full name rather than
/// replacing an existing extension.
fn path_with_suffix(basename: &Path, suffix: &str) -> PathBuf {
    let mut name = basename.as_os_str().to_os_string();
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

/// Recursively sort object keys so the schema file is byte-stable.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(entries) => {
            let mut sorted: Vec<(String, Value)> = entries
                .into_iter()
                .map(|(key, child)| (key, sort_keys(child)))
                .collect();
            sorted.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(sorted.into_iter().collect())
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        scalar => scalar,
    }
}
