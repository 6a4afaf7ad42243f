//! Minimal CSV writer for result records.
//!
//! Header row from the first record's field names, one row per record,
//! RFC-4180-style quoting only where a field needs it.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::search::Record;

pub fn save_csv<T: Record>(path: &Path, records: &[T]) -> Result<()> {
    let mut out = String::new();
    if let Some(first) = records.first() {
        let header: Vec<String> = first
            .fields()
            .iter()
            .map(|(name, _)| quote_field(name))
            .collect();
        out.push_str(&header.join(","));
        out.push('\n');

        for record in records {
            let row: Vec<String> = record
                .fields()
                .iter()
                .map(|(_, value)| quote_field(value))
                .collect();
            out.push_str(&row.join(","));
            out.push('\n');
        }
    }
    fs::write(path, out).with_context(|| format!("write {}", path.display()))
}

fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
