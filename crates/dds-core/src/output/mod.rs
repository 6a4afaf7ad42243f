//! Result persistence (CSV / JSON files).
//!
//! Terminal rendering lives in the CLI; this module only writes files.

mod csv;

pub use csv::save_csv;

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Output mode selected with `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Print,
    Csv,
    Json,
}

/// Saves the full record list as pretty-printed JSON.
pub fn save_json<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(records).context("serialize results")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::TextResult;
    use tempfile::tempdir;

    #[test]
    fn json_file_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        let records = vec![TextResult {
            title: "Rust".to_string(),
            href: "https://rust-lang.org".to_string(),
            body: "A language".to_string(),
        }];
        save_json(&path, &records).unwrap();

        let data = std::fs::read_to_string(&path).unwrap();
        let back: Vec<TextResult> = serde_json::from_str(&data).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].href, "https://rust-lang.org");
    }
}
