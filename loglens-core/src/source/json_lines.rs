use crate::source::{RawRow, RowSource, SourceError};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

/// NDJSON file source: one JSON object per line, blank lines skipped.
#[derive(Debug)]
pub struct JsonLinesSource {
    path: PathBuf,
}

impl JsonLinesSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RowSource for JsonLinesSource {
    fn read_rows(&mut self) -> Result<Vec<RawRow>, SourceError> {
        let file = File::open(&self.path).map_err(|e| SourceError::read(&self.path, e))?;
        let reader = BufReader::new(file);

        let mut rows = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| SourceError::read(&self.path, e))?;
            if line.trim().is_empty() {
                continue;
            }

            let value: Value =
                serde_json::from_str(&line).map_err(|source| SourceError::Json {
                    path: self.path.clone(),
                    line: idx + 1,
                    source,
                })?;

            // Non-object lines pass through here; the normalizer rejects
            // them with a row number like any other structural defect.
            rows.push(value);
        }

        Ok(rows)
    }
}
