use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory holding a Loglens config plus NDJSON row files, the
/// way a deployment would lay them out. Dropped with the test.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create fixture dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join("loglens.toml")
    }

    pub fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.config_path();
        fs::write(&path, contents).expect("failed to write config fixture");
        path
    }

    /// Writes one NDJSON row file and returns its path.
    pub fn write_rows(&self, file: &str, rows: &[String]) -> PathBuf {
        let path = self.root().join(file);
        let mut contents = rows.join("\n");
        contents.push('\n');
        fs::write(&path, contents).expect("failed to write row fixture");
        path
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

/// One raw NDJSON row in upstream field casing.
pub fn ndjson_row(date: &str, entity: &str, method: &str, status: u16, count: u64) -> String {
    json!({
        "date": date,
        "api_name": entity,
        "method": method,
        "responseStatus": status,
        "count": count,
    })
    .to_string()
}
