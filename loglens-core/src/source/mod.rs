mod json_lines;
mod memory;

pub use json_lines::JsonLinesSource;
pub use memory::MemorySource;

use std::path::PathBuf;
use thiserror::Error;

/// A raw row as the source emits it: field names and casing are whatever the
/// upstream taxonomy uses. The normalizer owns turning this into a `LogRow`,
/// including rejecting values that are not objects at all.
pub type RawRow = serde_json::Value;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read rows from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON on line {line} of {path}: {source}")]
    Json {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl SourceError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}

/// The input interface: one bulk read per invocation, no streaming contract.
/// A read failure is fatal to the invocation.
pub trait RowSource {
    fn read_rows(&mut self) -> Result<Vec<RawRow>, SourceError>;
}
