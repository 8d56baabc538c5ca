use crate::source::{RawRow, RowSource, SourceError};

/// In-memory source, mainly for tests and embedding.
#[derive(Debug, Default)]
pub struct MemorySource {
    rows: Vec<RawRow>,
}

impl MemorySource {
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }
}

impl RowSource for MemorySource {
    fn read_rows(&mut self) -> Result<Vec<RawRow>, SourceError> {
        Ok(std::mem::take(&mut self.rows))
    }
}
