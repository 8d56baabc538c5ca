mod fixtures;

pub use fixtures::{Fixture, ndjson_row};
