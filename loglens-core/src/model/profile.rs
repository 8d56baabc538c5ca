use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Output of the pivot stage: one row per unique (date, method, entity_id)
/// with a dense status-code column set over the whole batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotRow {
    pub date: NaiveDate,
    pub method: String,
    pub entity_id: String,

    /// status_code -> summed request count, zero-filled for every status
    /// code observed anywhere in the batch.
    pub counts: BTreeMap<u16, u64>,
}

/// A pivot row with derived metrics attached and the entity id decomposed.
///
/// `fail_pct` is `-1` when `total == 0` ("no data" sentinel, distinct from a
/// genuine 0% fail rate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusProfile {
    pub date: NaiveDate,
    pub method: String,

    /// Third path segment of the entity id, lower-cased. Absent when the
    /// path is too short.
    pub category: Option<String>,

    /// Fourth path segment of the entity id, as-is.
    pub name_extract: Option<String>,

    pub counts: BTreeMap<u16, u64>,

    pub success: u64,
    pub failures: u64,
    pub total: u64,
    pub fail_pct: i64,
}
