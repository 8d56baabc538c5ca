use chrono::NaiveDate;
use serde::Serialize;

/// One raw observation after normalization: requests counted for a single
/// (date, endpoint, method, status) combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRow {
    pub date: NaiveDate,

    /// Slash-delimited endpoint path, e.g. "/v1/mobile/search".
    pub entity_id: String,

    pub method: String,

    pub status_code: u16,

    pub count: u64,
}
