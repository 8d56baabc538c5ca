use chrono::NaiveDate;
use serde::Serialize;

/// Per-date totals over a filtered selection of profiles.
///
/// Unlike the per-profile `fail_pct`, this one is floating point and may be
/// NaN when `total == 0` for the day; the rendering side decides how to draw
/// the gap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub success: u64,
    pub fail: u64,
    pub total: u64,
    pub fail_pct: f64,
}

/// Headline totals over an entire filtered selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryTotals {
    pub total_requests: u64,
    pub total_success: u64,
    pub total_fail: u64,
    pub fail_pct: i64,
}
