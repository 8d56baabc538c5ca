use crate::error::SummaryError;
use crate::metrics::floor_pct;
use crate::model::{StatusProfile, SummaryTotals};

/// Reduce an entire filtered selection to headline totals.
///
/// A selection with zero total requests cannot state a fail rate; unlike the
/// per-profile sentinel, that is surfaced to the caller as
/// `DivisionUndefined` rather than masked.
pub fn summarize(profiles: &[StatusProfile]) -> Result<SummaryTotals, SummaryError> {
    let total_requests: u64 = profiles.iter().map(|p| p.total).sum();
    let total_success: u64 = profiles.iter().map(|p| p.success).sum();
    let total_fail: u64 = profiles.iter().map(|p| p.failures).sum();

    let fail_pct =
        floor_pct(total_fail, total_requests).ok_or(SummaryError::DivisionUndefined)?;

    Ok(SummaryTotals {
        total_requests,
        total_success,
        total_fail,
        fail_pct,
    })
}
