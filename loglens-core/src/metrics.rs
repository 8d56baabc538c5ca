use crate::taxonomy::StatusTaxonomy;
use std::collections::{BTreeMap, BTreeSet};

/// Sentinel for "fail rate undefined due to zero volume". Distinct from a
/// genuine 0% fail rate, and deliberately not NaN so it survives integer
/// columns and chart axes.
pub const FAIL_PCT_UNDEFINED: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedMetrics {
    pub success: u64,
    pub failures: u64,
    pub total: u64,
    pub fail_pct: i64,
}

/// Compute per-profile metrics under one source's taxonomy.
///
/// Codes outside `total_codes` are silently excluded from the denominator;
/// the taxonomy is the single authority on what counts.
pub fn derive_metrics(counts: &BTreeMap<u16, u64>, taxonomy: &StatusTaxonomy) -> DerivedMetrics {
    let success = sum_codes(counts, &taxonomy.success_codes);
    let failures = sum_codes(counts, &taxonomy.failure_codes);
    let total = sum_codes(counts, &taxonomy.total_codes);

    DerivedMetrics {
        success,
        failures,
        total,
        fail_pct: floor_pct(failures, total).unwrap_or(FAIL_PCT_UNDEFINED),
    }
}

fn sum_codes(counts: &BTreeMap<u16, u64>, codes: &BTreeSet<u16>) -> u64 {
    codes.iter().filter_map(|code| counts.get(code)).sum()
}

/// Integer-truncated percentage, `None` when the division is undefined.
///
/// Truncation (floor), not rounding: 1/7 of requests failing reports 14, not
/// 15. The non-finite check cannot fire after the zero guard but stays as a
/// backstop so a sentinel, never NaN, reaches the caller.
pub(crate) fn floor_pct(numer: u64, denom: u64) -> Option<i64> {
    if denom == 0 {
        return None;
    }

    let pct = (100.0 * numer as f64) / denom as f64;
    if !pct.is_finite() {
        return None;
    }

    Some(pct.floor() as i64)
}
