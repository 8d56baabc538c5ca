use crate::model::{DailyPoint, StatusProfile};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Collapse a filtered selection into one point per date, summing the
/// derived success/fail/total columns.
///
/// The per-date fail rate is recomputed from the sums (never averaged from
/// per-profile percentages) and stays floating point: a zero-volume date
/// yields NaN here, unlike the per-profile `-1` sentinel. The renderer owns
/// the gap. Output is date-ascending.
pub fn daily_series(profiles: &[StatusProfile]) -> Vec<DailyPoint> {
    let mut days: BTreeMap<NaiveDate, (u64, u64, u64)> = BTreeMap::new();

    for profile in profiles {
        let entry = days.entry(profile.date).or_insert((0, 0, 0));
        entry.0 += profile.success;
        entry.1 += profile.failures;
        entry.2 += profile.total;
    }

    days.into_iter()
        .map(|(date, (success, fail, total))| DailyPoint {
            date,
            success,
            fail,
            total,
            fail_pct: 100.0 * fail as f64 / total as f64,
        })
        .collect()
}
