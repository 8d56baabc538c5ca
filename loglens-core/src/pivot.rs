use crate::model::{LogRow, PivotRow};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Group rows by (date, method, entity_id) and spread status codes into a
/// dense wide profile.
///
/// The column set is the union of every status code observed anywhere in the
/// batch, zero-filled per group, so downstream taxonomy lookups never miss a
/// key. Output order is (date, method, entity_id) ascending; group iteration
/// order never leaks into results.
pub fn build_pivot(rows: &[LogRow]) -> Vec<PivotRow> {
    let mut universe: BTreeSet<u16> = BTreeSet::new();
    let mut groups: BTreeMap<(NaiveDate, String, String), BTreeMap<u16, u64>> = BTreeMap::new();

    for row in rows {
        universe.insert(row.status_code);

        let key = (row.date, row.method.clone(), row.entity_id.clone());
        let counts = groups.entry(key).or_default();
        *counts.entry(row.status_code).or_insert(0) += row.count;
    }

    debug!(
        groups = groups.len(),
        status_codes = universe.len(),
        "built status pivot"
    );

    groups
        .into_iter()
        .map(|((date, method, entity_id), observed)| {
            let counts = universe
                .iter()
                .map(|code| (*code, observed.get(code).copied().unwrap_or(0)))
                .collect();

            PivotRow {
                date,
                method,
                entity_id,
                counts,
            }
        })
        .collect()
}
