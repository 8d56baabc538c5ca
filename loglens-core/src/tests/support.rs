use crate::model::StatusProfile;
use crate::source::RawRow;
use crate::taxonomy::StatusTaxonomy;
use chrono::NaiveDate;
use serde_json::json;
use std::collections::BTreeMap;

pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// A raw row the way an upstream source would emit it.
pub fn raw_row(date: &str, entity: &str, method: &str, status: u16, count: u64) -> RawRow {
    json!({
        "date": date,
        "api_name": entity,
        "method": method,
        "responseStatus": status,
        "count": count,
    })
}

/// Source A's taxonomy from the shipped config: four success codes, four
/// failure codes, total = their union.
pub fn wide_taxonomy() -> StatusTaxonomy {
    StatusTaxonomy {
        success_codes: [200, 204, 206, 210].into(),
        failure_codes: [400, 401, 406, 409].into(),
        total_codes: [200, 204, 206, 210, 400, 401, 406, 409].into(),
    }
}

/// Source B's taxonomy: a single success code and an explicit total set.
pub fn narrow_taxonomy() -> StatusTaxonomy {
    StatusTaxonomy {
        success_codes: [200].into(),
        failure_codes: [401, 404].into(),
        total_codes: [200, 401, 404].into(),
    }
}

pub fn profile(
    date_str: &str,
    method: &str,
    category: Option<&str>,
    success: u64,
    failures: u64,
    total: u64,
    fail_pct: i64,
) -> StatusProfile {
    StatusProfile {
        date: date(date_str),
        method: method.to_string(),
        category: category.map(str::to_string),
        name_extract: None,
        counts: BTreeMap::new(),
        success,
        failures,
        total,
        fail_pct,
    }
}
