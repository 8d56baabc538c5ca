use crate::error::SchemaError;
use crate::model::LogRow;
use crate::source::RawRow;
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

// Canonical lowercase field names. Sources disagree on casing (e.g.
// "responseStatus" vs "responsestatus"), so lookup is done over lower-cased
// keys.
const FIELD_DATE: &str = "date";
const FIELD_ENTITY: &str = "api_name";
const FIELD_METHOD: &str = "method";
const FIELD_STATUS: &str = "responsestatus";
const FIELD_COUNT: &str = "count";

/// Canonicalize a batch of raw rows into `LogRow`s.
///
/// No rows are dropped: any structural defect aborts the batch with a
/// `SchemaError`. Row numbers in errors are 1-based.
pub fn normalize_rows(raw: &[RawRow]) -> Result<Vec<LogRow>, SchemaError> {
    let mut rows = Vec::with_capacity(raw.len());

    for (idx, value) in raw.iter().enumerate() {
        let row_no = idx + 1;

        let object = value
            .as_object()
            .ok_or(SchemaError::NotAnObject { row: row_no })?;

        // Case-normalize the keys once per row.
        let fields: BTreeMap<String, &Value> = object
            .iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();

        rows.push(LogRow {
            date: parse_date(&fields, row_no)?,
            entity_id: parse_string(&fields, FIELD_ENTITY, row_no)?,
            method: parse_string(&fields, FIELD_METHOD, row_no)?,
            status_code: parse_status(&fields, row_no)?,
            count: parse_count(&fields, row_no)?,
        });
    }

    debug!(rows = rows.len(), "normalized raw batch");

    Ok(rows)
}

fn require<'a>(
    fields: &'a BTreeMap<String, &Value>,
    field: &'static str,
    row: usize,
) -> Result<&'a Value, SchemaError> {
    fields
        .get(field)
        .copied()
        .ok_or(SchemaError::MissingField { row, field })
}

fn parse_string(
    fields: &BTreeMap<String, &Value>,
    field: &'static str,
    row: usize,
) -> Result<String, SchemaError> {
    match require(fields, field, row)? {
        Value::String(s) if !s.is_empty() => Ok(s.clone()),
        other => Err(SchemaError::invalid_value(row, field, other)),
    }
}

fn parse_date(fields: &BTreeMap<String, &Value>, row: usize) -> Result<NaiveDate, SchemaError> {
    let value = require(fields, FIELD_DATE, row)?;

    let text = value
        .as_str()
        .ok_or_else(|| SchemaError::invalid_value(row, FIELD_DATE, value))?;

    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| SchemaError::invalid_value(row, FIELD_DATE, value))
}

/// Status codes arrive as JSON numbers or numeric strings depending on the
/// source; both are coerced to an integer in u16 range.
fn parse_status(fields: &BTreeMap<String, &Value>, row: usize) -> Result<u16, SchemaError> {
    let value = require(fields, FIELD_STATUS, row)?;

    let code = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    code.and_then(|c| u16::try_from(c).ok())
        .ok_or_else(|| SchemaError::invalid_value(row, FIELD_STATUS, value))
}

fn parse_count(fields: &BTreeMap<String, &Value>, row: usize) -> Result<u64, SchemaError> {
    let value = require(fields, FIELD_COUNT, row)?;

    let Some(n) = value.as_i64() else {
        return Err(SchemaError::invalid_value(row, FIELD_COUNT, value));
    };

    if n < 0 {
        return Err(SchemaError::NegativeCount { row, value: n });
    }

    Ok(n as u64)
}
