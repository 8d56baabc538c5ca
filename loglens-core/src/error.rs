use thiserror::Error;

/// Structural problems in a raw row. Fatal to the whole invocation: no
/// partial results are produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("row {row}: expected a JSON object")]
    NotAnObject { row: usize },

    #[error("row {row}: missing required field `{field}`")]
    MissingField { row: usize, field: &'static str },

    #[error("row {row}: field `{field}` has invalid value {value}")]
    InvalidValue {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("row {row}: count must be non-negative, got {value}")]
    NegativeCount { row: usize, value: i64 },
}

impl SchemaError {
    pub fn missing_field(row: usize, field: &'static str) -> Self {
        Self::MissingField { row, field }
    }

    pub fn invalid_value(row: usize, field: &'static str, value: impl ToString) -> Self {
        Self::InvalidValue {
            row,
            field,
            value: value.to_string(),
        }
    }
}

/// Errors from the summary aggregator.
///
/// The summary level surfaces a zero denominator as a hard error, unlike the
/// per-profile `-1` sentinel and the per-day NaN. The asymmetry is part of
/// the contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummaryError {
    #[error("fail rate is undefined: selection contains zero total requests")]
    DivisionUndefined,
}
