//! Date and timestamp helpers shared across the workspace.
//!
//! Callers deal in either preformatted strings or real `chrono` values;
//! [`DateValue`] models that as an explicit sum type instead of overloading.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Default pattern used by [`format_date`].
const DEFAULT_DATE_PATTERN: &str = "%Y-%m-%d";

/// Pattern for [`current_timestamp`], ISO-8601 with microseconds.
const TIMESTAMP_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Errors from date parsing.
#[derive(Debug, Error)]
pub enum TimeError {
    #[error("'{value}' is not an ISO-8601 date or datetime: {source}")]
    Parse {
        value: String,
        source: chrono::ParseError,
    },
}

/// A date-ish input: either an opaque preformatted string or a typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum DateValue {
    /// Already-formatted text, passed through untouched by [`format_date`].
    Text(String),
    /// A calendar date (midnight when a time is needed).
    Date(NaiveDate),
    /// A full date and time.
    Timestamp(NaiveDateTime),
}

impl From<&str> for DateValue {
    fn from(value: &str) -> Self {
        DateValue::Text(value.to_string())
    }
}

impl From<String> for DateValue {
    fn from(value: String) -> Self {
        DateValue::Text(value)
    }
}

impl From<NaiveDate> for DateValue {
    fn from(value: NaiveDate) -> Self {
        DateValue::Date(value)
    }
}

impl From<NaiveDateTime> for DateValue {
    fn from(value: NaiveDateTime) -> Self {
        DateValue::Timestamp(value)
    }
}

impl DateValue {
    /// Resolve to a datetime, parsing text as ISO-8601.
    ///
    /// Accepts a full datetime ("2024-01-10T09:30:00") or a bare date
    /// ("2024-01-10", resolved to midnight).
    fn into_datetime(self) -> Result<NaiveDateTime, TimeError> {
        match self {
            DateValue::Timestamp(dt) => Ok(dt),
            DateValue::Date(d) => Ok(d.and_time(NaiveTime::MIN)),
            DateValue::Text(s) => s
                .parse::<NaiveDateTime>()
                .or_else(|_| s.parse::<NaiveDate>().map(|d| d.and_time(NaiveTime::MIN)))
                .map_err(|source| TimeError::Parse { value: s, source }),
        }
    }
}

/// Current local time as an ISO-8601 string.
pub fn current_timestamp() -> String {
    Local::now().naive_local().format(TIMESTAMP_PATTERN).to_string()
}

/// Format a date-ish value.
///
/// Text passes through unchanged, without reparsing or validation. Typed
/// values format with the given chrono pattern, `%Y-%m-%d` by default.
pub fn format_date(value: impl Into<DateValue>, pattern: Option<&str>) -> String {
    let pattern = pattern.unwrap_or(DEFAULT_DATE_PATTERN);
    match value.into() {
        DateValue::Text(s) => s,
        DateValue::Date(d) => d.format(pattern).to_string(),
        DateValue::Timestamp(dt) => dt.format(pattern).to_string(),
    }
}

/// Whole days from `start` to `end`, negative when `end` precedes `start`.
///
/// Sub-day remainders truncate toward zero, so 23 hours is 0 days.
pub fn days_between(
    start: impl Into<DateValue>,
    end: impl Into<DateValue>,
) -> Result<i64, TimeError> {
    let start = start.into().into_datetime()?;
    let end = end.into().into_datetime()?;
    Ok((end - start).num_days())
}
