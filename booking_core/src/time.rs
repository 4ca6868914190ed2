use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use thiserror::Error;
use tracing::warn;

/// Sentinel rendered in place of an unparseable instant.
pub const INVALID_DATE: &str = "Invalid Date";

pub const MIN_DURATION_MINUTES: i64 = 30;
pub const MAX_DURATION_MINUTES: i64 = 480;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TimeRangeError {
    #[error("Start time must be before end time")]
    StartNotBeforeEnd,
    #[error("Booking must be at least 30 minutes long")]
    TooShort,
    #[error("Booking cannot exceed 8 hours")]
    TooLong,
}

/// Renders an RFC 3339 instant with a chrono format pattern. Falls back to
/// the `"Invalid Date"` sentinel instead of propagating parse failures.
pub fn format_date(value: &str, pattern: &str) -> String {
    match DateTime::parse_from_rfc3339(value.trim()) {
        Ok(t) => t.with_timezone(&Utc).format(pattern).to_string(),
        Err(e) => {
            warn!(value, error = ?e, "could not parse date for display");
            INVALID_DATE.to_string()
        }
    }
}

pub fn format_date_time(value: &str) -> String {
    format_date(value, "%d/%m/%Y %H:%M")
}

pub fn date_for_input(t: DateTime<Utc>) -> String {
    t.format("%Y-%m-%d").to_string()
}

pub fn time_for_input(t: DateTime<Utc>) -> String {
    t.format("%H:%M").to_string()
}

/// Builds an absolute instant from a `YYYY-MM-DD` calendar date and an
/// `HH:MM` wall time. The combination is always interpreted in UTC.
pub fn combine_date_time(
    date: &str,
    time: &str,
) -> Result<DateTime<Utc>, chrono::format::ParseError> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")?;
    let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")?;
    Ok(date.and_time(time).and_utc())
}

/// A booking must start before it ends and last between 30 minutes and
/// 8 hours inclusive.
pub fn validate_time_range(from: DateTime<Utc>, to: DateTime<Utc>) -> Result<(), TimeRangeError> {
    if from >= to {
        return Err(TimeRangeError::StartNotBeforeEnd);
    }
    let duration = to - from;
    if duration < TimeDelta::minutes(MIN_DURATION_MINUTES) {
        return Err(TimeRangeError::TooShort);
    }
    if duration > TimeDelta::minutes(MAX_DURATION_MINUTES) {
        return Err(TimeRangeError::TooLong);
    }
    Ok(())
}
