//! Timestamp parsing, calendar keys and day arithmetic.
//!
//! # Invariants
//! - `month` is 0-based (`0 = Jan`).
//! - `day_key` is always canonical `YYYY-MM-DD`.
//! - Day differences use floor division, so `[now, now + 1d)` is day `0`.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use thiserror::Error;

/// Milliseconds in one calendar day.
pub const MILLIS_PER_DAY: i64 = 86_400_000;

const MONTH_SHORT_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const NAIVE_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Error raised by date operations on a single input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateKeyError {
    #[error("invalid timestamp input: `{input}`")]
    InvalidInput { input: String },
}

/// Calendar position of an instant in the configured offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey {
    pub year: i32,
    /// 0-based month.
    pub month: u32,
    /// 1-based day of month.
    pub day: u32,
}

impl DateKey {
    /// Canonical `YYYY-MM-DD` form.
    pub fn day_key(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}

/// Parses one wire timestamp into a UTC instant.
///
/// Accepts RFC 3339 (`2025-01-15T10:00:00.000Z`, `...+02:00`), naive
/// date-times (read as UTC) and bare dates (UTC midnight).
///
/// # Errors
/// - `InvalidInput` when the value is blank or matches none of the shapes.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, DateKeyError> {
    let trimmed = raw.trim();
    let invalid = || DateKeyError::InvalidInput {
        input: raw.to_string(),
    };
    if trimmed.is_empty() {
        return Err(invalid());
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| invalid())
}

/// Derives the calendar key of `instant` as seen at `offset`.
pub fn date_key(instant: DateTime<Utc>, offset: FixedOffset) -> DateKey {
    let local = instant.with_timezone(&offset);
    DateKey {
        year: local.year(),
        month: local.month0(),
        day: local.day(),
    }
}

/// Parses `raw` and derives its calendar key.
pub fn date_key_str(raw: &str, offset: FixedOffset) -> Result<DateKey, DateKeyError> {
    parse_timestamp(raw).map(|instant| date_key(instant, offset))
}

/// Signed whole days from `from` to `to`, rounded toward negative infinity.
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Short English month name for a 0-based month, `None` outside `0..12`.
pub fn month_short_name(month: u32) -> Option<&'static str> {
    MONTH_SHORT_NAMES.get(month as usize).copied()
}

/// Human date label in `Wed Jan 15 2025` form.
pub fn display_date(instant: DateTime<Utc>, offset: FixedOffset) -> String {
    instant
        .with_timezone(&offset)
        .format("%a %b %d %Y")
        .to_string()
}

/// Millisecond-precision UTC ISO string, e.g. `2025-01-15T00:00:00.000Z`.
pub fn to_wire_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::{days_between, parse_timestamp, MILLIS_PER_DAY};
    use chrono::Duration;

    #[test]
    fn floor_division_rounds_negative_partial_days_down() {
        let now = parse_timestamp("2025-01-10T12:00:00Z").unwrap();
        let earlier = now - Duration::milliseconds(1);
        assert_eq!(days_between(now, earlier), -1);
        let later = now + Duration::milliseconds(MILLIS_PER_DAY - 1);
        assert_eq!(days_between(now, later), 0);
    }

    #[test]
    fn naive_date_time_is_read_as_utc() {
        let naive = parse_timestamp("2025-03-01T08:30:00").unwrap();
        let zoned = parse_timestamp("2025-03-01T08:30:00Z").unwrap();
        assert_eq!(naive, zoned);
    }
}
