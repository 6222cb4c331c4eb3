//! Timestamp handling for trip-planner responses.
//!
//! The trip planner reports every time as an ISO-8601 UTC string such as
//! `"2024-03-15T10:00:00Z"`. This module turns those strings into absolute
//! instants, converts instants into the rider's zone for display, and
//! renders durations as the short text shown on journey cards.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

/// Error returned when a timestamp string is not valid ISO-8601.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {input:?}: {reason}")]
pub struct TimeParseError {
    input: String,
    reason: String,
}

impl TimeParseError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns the string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Parse an ISO-8601 timestamp into a UTC instant.
///
/// Offsets other than `Z` are accepted and normalised to UTC.
///
/// # Examples
///
/// ```
/// use journey_engine::domain::to_instant;
///
/// let instant = to_instant("2024-03-15T10:00:00Z").unwrap();
/// assert_eq!(instant.to_rfc3339(), "2024-03-15T10:00:00+00:00");
///
/// assert!(to_instant("10:00").is_err());
/// ```
pub fn to_instant(s: &str) -> Result<DateTime<Utc>, TimeParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::new(s, "empty string"));
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| TimeParseError::new(s, e.to_string()))
}

/// Parse an optional timestamp field.
///
/// Absent or blank fields resolve to `Ok(None)`. A present but malformed
/// value is an error.
pub fn to_optional_instant(s: Option<&str>) -> Result<Option<DateTime<Utc>>, TimeParseError> {
    match s {
        Some(s) if !s.trim().is_empty() => to_instant(s).map(Some),
        _ => Ok(None),
    }
}

/// Signed duration from `from` to `to`.
///
/// Positive when `to` is later than `from`.
pub fn difference(from: DateTime<Utc>, to: DateTime<Utc>) -> Duration {
    to.signed_duration_since(from)
}

/// Convert an instant into the given zone.
pub fn to_zone(instant: DateTime<Utc>, zone: Tz) -> DateTime<Tz> {
    instant.with_timezone(&zone)
}

/// Render the local wall-clock time of an instant, e.g. `"9:05 am"`.
pub fn format_clock(instant: DateTime<Utc>, zone: Tz) -> String {
    to_zone(instant, zone).format("%-I:%M %P").to_string()
}

/// Render a duration relative to now.
///
/// | duration        | text            |
/// |-----------------|-----------------|
/// | under a minute  | `Now`           |
/// | negative        | `40 mins ago`   |
/// | under an hour   | `in 12 mins`    |
/// | one hour and up | `in 1h 20m`     |
/// | two hours+      | `in 2h`         |
///
/// # Examples
///
/// ```
/// use journey_engine::domain::format_relative;
/// use chrono::Duration;
///
/// assert_eq!(format_relative(Duration::zero()), "Now");
/// assert_eq!(format_relative(Duration::minutes(-40)), "40 mins ago");
/// assert_eq!(format_relative(Duration::minutes(80)), "in 1h 20m");
/// assert_eq!(format_relative(Duration::minutes(120)), "in 2h");
/// ```
pub fn format_relative(duration: Duration) -> String {
    let total_mins = duration.num_minutes();

    if total_mins == 0 {
        return "Now".to_string();
    }

    if total_mins < 0 {
        let mins = total_mins.unsigned_abs();
        return if mins == 1 {
            "1 min ago".to_string()
        } else {
            format!("{mins} mins ago")
        };
    }

    let hours = total_mins / 60;
    let mins = total_mins % 60;
    match hours {
        0 => format!("in {mins} mins"),
        1 => format!("in 1h {mins}m"),
        _ => format!("in {hours}h"),
    }
}

/// Render a duration without relative framing, e.g. `"1h 20m"`.
///
/// The sign is ignored; callers decide whether it means late or early.
///
/// # Examples
///
/// ```
/// use journey_engine::domain::format_absolute_duration;
/// use chrono::Duration;
///
/// assert_eq!(format_absolute_duration(Duration::minutes(80)), "1h 20m");
/// assert_eq!(format_absolute_duration(Duration::minutes(120)), "2h");
/// assert_eq!(format_absolute_duration(Duration::minutes(-7)), "7 mins");
/// ```
pub fn format_absolute_duration(duration: Duration) -> String {
    let total_mins = duration.num_minutes().unsigned_abs();
    let hours = total_mins / 60;
    let mins = total_mins % 60;

    match (hours, mins) {
        (0, m) => format!("{m} mins"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}
