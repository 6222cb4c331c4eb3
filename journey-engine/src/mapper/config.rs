//! Mapper configuration.

use chrono::Duration;
use chrono_tz::Tz;

use crate::domain::DeviationThresholds;

/// Zone used for display times when none is configured.
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::Australia::Sydney;

/// Error returned when a configuration value is invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Not an IANA time zone name
    #[error("unknown time zone: {0}")]
    InvalidTimeZone(String),

    /// Threshold is not a non-negative whole number of minutes that fits
    /// in a duration
    #[error("invalid threshold {value:?} for {name}")]
    InvalidThreshold { name: &'static str, value: String },
}

/// Parse an IANA time zone name, e.g. "Australia/Sydney".
pub fn parse_time_zone(name: &str) -> Result<Tz, ConfigError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ConfigError::InvalidTimeZone(name.to_string()))
}

/// Parse a threshold given in whole minutes.
pub fn parse_threshold_mins(name: &'static str, value: &str) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|mins| *mins >= 0 && Duration::try_minutes(*mins).is_some())
        .ok_or_else(|| ConfigError::InvalidThreshold {
            name,
            value: value.to_string(),
        })
}

/// Minutes to a duration, clamped to the representable range.
fn saturating_minutes(mins: i64) -> Duration {
    Duration::try_minutes(mins).unwrap_or(if mins < 0 {
        Duration::MIN
    } else {
        Duration::MAX
    })
}

/// Configuration parameters for journey mapping.
#[derive(Debug, Clone)]
pub struct MapperConfig {
    /// Zone for clock display text.
    pub time_zone: Tz,

    /// Delay (minutes) from which a departure counts as late.
    pub late_threshold_mins: i64,

    /// Lead (minutes) from which a departure counts as early.
    pub early_threshold_mins: i64,
}

impl MapperConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(time_zone: Tz, late_threshold_mins: i64, early_threshold_mins: i64) -> Self {
        Self {
            time_zone,
            late_threshold_mins,
            early_threshold_mins,
        }
    }

    /// Returns the late threshold as a Duration.
    pub fn late_threshold(&self) -> Duration {
        saturating_minutes(self.late_threshold_mins)
    }

    /// Returns the early threshold as a Duration.
    pub fn early_threshold(&self) -> Duration {
        saturating_minutes(self.early_threshold_mins)
    }

    /// Returns the thresholds used for departure deviation.
    pub fn deviation_thresholds(&self) -> DeviationThresholds {
        DeviationThresholds {
            late: self.late_threshold(),
            early: self.early_threshold(),
        }
    }
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            time_zone: DEFAULT_TIME_ZONE,
            late_threshold_mins: 1,
            early_threshold_mins: 1,
        }
    }
}
