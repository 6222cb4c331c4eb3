//! Departure deviation.
//!
//! Compares the planned and estimated departure of a journey's first ride
//! and classifies the difference as late, early or on time.

use chrono::{DateTime, Duration, Utc};

use super::time::{difference, format_absolute_duration};

/// How far a departure may drift before it counts as late or early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviationThresholds {
    /// Delays of at least this much are late.
    pub late: Duration,
    /// Departures at least this much ahead of plan are early.
    pub early: Duration,
}

impl Default for DeviationThresholds {
    fn default() -> Self {
        Self {
            late: Duration::minutes(1),
            early: Duration::minutes(1),
        }
    }
}

/// Classified departure deviation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deviation {
    Late { delay: Duration, text: String },
    Early { ahead: Duration, text: String },
    OnTime,
}

impl Deviation {
    /// Returns the display text, e.g. "3 mins late".
    pub fn text(&self) -> &str {
        match self {
            Deviation::Late { text, .. } | Deviation::Early { text, .. } => text,
            Deviation::OnTime => "On time",
        }
    }

    /// Returns true if the departure is late.
    pub fn is_late(&self) -> bool {
        matches!(self, Deviation::Late { .. })
    }
}

/// Classify a departure against its plan.
///
/// Returns `None` when there is no estimate to compare.
///
/// # Examples
///
/// ```
/// use journey_engine::domain::{classify_deviation, Deviation, DeviationThresholds};
/// use chrono::{Duration, TimeZone, Utc};
///
/// let planned = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
/// let estimated = planned + Duration::minutes(3);
///
/// let deviation =
///     classify_deviation(planned, Some(estimated), &DeviationThresholds::default()).unwrap();
/// assert_eq!(deviation.text(), "3 mins late");
///
/// assert!(classify_deviation(planned, None, &DeviationThresholds::default()).is_none());
/// ```
pub fn classify_deviation(
    planned: DateTime<Utc>,
    estimated: Option<DateTime<Utc>>,
    thresholds: &DeviationThresholds,
) -> Option<Deviation> {
    let delta = difference(planned, estimated?);

    let deviation = if delta >= thresholds.late {
        Deviation::Late {
            delay: delta,
            text: format!("{} late", format_absolute_duration(delta)),
        }
    } else if delta <= -thresholds.early {
        Deviation::Early {
            ahead: -delta,
            text: format!("{} early", format_absolute_duration(delta)),
        }
    } else {
        Deviation::OnTime
    };

    Some(deviation)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    proptest! {
        /// Exactly one classification per delta, and late/early match the sign
        #[test]
        fn classification_matches_sign(secs in -7200i64..7200) {
            let planned = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
            let delta = Duration::seconds(secs);
            let deviation = classify_deviation(
                planned,
                Some(planned + delta),
                &DeviationThresholds::default(),
            ).unwrap();

            match deviation {
                Deviation::Late { delay, .. } => prop_assert!(delay >= Duration::minutes(1)),
                Deviation::Early { ahead, .. } => prop_assert!(ahead >= Duration::minutes(1)),
                Deviation::OnTime => prop_assert!(delta.num_seconds().abs() < 60),
            }
        }
    }
}
