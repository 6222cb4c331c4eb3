//! Journey types.
//!
//! A `Journey` is the display-ready form of one trip-planner journey. It is
//! rebuilt on every poll; `journey_id` ties successive versions together.

use chrono::{DateTime, Duration, Utc};

use super::time::{difference, format_relative};
use super::{Deviation, Leg, TransportLeg, TransportMode};

/// Mode and line of one ride, for the journey summary row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportSummary {
    pub mode: Option<TransportMode>,
    pub line_name: String,
}

/// A complete journey from origin to destination.
///
/// Times are `None` when the planner gave neither an estimate nor a plan
/// for them. Nothing is filled in with a guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    /// Identity stable across polls
    pub journey_id: String,
    /// Departure relative to the mapping instant, e.g. "in 12 mins"
    pub time_text: Option<String>,
    /// Departure of the first ride
    pub origin_time: Option<DateTime<Utc>>,
    /// Local clock text for `origin_time`
    pub origin_time_text: Option<String>,
    /// Arrival of the last ride
    pub destination_time: Option<DateTime<Utc>>,
    /// Local clock text for `destination_time`
    pub destination_time_text: Option<String>,
    /// Departure to arrival
    pub travel_time: Option<Duration>,
    /// Text for `travel_time`, e.g. "1h 5m"
    pub travel_time_text: Option<String>,
    /// Sum of all walking, when there is any
    pub total_walk_time: Option<Duration>,
    /// Text for `total_walk_time`
    pub total_walk_time_text: Option<String>,
    /// Platform or stand of the first ride
    pub platform_text: Option<String>,
    /// One entry per ride, in order
    pub transport_summaries: Vec<TransportSummary>,
    /// All legs, in order
    pub legs: Vec<Leg>,
    /// Departure deviation of the first ride
    pub deviation: Option<Deviation>,
}

impl Journey {
    /// Returns true once the first ride has departed.
    pub fn has_started(&self, now: DateTime<Utc>) -> bool {
        self.origin_time.is_some_and(|t| t <= now)
    }

    /// Returns true once the last ride has arrived.
    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        self.destination_time.is_some_and(|t| t <= now)
    }

    /// Relative departure text recomputed against `now`.
    pub fn time_text_at(&self, now: DateTime<Utc>) -> Option<String> {
        self.origin_time
            .map(|origin| format_relative(difference(now, origin)))
    }

    /// Returns the rides, skipping walks.
    pub fn transport_legs(&self) -> impl Iterator<Item = &TransportLeg> {
        self.legs.iter().filter_map(Leg::as_transport)
    }

    /// Returns the number of changes (rides - 1, or 0).
    pub fn change_count(&self) -> usize {
        self.transport_legs().count().saturating_sub(1)
    }
}
