//! Data transfer objects for JSON output.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{Deviation, Journey, Leg, Stop, TransportLeg, WalkingLeg};
use crate::fare::FareBreakdown;

/// A journey ready for display.
#[derive(Debug, Serialize)]
pub struct JourneyResult {
    /// Identity stable across polls
    pub journey_id: String,

    /// Relative departure, e.g. "in 12 mins"
    pub time_text: Option<String>,

    /// Departure of the first ride (RFC 3339)
    pub origin_time: Option<String>,

    /// Local clock time of departure, e.g. "9:05 am"
    pub origin_time_text: Option<String>,

    /// Arrival of the last ride (RFC 3339)
    pub destination_time: Option<String>,

    /// Local clock time of arrival
    pub destination_time_text: Option<String>,

    /// Travel time in minutes
    pub travel_time_mins: Option<i64>,

    /// Travel time text, e.g. "1h 5m"
    pub travel_time_text: Option<String>,

    /// Total walking in minutes
    pub total_walk_time_mins: Option<i64>,

    /// Total walking text
    pub total_walk_time_text: Option<String>,

    /// Platform or stand of the first ride
    pub platform_text: Option<String>,

    /// Departure deviation, e.g. "3 mins late"
    pub deviation_text: Option<String>,

    /// Whether the departure is late
    pub is_late: bool,

    /// Whether the first ride has departed
    pub has_started: bool,

    /// Whether the last ride has arrived
    pub has_ended: bool,

    /// Number of changes
    pub changes: usize,

    /// Rides and walks, in order
    pub legs: Vec<LegResult>,
}

/// One leg of a journey.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum LegResult {
    Transport(TransportResult),
    Walk(WalkResult),
}

/// A ride.
#[derive(Debug, Serialize)]
pub struct TransportResult {
    /// Mode name, when the product class is known
    pub mode: Option<String>,

    pub product_class: i64,

    pub line_name: String,

    pub headsign: Option<String>,

    pub platform_text: Option<String>,

    pub duration_mins: Option<i64>,

    /// Walk attached to the ride
    pub walk: Option<WalkInterchangeResult>,

    pub alert_count: Option<usize>,

    pub stops: Vec<StopResult>,
}

/// A walk before or after a ride.
#[derive(Debug, Serialize)]
pub struct WalkInterchangeResult {
    /// "BEFORE" or "AFTER"
    pub position: &'static str,
    pub duration_mins: i64,
}

/// A walking leg.
#[derive(Debug, Serialize)]
pub struct WalkResult {
    pub duration_mins: Option<i64>,
    pub description: Option<String>,
}

/// A stop on a ride.
#[derive(Debug, Serialize)]
pub struct StopResult {
    pub name: String,
    pub time_text: Option<String>,
    pub is_wheelchair_accessible: bool,
}

/// A calculated fare. Amounts are dollars with two decimals.
#[derive(Debug, Serialize)]
pub struct FareResult {
    pub category: String,
    pub mode: String,
    /// Fare table used, e.g. "rail"
    pub fare_table: String,
    pub distance_km: f64,
    pub is_peak: bool,
    pub includes_airport: bool,
    pub base_fare: String,
    pub category_fare: String,
    pub cap: Option<String>,
    pub airport_surcharge: Option<String>,
    pub total: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl JourneyResult {
    /// Create from a domain Journey, with status flags as of `now`.
    pub fn from_journey(journey: &Journey, now: DateTime<Utc>) -> Self {
        Self {
            journey_id: journey.journey_id.clone(),
            time_text: journey.time_text_at(now),
            origin_time: journey.origin_time.map(|t| t.to_rfc3339()),
            origin_time_text: journey.origin_time_text.clone(),
            destination_time: journey.destination_time.map(|t| t.to_rfc3339()),
            destination_time_text: journey.destination_time_text.clone(),
            travel_time_mins: journey.travel_time.map(|d| d.num_minutes()),
            travel_time_text: journey.travel_time_text.clone(),
            total_walk_time_mins: journey.total_walk_time.map(|d| d.num_minutes()),
            total_walk_time_text: journey.total_walk_time_text.clone(),
            platform_text: journey.platform_text.clone(),
            deviation_text: journey.deviation.as_ref().map(|d| d.text().to_string()),
            is_late: journey.deviation.as_ref().is_some_and(Deviation::is_late),
            has_started: journey.has_started(now),
            has_ended: journey.has_ended(now),
            changes: journey.change_count(),
            legs: journey.legs.iter().map(LegResult::from_leg).collect(),
        }
    }
}

impl LegResult {
    /// Create from a domain Leg.
    pub fn from_leg(leg: &Leg) -> Self {
        match leg {
            Leg::Transport(ride) => LegResult::Transport(TransportResult::from_ride(ride)),
            Leg::Walking(walk) => LegResult::Walk(WalkResult::from_walk(walk)),
        }
    }
}

impl TransportResult {
    fn from_ride(ride: &TransportLeg) -> Self {
        Self {
            mode: ride.mode.map(|m| m.name().to_string()),
            product_class: ride.product_class.0,
            line_name: ride.line_name.clone(),
            headsign: ride.headsign.clone(),
            platform_text: ride.platform_text.clone(),
            duration_mins: ride.duration.map(|d| d.num_minutes()),
            walk: ride.walk_interchange.map(|w| WalkInterchangeResult {
                position: w.position.code(),
                duration_mins: w.duration.num_minutes(),
            }),
            alert_count: ride.alert_count,
            stops: ride.stops.iter().map(StopResult::from_stop).collect(),
        }
    }
}

impl WalkResult {
    fn from_walk(walk: &WalkingLeg) -> Self {
        Self {
            duration_mins: walk.duration.map(|d| d.num_minutes()),
            description: walk.description.clone(),
        }
    }
}

impl StopResult {
    fn from_stop(stop: &Stop) -> Self {
        Self {
            name: stop.name.clone(),
            time_text: stop.time_text.clone(),
            is_wheelchair_accessible: stop.is_wheelchair_accessible,
        }
    }
}

impl FareResult {
    /// Create from a fare breakdown.
    pub fn from_breakdown(fare: &FareBreakdown) -> Self {
        let request = &fare.request;
        Self {
            category: request.category.to_string(),
            mode: request.mode.to_string(),
            fare_table: fare.table.to_string(),
            distance_km: request.distance_km,
            is_peak: request.is_peak,
            includes_airport: request.includes_airport,
            base_fare: format_amount(fare.base_fare),
            category_fare: format_amount(fare.category_fare),
            cap: fare.cap.map(format_amount),
            airport_surcharge: fare.airport_surcharge.map(format_amount),
            total: format_amount(fare.total),
        }
    }
}

/// Format an amount as dollars and cents, e.g. "4.20".
fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount)
}
