//! Journey mapping.
//!
//! Turns raw trip-planner journeys into display-ready [`Journey`] records.
//! Mapping is a pure transform: no filtering, no I/O, and "now" is always
//! passed in.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use super::classify::{
    classify_legs, find_public_legs, leg_destination_time, leg_origin_time, leg_platform_text,
    stop_time,
};
use super::config::MapperConfig;
use super::interchange::{classify_interchange, seconds};
use crate::domain::{
    Deviation, Journey, Leg, Stop, TimeParseError, TransportLeg, TransportSummary,
    WalkingLeg, classify_deviation, difference, format_absolute_duration, format_clock,
    format_relative, journey_id, to_optional_instant,
};
use crate::trip::{RawJourney, RawLeg, StopEvent};

/// Maps raw journeys into display-ready journeys.
#[derive(Debug, Clone, Default)]
pub struct JourneyMapper {
    config: MapperConfig,
}

impl JourneyMapper {
    /// Create a mapper with the given configuration.
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    /// Returns the mapper configuration.
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Map every journey, in order.
    ///
    /// A journey with a malformed timestamp is logged and left out; the
    /// rest of the batch is still mapped.
    pub fn map_journeys(&self, journeys: &[RawJourney], now: DateTime<Utc>) -> Vec<Journey> {
        let mut mapped = Vec::with_capacity(journeys.len());

        for raw in journeys {
            match self.map_journey(raw, now) {
                Ok(journey) => mapped.push(journey),
                Err(e) => {
                    warn!(
                        journey_id = %raw.journey_id(),
                        error = %e,
                        "skipping journey with malformed timestamp"
                    );
                }
            }
        }

        debug!(
            received = journeys.len(),
            mapped = mapped.len(),
            "mapped journeys"
        );
        mapped
    }

    /// Map a single journey.
    pub fn map_journey(
        &self,
        raw: &RawJourney,
        now: DateTime<Utc>,
    ) -> Result<Journey, TimeParseError> {
        let zone = self.config.time_zone;
        let bounds = classify_legs(&raw.legs)?;

        let legs = raw
            .legs
            .iter()
            .map(|leg| self.map_leg(leg))
            .collect::<Result<Vec<_>, _>>()?;

        let travel_time = match (bounds.origin, bounds.destination) {
            (Some(origin), Some(destination)) => Some(difference(origin, destination)),
            _ => None,
        };

        let total_walk_time = total_walk_time(&legs);

        let transport_summaries = legs
            .iter()
            .filter_map(Leg::as_transport)
            .map(|ride| TransportSummary {
                mode: ride.mode,
                line_name: ride.line_name.clone(),
            })
            .collect();

        let deviation = self.departure_deviation(&raw.legs)?;

        Ok(Journey {
            journey_id: journey_id(&legs),
            time_text: bounds
                .origin
                .map(|origin| format_relative(difference(now, origin))),
            origin_time: bounds.origin,
            origin_time_text: bounds.origin.map(|t| format_clock(t, zone)),
            destination_time: bounds.destination,
            destination_time_text: bounds.destination.map(|t| format_clock(t, zone)),
            travel_time,
            travel_time_text: travel_time.map(format_absolute_duration),
            total_walk_time,
            total_walk_time_text: total_walk_time.map(format_absolute_duration),
            platform_text: bounds.platform_text,
            transport_summaries,
            legs,
            deviation,
        })
    }

    /// Map one raw leg to a walking or transport leg.
    fn map_leg(&self, leg: &RawLeg) -> Result<Leg, TimeParseError> {
        let walk = classify_interchange(leg);

        let product_class = match leg.product_class() {
            Some(class) if class.is_public_transport() => class,
            _ => {
                return Ok(Leg::Walking(WalkingLeg {
                    duration: walk.map(|w| w.duration),
                    description: leg.interchange.as_ref().and_then(|i| i.desc.clone()),
                }));
            }
        };

        let transportation = leg.transportation.as_ref();

        let line_name = transportation
            .and_then(|t| {
                t.disassembled_name
                    .as_deref()
                    .or(t.number.as_deref())
                    .or(t.name.as_deref())
            })
            .unwrap_or_default()
            .trim()
            .to_string();

        let headsign = transportation
            .and_then(|t| t.destination.as_ref())
            .and_then(|d| d.name.clone());

        let stops = leg
            .stop_sequence
            .as_deref()
            .unwrap_or(&[])
            .iter()
            .map(|stop| self.map_stop(stop))
            .collect::<Result<Vec<_>, _>>()?;

        let alert_count = leg
            .infos
            .as_ref()
            .map(Vec::len)
            .filter(|count| *count > 0);

        Ok(Leg::Transport(TransportLeg {
            product_class,
            mode: product_class.mode(),
            line_name,
            headsign,
            platform_text: leg_platform_text(leg),
            duration: ride_duration(leg)?,
            stops,
            walk_interchange: walk,
            alert_count,
            trip_id: leg.trip_id().map(String::from),
        }))
    }

    fn map_stop(&self, stop: &StopEvent) -> Result<Stop, TimeParseError> {
        let time = stop_time(stop)?;
        Ok(Stop {
            name: stop.display_name().unwrap_or_default().trim().to_string(),
            time,
            time_text: time.map(|t| format_clock(t, self.config.time_zone)),
            is_wheelchair_accessible: stop.is_wheelchair_accessible(),
        })
    }

    /// Deviation of the first ride's departure.
    fn departure_deviation(&self, legs: &[RawLeg]) -> Result<Option<Deviation>, TimeParseError> {
        let Some(origin) = find_public_legs(legs).and_then(|public| public.first.origin.as_ref())
        else {
            return Ok(None);
        };

        let planned = to_optional_instant(origin.departure_time_planned.as_deref())?;
        let estimated = to_optional_instant(origin.departure_time_estimated.as_deref())?;

        Ok(planned.and_then(|planned| {
            classify_deviation(planned, estimated, &self.config.deviation_thresholds())
        }))
    }
}

/// Ride duration: the planner's figure, else departure to arrival.
fn ride_duration(leg: &RawLeg) -> Result<Option<Duration>, TimeParseError> {
    if let Some(duration) = seconds(leg.duration) {
        return Ok(Some(duration));
    }

    let origin = leg_origin_time(leg)?;
    let destination = leg_destination_time(leg)?;
    Ok(match (origin, destination) {
        (Some(origin), Some(destination)) => Some(difference(origin, destination)),
        _ => None,
    })
}

/// Sum of every walk in the journey.
///
/// `None` when nobody walks, or when the total does not fit in a duration.
fn total_walk_time(legs: &[Leg]) -> Option<Duration> {
    let total = legs
        .iter()
        .filter_map(Leg::walk_duration)
        .try_fold(Duration::zero(), |acc, d| acc.checked_add(&d))?;

    if total > Duration::zero() {
        Some(total)
    } else {
        None
    }
}
