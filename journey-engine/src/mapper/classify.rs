//! Leg classification.
//!
//! Finds the rides that bound a journey and resolves their times. Walks and
//! transfers (product classes 99 and 100) are skipped, so a journey that
//! starts with a walk to the station still departs when the train does.

use chrono::{DateTime, Utc};
use tracing::trace;

use crate::domain::{TimeParseError, TransportMode, to_optional_instant};
use crate::trip::{RawLeg, StopEvent};

/// The first and last public-transport legs of a journey.
#[derive(Debug, Clone, Copy)]
pub struct PublicLegs<'a> {
    pub first: &'a RawLeg,
    pub last: &'a RawLeg,
}

/// Resolved boundaries of a journey.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JourneyBounds {
    /// Departure of the first ride, estimated over planned
    pub origin: Option<DateTime<Utc>>,
    /// Arrival of the last ride, estimated over planned
    pub destination: Option<DateTime<Utc>>,
    /// Platform or stand of the first ride
    pub platform_text: Option<String>,
}

/// Locate the first and last public-transport legs in a single scan.
///
/// Returns `None` when every leg is a walk or transfer.
pub fn find_public_legs(legs: &[RawLeg]) -> Option<PublicLegs<'_>> {
    let mut first = None;
    let mut last = None;

    for leg in legs.iter().filter(|leg| leg.is_public_transport()) {
        if first.is_none() {
            first = Some(leg);
        }
        last = Some(leg);
    }

    Some(PublicLegs {
        first: first?,
        last: last?,
    })
}

/// Resolve the first candidate that is present.
///
/// Candidates are tried in order; blank and absent values fall through to
/// the next one. A malformed value is an error, not a fall-through.
pub fn resolve_first(
    candidates: &[Option<&str>],
) -> Result<Option<DateTime<Utc>>, TimeParseError> {
    for candidate in candidates {
        if let Some(instant) = to_optional_instant(*candidate)? {
            return Ok(Some(instant));
        }
    }
    Ok(None)
}

/// Departure from a stop, estimated over planned.
pub fn departure_time(stop: &StopEvent) -> Result<Option<DateTime<Utc>>, TimeParseError> {
    resolve_first(&[
        stop.departure_time_estimated.as_deref(),
        stop.departure_time_planned.as_deref(),
    ])
}

/// Arrival at a stop, estimated over planned.
pub fn arrival_time(stop: &StopEvent) -> Result<Option<DateTime<Utc>>, TimeParseError> {
    resolve_first(&[
        stop.arrival_time_estimated.as_deref(),
        stop.arrival_time_planned.as_deref(),
    ])
}

/// Best known time at an intermediate stop: departure, then arrival.
pub fn stop_time(stop: &StopEvent) -> Result<Option<DateTime<Utc>>, TimeParseError> {
    resolve_first(&[
        stop.departure_time_estimated.as_deref(),
        stop.departure_time_planned.as_deref(),
        stop.arrival_time_estimated.as_deref(),
        stop.arrival_time_planned.as_deref(),
    ])
}

/// Effective departure of a leg from its origin.
pub fn leg_origin_time(leg: &RawLeg) -> Result<Option<DateTime<Utc>>, TimeParseError> {
    match &leg.origin {
        Some(origin) => departure_time(origin),
        None => Ok(None),
    }
}

/// Effective arrival of a leg at its destination.
pub fn leg_destination_time(leg: &RawLeg) -> Result<Option<DateTime<Utc>>, TimeParseError> {
    match &leg.destination {
        Some(destination) => arrival_time(destination),
        None => Ok(None),
    }
}

/// Platform text for boarding a leg.
///
/// Rail stop names end in the platform (`"Central Station, Platform 16"`),
/// so only the last comma-separated part is kept. Other modes use the full
/// stop name. Unknown product classes get no platform text.
///
/// # Examples
///
/// ```
/// use journey_engine::mapper::platform_text;
/// use journey_engine::domain::TransportMode;
///
/// assert_eq!(
///     platform_text(Some(TransportMode::Train), "Central Station, Platform 16"),
///     Some("Platform 16".to_string())
/// );
/// assert_eq!(
///     platform_text(Some(TransportMode::Bus), " Stand D "),
///     Some("Stand D".to_string())
/// );
/// assert_eq!(platform_text(None, "Somewhere"), None);
/// ```
pub fn platform_text(mode: Option<TransportMode>, stop_name: &str) -> Option<String> {
    let mode = mode?;

    let text = if mode.has_platform_suffix() {
        stop_name.rsplit(',').next().unwrap_or(stop_name)
    } else {
        stop_name
    };
    let text = text.trim();

    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Platform text for boarding the given leg.
pub fn leg_platform_text(leg: &RawLeg) -> Option<String> {
    let mode = leg.product_class()?.mode();
    let name = leg.origin.as_ref()?.display_name()?;
    platform_text(mode, name)
}

/// Resolve the origin, destination and platform of a journey.
///
/// Missing times stay `None`. Malformed times are errors.
pub fn classify_legs(legs: &[RawLeg]) -> Result<JourneyBounds, TimeParseError> {
    let Some(public) = find_public_legs(legs) else {
        trace!(legs = legs.len(), "journey has no public-transport legs");
        return Ok(JourneyBounds::default());
    };

    Ok(JourneyBounds {
        origin: leg_origin_time(public.first)?,
        destination: leg_destination_time(public.last)?,
        platform_text: leg_platform_text(public.first),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::{Product, Transportation};
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, h, m, 0).unwrap()
    }

    fn stop(name: &str, planned: Option<&str>, estimated: Option<&str>) -> StopEvent {
        StopEvent {
            disassembled_name: Some(name.into()),
            departure_time_planned: planned.map(String::from),
            departure_time_estimated: estimated.map(String::from),
            arrival_time_planned: planned.map(String::from),
            arrival_time_estimated: estimated.map(String::from),
            ..StopEvent::default()
        }
    }

    fn leg(class: i64, origin: StopEvent, destination: StopEvent) -> RawLeg {
        RawLeg {
            transportation: Some(Transportation {
                product: Some(Product {
                    class: Some(class),
                    name: None,
                }),
                ..Transportation::default()
            }),
            origin: Some(origin),
            destination: Some(destination),
            ..RawLeg::default()
        }
    }

    fn walk(from: &str, to: &str) -> RawLeg {
        leg(
            100,
            stop("Street", Some(from), None),
            stop("Station", Some(to), None),
        )
    }

    #[test]
    fn skips_boundary_walks() {
        let legs = vec![
            walk("2024-03-15T09:50:00Z", "2024-03-15T09:58:00Z"),
            leg(
                1,
                stop(
                    "Central Station, Platform 16",
                    Some("2024-03-15T10:00:00Z"),
                    None,
                ),
                stop(
                    "Strathfield Station, Platform 3",
                    Some("2024-03-15T10:20:00Z"),
                    None,
                ),
            ),
            leg(
                5,
                stop(
                    "Strathfield Station, Stand A",
                    Some("2024-03-15T10:25:00Z"),
                    None,
                ),
                stop("Burwood", Some("2024-03-15T10:40:00Z"), None),
            ),
            walk("2024-03-15T10:40:00Z", "2024-03-15T10:48:00Z"),
        ];

        let public = find_public_legs(&legs).unwrap();
        assert_eq!(public.first.product_class().unwrap().0, 1);
        assert_eq!(public.last.product_class().unwrap().0, 5);

        let bounds = classify_legs(&legs).unwrap();
        assert_eq!(bounds.origin, Some(at(10, 0)));
        assert_eq!(bounds.destination, Some(at(10, 40)));
        assert_eq!(bounds.platform_text.as_deref(), Some("Platform 16"));
    }

    #[test]
    fn footpath_class_is_also_skipped() {
        let legs = vec![
            leg(
                99,
                stop("Street", Some("2024-03-15T09:00:00Z"), None),
                stop("Wharf", Some("2024-03-15T09:05:00Z"), None),
            ),
            leg(
                9,
                stop("Circular Quay, Wharf 3", Some("2024-03-15T09:10:00Z"), None),
                stop("Manly", Some("2024-03-15T09:35:00Z"), None),
            ),
        ];

        let bounds = classify_legs(&legs).unwrap();
        assert_eq!(bounds.origin, Some(at(9, 10)));
        assert_eq!(bounds.destination, Some(at(9, 35)));
        // Ferries keep the full stop name
        assert_eq!(bounds.platform_text.as_deref(), Some("Circular Quay, Wharf 3"));
    }

    #[test]
    fn estimated_preferred_over_planned() {
        let legs = vec![leg(
            2,
            stop(
                "Chatswood Station, Platform 1",
                Some("2024-03-15T10:00:00Z"),
                Some("2024-03-15T10:03:00Z"),
            ),
            stop(
                "Tallawong Station, Platform 2",
                Some("2024-03-15T10:30:00Z"),
                Some("2024-03-15T10:34:00Z"),
            ),
        )];

        let bounds = classify_legs(&legs).unwrap();
        assert_eq!(bounds.origin, Some(at(10, 3)));
        assert_eq!(bounds.destination, Some(at(10, 34)));
    }

    #[test]
    fn all_walking_has_no_bounds() {
        let legs = vec![walk("2024-03-15T09:50:00Z", "2024-03-15T09:58:00Z")];
        assert!(find_public_legs(&legs).is_none());
        assert_eq!(classify_legs(&legs).unwrap(), JourneyBounds::default());
    }

    #[test]
    fn missing_times_stay_unresolved() {
        let legs = vec![leg(1, stop("Central", None, None), stop("Redfern", None, None))];
        let bounds = classify_legs(&legs).unwrap();
        assert_eq!(bounds.origin, None);
        assert_eq!(bounds.destination, None);
    }

    #[test]
    fn malformed_time_is_an_error() {
        let legs = vec![leg(
            1,
            stop("Central", Some("2024-03-15T10:00:00Z"), Some("NULL")),
            stop("Redfern", Some("2024-03-15T10:05:00Z"), None),
        )];
        let err = classify_legs(&legs).unwrap_err();
        assert_eq!(err.input(), "NULL");
    }

    #[test]
    fn resolve_first_falls_through_blanks() {
        assert_eq!(
            resolve_first(&[None, Some(""), Some("2024-03-15T10:00:00Z")]),
            Ok(Some(at(10, 0)))
        );
        assert_eq!(resolve_first(&[None, None]), Ok(None));
    }

    #[test]
    fn stop_time_falls_back_to_arrival() {
        let terminus = StopEvent {
            arrival_time_planned: Some("2024-03-15T11:00:00Z".into()),
            ..StopEvent::default()
        };
        assert_eq!(stop_time(&terminus), Ok(Some(at(11, 0))));
    }

    #[test]
    fn platform_text_rules() {
        assert_eq!(
            platform_text(Some(TransportMode::Metro), "Sydenham Station, Platform 1 "),
            Some("Platform 1".into())
        );
        assert_eq!(
            platform_text(Some(TransportMode::Train), "Redfern"),
            Some("Redfern".into())
        );
        assert_eq!(
            platform_text(Some(TransportMode::LightRail), "Central Chalmers Street"),
            Some("Central Chalmers Street".into())
        );
        assert_eq!(platform_text(Some(TransportMode::Bus), "   "), None);
        assert_eq!(platform_text(None, "Central, Platform 1"), None);
    }

    #[test]
    fn unknown_class_is_public_but_has_no_platform() {
        let legs = vec![leg(
            11,
            stop("School Stop", Some("2024-03-15T08:00:00Z"), None),
            stop("School", Some("2024-03-15T08:20:00Z"), None),
        )];
        let bounds = classify_legs(&legs).unwrap();
        assert_eq!(bounds.origin, Some(at(8, 0)));
        assert_eq!(bounds.platform_text, None);
    }
}
