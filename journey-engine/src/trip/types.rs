//! Trip-planner response DTOs.
//!
//! These types map directly to the trip-planner JSON. They use `Option`
//! liberally because the planner omits fields rather than sending nulls,
//! and walking legs leave most of the transport fields out entirely.

use serde::Deserialize;

use crate::domain::{ProductClass, build_journey_id};

/// Top-level trip-planner response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResponse {
    /// Candidate journeys, in planner order.
    #[serde(default)]
    pub journeys: Vec<RawJourney>,
}

/// One candidate journey: an ordered list of legs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawJourney {
    #[serde(default)]
    pub legs: Vec<RawLeg>,
}

impl RawJourney {
    /// Identity of this journey, as the mapped journey would carry it.
    ///
    /// Available before mapping, so a journey that fails to map can still
    /// be named in diagnostics.
    pub fn journey_id(&self) -> String {
        build_journey_id(self.legs.iter().map(|leg| {
            if leg.is_public_transport() {
                leg.trip_id()
            } else {
                None
            }
        }))
    }
}

/// One leg of a journey, either a vehicle ride or a walk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLeg {
    /// Leg duration in seconds.
    pub duration: Option<i64>,

    /// Leg distance in metres.
    pub distance: Option<i64>,

    /// Vehicle description. Walking legs carry product class 99 or 100.
    pub transportation: Option<Transportation>,

    /// Where the leg starts.
    pub origin: Option<StopEvent>,

    /// Where the leg ends.
    pub destination: Option<StopEvent>,

    /// Every stop the vehicle calls at, origin and destination included.
    pub stop_sequence: Option<Vec<StopEvent>>,

    /// Interchange description for walking legs.
    pub interchange: Option<Interchange>,

    /// Walks attached to a vehicle leg (before boarding, after alighting).
    pub foot_path_info: Option<Vec<FootPathInfo>>,

    /// Service alerts affecting this leg.
    pub infos: Option<Vec<Info>>,
}

impl RawLeg {
    /// Returns the leg's product class, if the planner reported one.
    pub fn product_class(&self) -> Option<ProductClass> {
        self.transportation
            .as_ref()?
            .product
            .as_ref()?
            .class
            .map(ProductClass)
    }

    /// Returns true if this leg is a public-transport ride.
    ///
    /// Legs without any product class are treated as walks.
    pub fn is_public_transport(&self) -> bool {
        self.product_class()
            .is_some_and(ProductClass::is_public_transport)
    }

    /// Returns the realtime trip identifier, if any.
    pub fn trip_id(&self) -> Option<&str> {
        self.transportation
            .as_ref()?
            .properties
            .as_ref()?
            .realtime_trip_id
            .as_deref()
    }
}

/// Vehicle description for a leg.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transportation {
    /// Route identifier.
    pub id: Option<String>,

    /// Full line name, e.g. "Sydney Trains Network T1 North Shore & Western Line".
    pub name: Option<String>,

    /// Short line name, e.g. "T1".
    pub disassembled_name: Option<String>,

    /// Line number.
    pub number: Option<String>,

    /// Mode information.
    pub product: Option<Product>,

    /// Headsign destination.
    pub destination: Option<TransportDestination>,

    /// Realtime properties.
    pub properties: Option<TransportationProperties>,
}

/// Mode information for a vehicle.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product class code.
    pub class: Option<i64>,

    /// Product name, e.g. "Sydney Trains Network".
    pub name: Option<String>,
}

/// Headsign destination of a vehicle.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportDestination {
    pub name: Option<String>,
}

/// Realtime properties of a vehicle.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransportationProperties {
    /// Realtime trip identifier, stable across polls.
    #[serde(rename = "RealtimeTripId")]
    pub realtime_trip_id: Option<String>,

    /// Timetable trip code.
    #[serde(rename = "tripCode")]
    pub trip_code: Option<i64>,
}

/// A stop with its planned and estimated times.
///
/// Used for leg origins, destinations and every entry of a stop sequence.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopEvent {
    /// Stop identifier.
    pub id: Option<String>,

    /// Full stop name, e.g. "Central Station, Platform 16, Sydney".
    pub name: Option<String>,

    /// Short stop name, e.g. "Central Station, Platform 16".
    pub disassembled_name: Option<String>,

    /// Planned departure (ISO-8601 UTC).
    #[serde(alias = "departurePlanned")]
    pub departure_time_planned: Option<String>,

    /// Estimated departure (ISO-8601 UTC).
    #[serde(alias = "departureEstimated")]
    pub departure_time_estimated: Option<String>,

    /// Planned arrival (ISO-8601 UTC).
    #[serde(alias = "arrivalPlanned")]
    pub arrival_time_planned: Option<String>,

    /// Estimated arrival (ISO-8601 UTC).
    #[serde(alias = "arrivalEstimated")]
    pub arrival_time_estimated: Option<String>,

    /// Accessibility properties.
    pub properties: Option<StopProperties>,
}

impl StopEvent {
    /// Returns the name to display: the short name if present.
    pub fn display_name(&self) -> Option<&str> {
        self.disassembled_name.as_deref().or(self.name.as_deref())
    }

    /// Returns true if the stop is marked wheelchair accessible.
    pub fn is_wheelchair_accessible(&self) -> bool {
        self.properties
            .as_ref()
            .and_then(|p| p.wheelchair_access.as_deref())
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }
}

/// Accessibility properties of a stop.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopProperties {
    /// "true" / "false" string flag.
    #[serde(rename = "WheelchairAccess")]
    pub wheelchair_access: Option<String>,
}

/// Interchange description for a walking leg.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interchange {
    /// Human-readable description, e.g. "Walk to platform 4".
    pub desc: Option<String>,

    /// Interchange type code.
    #[serde(rename = "type")]
    pub kind: Option<i64>,
}

/// A walk attached to a vehicle leg.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FootPathInfo {
    /// "BEFORE", "AFTER" or "IDEST".
    pub position: Option<String>,

    /// Walk duration in seconds.
    pub duration: Option<i64>,
}

/// A service alert.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    pub id: Option<String>,
    pub priority: Option<String>,
    pub subtitle: Option<String>,
    pub url: Option<String>,
}
