//! Trip-planner response model.
//!
//! The trip planner itself is an external collaborator; this module only
//! describes the shape of its responses and reads them from disk.
//!
//! Key characteristics of the response:
//! - Times are ISO-8601 UTC strings, planned and (optionally) estimated
//! - Walking legs are legs with product class 99 or 100
//! - Realtime trip ids are stable across polls, unlike the times

mod error;
mod load;
mod types;

pub use error::LoadError;
pub use load::{load_trip_response, parse_trip_response};
pub use types::{
    FootPathInfo, Info, Interchange, Product, RawJourney, RawLeg, StopEvent, StopProperties,
    TransportDestination, Transportation, TransportationProperties, TripResponse,
};
