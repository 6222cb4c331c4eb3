//! JSON views of journeys and fares.

mod dto;

pub use dto::{
    ErrorResponse, FareResult, JourneyResult, LegResult, StopResult, TransportResult,
    WalkInterchangeResult, WalkResult,
};
