//! Domain types for the journey engine.
//!
//! This module contains the display-ready journey model and the pure
//! building blocks used to derive it: timestamp handling, transport modes,
//! journey identity and departure deviation.

mod deviation;
mod identity;
mod journey;
mod leg;
mod mode;
mod time;

pub use deviation::{Deviation, DeviationThresholds, classify_deviation};
pub use identity::{build_journey_id, journey_id};
pub use journey::{Journey, TransportSummary};
pub use leg::{Leg, Stop, TransportLeg, WalkInterchange, WalkPosition, WalkingLeg};
pub use mode::{
    FOOTPATH_CLASS, InvalidTransportMode, ProductClass, TRANSFER_CLASS, TransportMode,
};
pub use time::{
    TimeParseError, difference, format_absolute_duration, format_clock, format_relative,
    to_instant, to_optional_instant, to_zone,
};
