//! Journey mapping.
//!
//! This module turns a raw trip-planner response into the journey records
//! shown to riders. Each journey is processed independently:
//!
//! 1. Locate the first and last rides, skipping walks and transfers
//! 2. Resolve their times, estimated over planned
//! 3. Classify walks and build the ordered legs
//! 4. Derive the identity, travel time and departure deviation

mod classify;
mod config;
mod interchange;
mod map;


pub use classify::{
    JourneyBounds, PublicLegs, classify_legs, find_public_legs, platform_text, resolve_first,
};
pub use config::{
    ConfigError, DEFAULT_TIME_ZONE, MapperConfig, parse_threshold_mins, parse_time_zone,
};
pub use interchange::{classify_foot_path, classify_interchange};
pub use map::JourneyMapper;
