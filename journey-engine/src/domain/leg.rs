//! Journey leg types.
//!
//! A `Leg` is one contiguous segment of a journey: either a vehicle ride
//! or a walk. Behaviour is fully determined by which variant is present.

use chrono::{DateTime, Duration, Utc};

use super::{ProductClass, TransportMode};

/// Where a walk happens relative to its leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalkPosition {
    /// Walk before boarding the vehicle.
    Before,
    /// Walk after alighting from the vehicle.
    After,
    /// The whole leg is a walk; no vehicle involved.
    Idest,
}

impl WalkPosition {
    /// Parse the planner's position code ("BEFORE", "AFTER", "IDEST").
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "BEFORE" => Some(WalkPosition::Before),
            "AFTER" => Some(WalkPosition::After),
            "IDEST" => Some(WalkPosition::Idest),
            _ => None,
        }
    }

    /// Returns the planner's position code.
    pub fn code(self) -> &'static str {
        match self {
            WalkPosition::Before => "BEFORE",
            WalkPosition::After => "AFTER",
            WalkPosition::Idest => "IDEST",
        }
    }
}

/// A classified walk with its duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkInterchange {
    pub duration: Duration,
    pub position: WalkPosition,
}

/// A stop on a transport leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    /// Display name
    pub name: String,
    /// Best known time at the stop (estimated over planned)
    pub time: Option<DateTime<Utc>>,
    /// Local clock text for `time`
    pub time_text: Option<String>,
    /// Whether the stop is wheelchair accessible
    pub is_wheelchair_accessible: bool,
}

/// A vehicle ride.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportLeg {
    /// Raw product class code
    pub product_class: ProductClass,
    /// Mode, if the product class is a known one
    pub mode: Option<TransportMode>,
    /// Short line name, e.g. "T1"
    pub line_name: String,
    /// Headsign destination
    pub headsign: Option<String>,
    /// Platform or stand at boarding
    pub platform_text: Option<String>,
    /// Ride duration
    pub duration: Option<Duration>,
    /// Calling pattern from boarding to alighting
    pub stops: Vec<Stop>,
    /// Walk attached to this ride
    pub walk_interchange: Option<WalkInterchange>,
    /// Number of service alerts, when any are reported
    pub alert_count: Option<usize>,
    /// Realtime trip identifier
    pub trip_id: Option<String>,
}

/// A walk that makes up a whole leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkingLeg {
    /// Walking time, when known
    pub duration: Option<Duration>,
    /// Planner's description of the walk
    pub description: Option<String>,
}

/// A leg of a journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Leg {
    Walking(WalkingLeg),
    Transport(TransportLeg),
}

impl Leg {
    /// Returns true if this is a walking leg.
    pub fn is_walking(&self) -> bool {
        matches!(self, Leg::Walking(_))
    }

    /// Returns the transport leg, if this is one.
    pub fn as_transport(&self) -> Option<&TransportLeg> {
        match self {
            Leg::Transport(leg) => Some(leg),
            Leg::Walking(_) => None,
        }
    }

    /// Returns the walking leg, if this is one.
    pub fn as_walking(&self) -> Option<&WalkingLeg> {
        match self {
            Leg::Walking(leg) => Some(leg),
            Leg::Transport(_) => None,
        }
    }

    /// Returns the time spent walking in this leg.
    ///
    /// Whole-leg walks count fully; rides count their attached walk.
    pub fn walk_duration(&self) -> Option<Duration> {
        match self {
            Leg::Walking(walk) => walk.duration,
            Leg::Transport(ride) => ride.walk_interchange.map(|w| w.duration),
        }
    }
}
