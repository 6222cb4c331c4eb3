//! Transport modes and product classes.
//!
//! The trip planner tags every leg with an integer product class. Six of the
//! codes are public-transport modes; 99 and 100 mark footpaths and transfers.

use std::fmt;
use std::str::FromStr;

/// Product class code for a walking footpath.
pub const FOOTPATH_CLASS: i64 = 99;

/// Product class code for an in-station transfer.
pub const TRANSFER_CLASS: i64 = 100;

/// A public-transport mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransportMode {
    Train,
    Metro,
    LightRail,
    Bus,
    Coach,
    Ferry,
}

impl TransportMode {
    /// All modes in product-class order.
    pub const ALL: [TransportMode; 6] = [
        TransportMode::Train,
        TransportMode::Metro,
        TransportMode::LightRail,
        TransportMode::Bus,
        TransportMode::Coach,
        TransportMode::Ferry,
    ];

    /// Returns the product class code for this mode.
    pub fn product_class(self) -> i64 {
        match self {
            TransportMode::Train => 1,
            TransportMode::Metro => 2,
            TransportMode::LightRail => 4,
            TransportMode::Bus => 5,
            TransportMode::Coach => 7,
            TransportMode::Ferry => 9,
        }
    }

    /// Look up the mode for a product class code.
    pub fn from_product_class(code: i64) -> Option<Self> {
        match code {
            1 => Some(TransportMode::Train),
            2 => Some(TransportMode::Metro),
            4 => Some(TransportMode::LightRail),
            5 => Some(TransportMode::Bus),
            7 => Some(TransportMode::Coach),
            9 => Some(TransportMode::Ferry),
            _ => None,
        }
    }

    /// Returns the display name of this mode.
    pub fn name(self) -> &'static str {
        match self {
            TransportMode::Train => "Train",
            TransportMode::Metro => "Metro",
            TransportMode::LightRail => "Light Rail",
            TransportMode::Bus => "Bus",
            TransportMode::Coach => "Coach",
            TransportMode::Ferry => "Ferry",
        }
    }

    /// Rail modes whose stop names carry a platform suffix
    /// (`"Central Station, Platform 16"`).
    pub fn has_platform_suffix(self) -> bool {
        matches!(self, TransportMode::Train | TransportMode::Metro)
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a mode name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport mode: {0}")]
pub struct InvalidTransportMode(String);

impl FromStr for TransportMode {
    type Err = InvalidTransportMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalised.as_str() {
            "train" => Ok(TransportMode::Train),
            "metro" => Ok(TransportMode::Metro),
            "lightrail" => Ok(TransportMode::LightRail),
            "bus" => Ok(TransportMode::Bus),
            "coach" => Ok(TransportMode::Coach),
            "ferry" => Ok(TransportMode::Ferry),
            _ => Err(InvalidTransportMode(s.to_string())),
        }
    }
}

/// A raw product class code as reported by the trip planner.
///
/// # Examples
///
/// ```
/// use journey_engine::domain::{ProductClass, TransportMode};
///
/// assert_eq!(ProductClass(1).mode(), Some(TransportMode::Train));
/// assert!(ProductClass(5).is_public_transport());
/// assert!(!ProductClass(99).is_public_transport());
/// assert!(!ProductClass(100).is_public_transport());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductClass(pub i64);

impl ProductClass {
    /// Returns true unless this is a footpath or transfer code.
    ///
    /// Codes outside the known mode set still count as public transport.
    pub fn is_public_transport(self) -> bool {
        self.0 != FOOTPATH_CLASS && self.0 != TRANSFER_CLASS
    }

    /// Returns the transport mode, if the code is a known mode.
    pub fn mode(self) -> Option<TransportMode> {
        TransportMode::from_product_class(self.0)
    }
}

impl From<TransportMode> for ProductClass {
    fn from(mode: TransportMode) -> Self {
        ProductClass(mode.product_class())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_class_codes() {
        assert_eq!(ProductClass(1).mode(), Some(TransportMode::Train));
        assert_eq!(ProductClass(2).mode(), Some(TransportMode::Metro));
        assert_eq!(ProductClass(4).mode(), Some(TransportMode::LightRail));
        assert_eq!(ProductClass(5).mode(), Some(TransportMode::Bus));
        assert_eq!(ProductClass(7).mode(), Some(TransportMode::Coach));
        assert_eq!(ProductClass(9).mode(), Some(TransportMode::Ferry));
        assert_eq!(ProductClass(3).mode(), None);
        assert_eq!(ProductClass(99).mode(), None);
    }

    #[test]
    fn footpath_and_transfer_are_not_public() {
        assert!(!ProductClass(FOOTPATH_CLASS).is_public_transport());
        assert!(!ProductClass(TRANSFER_CLASS).is_public_transport());
        assert!(ProductClass(11).is_public_transport());
    }

    #[test]
    fn mode_round_trips_through_code() {
        for mode in TransportMode::ALL {
            assert_eq!(ProductClass::from(mode).mode(), Some(mode));
        }
    }

    #[test]
    fn parse_mode_names() {
        assert_eq!("train".parse(), Ok(TransportMode::Train));
        assert_eq!("Light Rail".parse(), Ok(TransportMode::LightRail));
        assert_eq!("light-rail".parse(), Ok(TransportMode::LightRail));
        assert_eq!("FERRY".parse(), Ok(TransportMode::Ferry));
        assert!("tram".parse::<TransportMode>().is_err());
    }

    #[test]
    fn platform_suffix_only_for_rail() {
        assert!(TransportMode::Train.has_platform_suffix());
        assert!(TransportMode::Metro.has_platform_suffix());
        assert!(!TransportMode::Bus.has_platform_suffix());
        assert!(!TransportMode::Ferry.has_platform_suffix());
    }
}
