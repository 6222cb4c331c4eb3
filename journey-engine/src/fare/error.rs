//! Fare calculation errors.
//!
//! Both variants are caller mistakes. They are never retried or papered
//! over; guard the inputs before asking for a fare.

use crate::domain::TransportMode;

/// Errors from fare calculation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FareError {
    /// No published fare for this mode or time of day
    #[error("unsupported fare tier for {mode}: {reason}")]
    UnsupportedFareTier {
        mode: TransportMode,
        reason: &'static str,
    },

    /// Distance is negative or not a finite number
    #[error("invalid distance: {0} km")]
    InvalidDistance(f64),
}
