//! Walk classification.
//!
//! A walk either surrounds a ride (before boarding, after alighting) or is
//! the whole leg. Walking legs are always whole-leg walks; rides take the
//! position from their foot-path metadata.

use chrono::Duration;
use tracing::trace;

use crate::domain::{WalkInterchange, WalkPosition};
use crate::trip::{FootPathInfo, RawLeg};

/// Seconds to a duration, rejecting negative and out-of-range values.
pub(crate) fn seconds(secs: Option<i64>) -> Option<Duration> {
    secs.filter(|s| *s >= 0).and_then(Duration::try_seconds)
}

/// Classify one foot-path entry attached to a leg.
///
/// `is_walking_leg` forces the whole-leg position regardless of what the
/// entry says. On a ride, only BEFORE and AFTER are meaningful.
pub fn classify_foot_path(info: &FootPathInfo, is_walking_leg: bool) -> Option<WalkInterchange> {
    let duration = seconds(info.duration)?;

    let position = if is_walking_leg {
        WalkPosition::Idest
    } else {
        match info.position.as_deref().and_then(WalkPosition::from_code) {
            Some(position @ (WalkPosition::Before | WalkPosition::After)) => position,
            other => {
                trace!(position = ?info.position, parsed = ?other, "ignoring foot path on ride");
                return None;
            }
        }
    };

    Some(WalkInterchange { duration, position })
}

/// Classify the walk belonging to a leg, if any.
///
/// A walking leg takes its own duration, falling back to its foot-path
/// metadata. A ride takes the first usable foot-path entry.
pub fn classify_interchange(leg: &RawLeg) -> Option<WalkInterchange> {
    let foot_paths = leg.foot_path_info.as_deref().unwrap_or(&[]);

    if !leg.is_public_transport() {
        if let Some(duration) = seconds(leg.duration) {
            return Some(WalkInterchange {
                duration,
                position: WalkPosition::Idest,
            });
        }
        return foot_paths
            .iter()
            .find_map(|info| classify_foot_path(info, true));
    }

    foot_paths
        .iter()
        .find_map(|info| classify_foot_path(info, false))
}
