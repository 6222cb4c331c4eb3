//! Journey identity.
//!
//! A journey is recreated on every poll, with fresh estimated times. Its
//! identity is derived from the trip ids of its legs only, so the same
//! journey keeps the same id from one refresh to the next.

use super::Leg;

/// Placeholder for legs without a trip id (walks).
const WALK_PLACEHOLDER: &str = "T";

/// Build an identity from the trip id of each leg, in order.
///
/// Legs without a trip id contribute `"T"`. Non-alphanumeric characters
/// are stripped from the result.
///
/// A journey made only of walks yields a run of `"T"`s, so two different
/// all-walking journeys with the same leg count share an id.
///
/// # Examples
///
/// ```
/// use journey_engine::domain::build_journey_id;
///
/// assert_eq!(build_journey_id([Some("101-A"), None, Some("202.B")]), "101AT202B");
/// assert_eq!(build_journey_id([None, None]), "TT");
/// ```
pub fn build_journey_id<'a, I>(trip_ids: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    trip_ids
        .into_iter()
        .flat_map(|id| id.unwrap_or(WALK_PLACEHOLDER).chars())
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Identity of a mapped journey's legs.
pub fn journey_id(legs: &[Leg]) -> String {
    build_journey_id(legs.iter().map(|leg| match leg {
        Leg::Transport(ride) => ride.trip_id.as_deref(),
        Leg::Walking(_) => None,
    }))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The id only ever contains alphanumerics
        #[test]
        fn id_is_alphanumeric(ids in prop::collection::vec(prop::option::of(".{0,12}"), 0..6)) {
            let id = build_journey_id(ids.iter().map(|s| s.as_deref()));
            prop_assert!(id.chars().all(char::is_alphanumeric));
        }

        /// Alphanumeric ids pass through unchanged and in order
        #[test]
        fn clean_ids_concatenate(ids in prop::collection::vec("[A-Za-z0-9]{1,8}", 0..6)) {
            let id = build_journey_id(ids.iter().map(|s| Some(s.as_str())));
            prop_assert_eq!(id, ids.concat());
        }
    }
}
