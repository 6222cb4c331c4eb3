//! Journey synthesis and fare computation.
//!
//! Turns raw trip-planner responses into display-ready journeys: resolved
//! departure and arrival times, relative and clock text, walking totals,
//! platform text, departure deviation and an identity that survives
//! re-polling. Also computes distance-banded public transport fares.

pub mod domain;
pub mod fare;
pub mod mapper;
pub mod trip;
pub mod view;
