//! Reading trip-planner responses from disk.

use std::path::Path;

use tracing::debug;

use super::error::LoadError;
use super::types::TripResponse;

/// Parse a trip-planner response body.
pub fn parse_trip_response(body: &str) -> Result<TripResponse, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::json(&e, body))
}

/// Read and parse a trip-planner response file.
pub fn load_trip_response(path: &Path) -> Result<TripResponse, LoadError> {
    let body = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let response = parse_trip_response(&body)?;
    debug!(
        path = %path.display(),
        journeys = response.journeys.len(),
        "loaded trip response"
    );
    Ok(response)
}
