#[cfg(test)]
#[path = "../../tests/unit/common/coordinate_test.rs"]
mod coordinate_test;

use serde::{Deserialize, Serialize};
use tsp_core::prelude::{Float, GenericResult};

/// A geographic coordinate in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude, from -90 to 90.
    pub lat: Float,
    /// Longitude, from -180 to 180.
    pub lng: Float,
}

impl Coordinate {
    /// Creates a new coordinate checking that it is finite and within valid degree ranges.
    pub fn new(lat: Float, lng: Float) -> GenericResult<Self> {
        if !lat.is_finite() || !(-90. ..=90.).contains(&lat) {
            return Err(format!("invalid latitude: {lat}").into());
        }

        if !lng.is_finite() || !(-180. ..=180.).contains(&lng) {
            return Err(format!("invalid longitude: {lng}").into());
        }

        Ok(Self { lat, lng })
    }
}

/// A named place with known coordinate.
#[derive(Clone, Debug, PartialEq)]
pub struct Place {
    /// A name of the place as it was requested.
    pub name: String,
    /// A location of the place.
    pub coordinate: Coordinate,
}
