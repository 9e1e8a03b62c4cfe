#[cfg(test)]
#[path = "../../tests/unit/common/distance_test.rs"]
mod distance_test;

use super::Coordinate;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tsp_core::prelude::{Float, GenericError};

// semi-axes and flattening of WGS-84 geoidal reference
const WGS84_A: Float = 6_378_137.0;
const WGS84_F: Float = 1. / 298.257_223_563;
const WGS84_B: Float = WGS84_A * (1. - WGS84_F);

const MEAN_EARTH_RADIUS: Float = 6_371_008.8;

const MAX_ITERATIONS: usize = 200;
const CONVERGENCE_THRESHOLD: Float = 1E-12;

const METERS_IN_MILE: Float = 1_609.344;

/// Specifies a unit of distance used for costs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Meters.
    Meters,
    /// Kilometers.
    Kilometers,
    /// Statute miles.
    #[default]
    Miles,
}

impl DistanceUnit {
    /// Converts meters to the unit.
    pub fn from_meters(&self, meters: Float) -> Float {
        match self {
            Self::Meters => meters,
            Self::Kilometers => meters / 1000.,
            Self::Miles => meters / METERS_IN_MILE,
        }
    }

    /// Returns short name of the unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Meters => "meters",
            Self::Kilometers => "kilometers",
            Self::Miles => "miles",
        }
    }
}

impl Display for DistanceUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DistanceUnit {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "m" | "meters" => Ok(Self::Meters),
            "km" | "kilometers" => Ok(Self::Kilometers),
            "mi" | "miles" => Ok(Self::Miles),
            _ => Err(format!("unknown distance unit: '{value}'").into()),
        }
    }
}

/// Gets ellipsoidal distance in meters between two points on WGS-84 using Vincenty's inverse formula.
///
/// Falls back to the haversine distance when the iteration does not converge, which happens for nearly
/// antipodal points.
pub fn geodesic_distance(from: &Coordinate, to: &Coordinate) -> Float {
    vincenty_distance(from, to).unwrap_or_else(|| haversine_distance(from, to))
}

/// Gets great-circle distance in meters between two points using haversine formula.
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> Float {
    let d_lat = degree_rad(to.lat - from.lat);
    let d_lng = degree_rad(to.lng - from.lng);

    let lat1 = degree_rad(from.lat);
    let lat2 = degree_rad(to.lat);

    let a = (d_lat / 2.).sin().powi(2) + (d_lng / 2.).sin().powi(2) * lat1.cos() * lat2.cos();
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    MEAN_EARTH_RADIUS * c
}

fn vincenty_distance(from: &Coordinate, to: &Coordinate) -> Option<Float> {
    let l = degree_rad(normalize_lng_delta(to.lng - from.lng));

    // reduced latitudes
    let (sin_u1, cos_u1) = ((1. - WGS84_F) * degree_rad(from.lat).tan()).atan().sin_cos();
    let (sin_u2, cos_u2) = ((1. - WGS84_F) * degree_rad(to.lat).tan()).atan().sin_cos();

    let mut lambda = l;

    for _ in 0..MAX_ITERATIONS {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();

        let sin_sigma =
            ((cos_u2 * sin_lambda).powi(2) + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2)).sqrt();

        if sin_sigma == 0. {
            return Some(0.);
        }

        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);

        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1. - sin_alpha * sin_alpha;

        // equatorial line has cos_sq_alpha = 0
        let cos_2sigma_m = if cos_sq_alpha != 0. { cos_sigma - 2. * sin_u1 * sin_u2 / cos_sq_alpha } else { 0. };

        let c = WGS84_F / 16. * cos_sq_alpha * (4. + WGS84_F * (4. - 3. * cos_sq_alpha));

        let lambda_prev = lambda;
        lambda = l
            + (1. - c)
                * WGS84_F
                * sin_alpha
                * (sigma + c * sin_sigma * (cos_2sigma_m + c * cos_sigma * (-1. + 2. * cos_2sigma_m.powi(2))));

        if lambda.abs() > PI {
            return None;
        }

        if (lambda - lambda_prev).abs() < CONVERGENCE_THRESHOLD {
            let u_sq = cos_sq_alpha * (WGS84_A.powi(2) - WGS84_B.powi(2)) / WGS84_B.powi(2);
            let a = 1. + u_sq / 16384. * (4096. + u_sq * (-768. + u_sq * (320. - 175. * u_sq)));
            let b = u_sq / 1024. * (256. + u_sq * (-128. + u_sq * (74. - 47. * u_sq)));

            let delta_sigma = b
                * sin_sigma
                * (cos_2sigma_m
                    + b / 4.
                        * (cos_sigma * (-1. + 2. * cos_2sigma_m.powi(2))
                            - b / 6.
                                * cos_2sigma_m
                                * (-3. + 4. * sin_sigma.powi(2))
                                * (-3. + 4. * cos_2sigma_m.powi(2))));

            return Some(WGS84_B * a * (sigma - delta_sigma));
        }
    }

    None
}

/// Keeps longitude difference within [-180, 180] so that the shorter way around is taken.
fn normalize_lng_delta(delta: Float) -> Float {
    if delta > 180. {
        delta - 360.
    } else if delta < -180. {
        delta + 360.
    } else {
        delta
    }
}

/// Converts degrees to radians.
#[inline(always)]
fn degree_rad(degrees: Float) -> Float {
    PI * degrees / 180.
}
