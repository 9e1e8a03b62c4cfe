//! Geographic crate contains logic around the exact solver which turns a list of place names into a route:
//!
//! - **geocoding**: resolves place names to coordinates, an offline csv gazetteer is provided
//! - **common**: coordinates, ellipsoidal distances and the cost matrix builder
//! - **format**: route report and its json and geo json writers
//!
//! # Examples
//!
//! ```
//! use std::io::BufReader;
//! use tsp_core::prelude::*;
//! use tsp_geo::common::{DistanceUnit, MatrixBuilder};
//! use tsp_geo::geocoding::{Gazetteer, resolve_places};
//!
//! let csv = "NAME,LAT,LNG\nBoston,42.3554,-71.0605\nAmherst,42.3732,-72.5199\nNew York,40.7127,-74.0060\n";
//! let gazetteer = Gazetteer::read_csv(BufReader::new(csv.as_bytes()))?;
//! let names = vec!["Boston".to_string(), "New York".to_string(), "Amherst".to_string()];
//!
//! let places = resolve_places(&gazetteer, &names)?;
//! let matrix = MatrixBuilder::new(DistanceUnit::Miles).build(&places)?;
//! let solution = solve(&matrix)?;
//!
//! assert_eq!(solution.tour.len(), 4);
//! # Ok::<(), GenericError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub(crate) mod helpers;

pub mod common;
pub mod format;
pub mod geocoding;
