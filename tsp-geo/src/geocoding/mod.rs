//! Contains the way to resolve place names to coordinates.

#[cfg(test)]
#[path = "../../tests/unit/geocoding/resolve_test.rs"]
mod resolve_test;

mod gazetteer;
pub use self::gazetteer::Gazetteer;

use crate::common::{Coordinate, Place};
use rustc_hash::FxHashSet;
use tsp_core::prelude::GenericResult;

/// Resolves a place name into its coordinate.
pub trait Geocoder {
    /// Returns a coordinate of the place or an error when it is not known.
    fn locate(&self, name: &str) -> GenericResult<Coordinate>;
}

/// Resolves all names keeping their order, fails on the first unknown or repeated name.
pub fn resolve_places<G: Geocoder + ?Sized>(geocoder: &G, names: &[String]) -> GenericResult<Vec<Place>> {
    let mut seen = FxHashSet::default();

    names
        .iter()
        .map(|name| {
            if !seen.insert(normalize_name(name)) {
                return Err(format!("place is specified more than once: '{name}'").into());
            }

            geocoder.locate(name).map(|coordinate| Place { name: name.clone(), coordinate })
        })
        .collect()
}

/// Normalizes the name for lookup: trims it and ignores letter case.
pub(crate) fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
