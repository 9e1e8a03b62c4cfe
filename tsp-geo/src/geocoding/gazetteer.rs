#[cfg(test)]
#[path = "../../tests/unit/geocoding/gazetteer_test.rs"]
mod gazetteer_test;

use super::{Geocoder, normalize_name};
use crate::common::Coordinate;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::io::{BufReader, Read};
use tsp_core::prelude::{Float, GenericError, GenericResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
struct CsvPlace {
    name: String,
    lat: Float,
    lng: Float,
}

/// An offline geocoder which keeps known places in memory.
#[derive(Clone, Debug, Default)]
pub struct Gazetteer {
    places: FxHashMap<String, Coordinate>,
}

impl Gazetteer {
    /// Reads places from csv with `NAME,LAT,LNG` header.
    pub fn read_csv<R: Read>(reader: BufReader<R>) -> GenericResult<Self> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        reader.deserialize::<CsvPlace>().enumerate().try_fold(Self::default(), |mut gazetteer, (idx, entry)| {
            let entry = entry.map_err(|err| format!("cannot read place at record {}: '{err}'", idx + 1))?;
            let coordinate = Coordinate::new(entry.lat, entry.lng)
                .map_err(|err| format!("invalid coordinate of '{}': {err}", entry.name))?;

            gazetteer.insert(entry.name, coordinate)?;

            Ok::<_, GenericError>(gazetteer)
        })
    }

    /// Adds a place, the name should not be known yet.
    pub fn insert(&mut self, name: String, coordinate: Coordinate) -> GenericResult<()> {
        let key = normalize_name(name.as_str());

        if key.is_empty() {
            return Err("place name cannot be empty".into());
        }

        if self.places.insert(key, coordinate).is_some() {
            return Err(format!("duplicate place: '{name}'").into());
        }

        Ok(())
    }

    /// Returns amount of known places.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Checks whether no places are known.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl Geocoder for Gazetteer {
    fn locate(&self, name: &str) -> GenericResult<Coordinate> {
        self.places.get(&normalize_name(name)).copied().ok_or_else(|| format!("cannot find place: '{name}'").into())
    }
}
