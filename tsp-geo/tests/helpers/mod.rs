use crate::common::{Coordinate, Place};
use crate::geocoding::Gazetteer;
use std::io::BufReader;

pub const US_CITIES_CSV: &str = r"NAME,LAT,LNG
Boston,42.3554334,-71.060511
Amherst,42.3731950,-72.519876
New York,40.7127281,-74.0060152
San Francisco,37.7792588,-122.4193286
Austin,30.2711286,-97.7436995
";

pub fn create_gazetteer() -> Gazetteer {
    Gazetteer::read_csv(BufReader::new(US_CITIES_CSV.as_bytes())).expect("cannot read test gazetteer")
}

pub fn create_place(name: &str, lat: f64, lng: f64) -> Place {
    Place { name: name.to_string(), coordinate: Coordinate::new(lat, lng).expect("invalid test coordinate") }
}
