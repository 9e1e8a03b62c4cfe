//! Contains the route report model and its writers.

mod geojson;
pub use self::geojson::write_route_geojson;

mod report;
pub use self::report::*;
