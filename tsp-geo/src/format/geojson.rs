#[cfg(test)]
#[path = "../../tests/unit/format/geojson_test.rs"]
mod geojson_test;

use super::RouteReport;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::io::{BufWriter, Write};
use tsp_core::prelude::{Float, GenericResult};
use tsp_core::utils::compare_floats;

const START_COLOR: &str = "#5f9ea0";
const STOP_COLOR: &str = "#d63e2a";
const LINE_COLOR: &str = "#3388ff";

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type")]
enum Geometry {
    Point { coordinates: (Float, Float) },
    LineString { coordinates: Vec<(Float, Float)> },
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "type")]
struct Feature {
    pub properties: BTreeMap<String, String>,
    pub geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "type")]
struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl Eq for Geometry {}

impl PartialEq for Geometry {
    fn eq(&self, other: &Self) -> bool {
        let compare_pair = |l_coord: &(Float, Float), r_coord: &(Float, Float)| {
            compare_floats(l_coord.0, r_coord.0) == Ordering::Equal
                && compare_floats(l_coord.1, r_coord.1) == Ordering::Equal
        };

        match (self, other) {
            (Geometry::Point { coordinates: l_coord }, Geometry::Point { coordinates: r_coord }) => {
                compare_pair(l_coord, r_coord)
            }
            (Geometry::LineString { coordinates: l_coords }, Geometry::LineString { coordinates: r_coords }) => {
                l_coords.len() == r_coords.len()
                    && l_coords.iter().zip(r_coords.iter()).all(|(l_coord, r_coord)| compare_pair(l_coord, r_coord))
            }
            _ => false,
        }
    }
}

/// Serializes route into geo json format: a marker for each place and a line for each leg.
pub fn write_route_geojson<W: Write>(writer: BufWriter<W>, report: &RouteReport) -> GenericResult<()> {
    let geo_json = create_geojson_route(report);

    serde_json::to_writer_pretty(writer, &geo_json).map_err(|err| format!("cannot write geo json: '{err}'").into())
}

fn create_geojson_route(report: &RouteReport) -> FeatureCollection {
    let is_closed = report.stops.len() > 1
        && report.stops.first().map(|stop| &stop.name) == report.stops.last().map(|stop| &stop.name);
    let marker_count = if is_closed { report.stops.len() - 1 } else { report.stops.len() };

    let markers = report.stops.iter().take(marker_count).map(|stop| {
        let is_start = stop.visit_order == 0;
        Feature {
            properties: slice_to_map(&[
                ("marker-color", if is_start { START_COLOR } else { STOP_COLOR }),
                ("marker-size", "medium"),
                ("marker-symbol", if is_start { "home" } else { "marker" }),
                ("name", stop.name.as_str()),
                ("stop_idx", stop.visit_order.to_string().as_str()),
            ]),
            geometry: Geometry::Point { coordinates: (stop.lng, stop.lat) },
        }
    });

    let lines = report.stops.windows(2).zip(report.legs.iter()).map(|(pair, leg)| Feature {
        properties: slice_to_map(&[
            ("stroke", LINE_COLOR),
            ("stroke-width", "3"),
            ("from", leg.from.as_str()),
            ("to", leg.to.as_str()),
            ("distance", format!("{} {}", leg.distance, report.unit).as_str()),
        ]),
        geometry: Geometry::LineString { coordinates: vec![(pair[0].lng, pair[0].lat), (pair[1].lng, pair[1].lat)] },
    });

    FeatureCollection { features: markers.chain(lines).collect() }
}

fn slice_to_map(vec: &[(&str, &str)]) -> BTreeMap<String, String> {
    vec.iter().map(|&(key, value)| (key.to_string(), value.to_string())).collect()
}
