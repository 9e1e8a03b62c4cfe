#[cfg(test)]
#[path = "../../tests/unit/format/report_test.rs"]
mod report_test;

use crate::common::{DistanceUnit, Place};
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};
use tsp_core::models::{CostMatrix, Solution};
use tsp_core::prelude::{Float, GenericResult};

/// A stop of the route in visiting order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStop {
    /// Position of the stop in the route, the start has zero.
    pub visit_order: usize,
    /// A place name.
    pub name: String,
    /// Latitude of the place.
    pub lat: Float,
    /// Longitude of the place.
    pub lng: Float,
}

/// A leg between two consecutive stops.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLeg {
    /// A name of the place the leg starts at.
    pub from: String,
    /// A name of the place the leg ends at.
    pub to: String,
    /// A leg distance as it is used by the solver.
    pub distance: Float,
}

/// A route which visits all requested places and returns to the first one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteReport {
    /// Stops in visiting order, the first place is repeated at the end.
    pub stops: Vec<RouteStop>,
    /// Legs between consecutive stops.
    pub legs: Vec<RouteLeg>,
    /// Total route distance.
    pub total_distance: Float,
    /// A unit of distances.
    pub unit: DistanceUnit,
}

impl RouteReport {
    /// Creates a report mapping tour vertices back to places.
    pub fn new(places: &[Place], solution: &Solution, matrix: &CostMatrix, unit: DistanceUnit) -> GenericResult<Self> {
        if places.len() != matrix.size() {
            return Err(format!("expected {} places, got {}", matrix.size(), places.len()).into());
        }

        let get_place = |vertex: usize| {
            places.get(vertex).ok_or_else(|| format!("tour has unknown vertex: {vertex}"))
        };

        let stops = solution
            .tour
            .iter()
            .enumerate()
            .map(|(visit_order, &vertex)| {
                get_place(vertex).map(|place| RouteStop {
                    visit_order,
                    name: place.name.clone(),
                    lat: place.coordinate.lat,
                    lng: place.coordinate.lng,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let legs = solution
            .legs()
            .map(|(from, to)| {
                let distance = if from == to { 0. } else { matrix.cost(from, to) };

                Ok(RouteLeg { from: get_place(from)?.name.clone(), to: get_place(to)?.name.clone(), distance })
            })
            .collect::<Result<Vec<_>, String>>()?;

        Ok(Self { stops, legs, total_distance: solution.cost, unit })
    }

    /// Returns stop names in visiting order.
    pub fn stop_names(&self) -> Vec<&str> {
        self.stops.iter().map(|stop| stop.name.as_str()).collect()
    }
}

/// Writes the report as pretty json.
pub fn write_route_json<W: Write>(writer: BufWriter<W>, report: &RouteReport) -> GenericResult<()> {
    serde_json::to_writer_pretty(writer, report).map_err(|err| format!("cannot write route: '{err}'").into())
}
