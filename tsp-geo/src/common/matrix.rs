#[cfg(test)]
#[path = "../../tests/unit/common/matrix_test.rs"]
mod matrix_test;

use super::{Coordinate, DistanceUnit, Place, geodesic_distance};
use tsp_core::models::CostMatrix;
use tsp_core::prelude::{Float, GenericResult, InfoLogger};
use tsp_core::utils::{Timer, parallel_foreach_mut};

/// Builds a symmetric cost matrix of geodesic distances between coordinates.
#[derive(Clone)]
pub struct MatrixBuilder {
    unit: DistanceUnit,
    is_rounded: bool,
    logger: Option<InfoLogger>,
}

impl MatrixBuilder {
    /// Creates a new builder which rounds distances to whole units.
    pub fn new(unit: DistanceUnit) -> Self {
        Self { unit, is_rounded: true, logger: None }
    }

    /// Sets whether distances are rounded to whole units.
    pub fn with_rounding(mut self, is_rounded: bool) -> Self {
        self.is_rounded = is_rounded;
        self
    }

    /// Sets a logger to report matrix creation time.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Returns a distance unit of matrix values.
    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    /// Creates a matrix for places keeping their order: vertex `i` is `places[i]`.
    pub fn build(&self, places: &[Place]) -> GenericResult<CostMatrix> {
        let coordinates = places.iter().map(|place| place.coordinate).collect::<Vec<_>>();

        self.build_from_coordinates(&coordinates)
    }

    /// Creates a matrix for coordinates, diagonal values are zero.
    pub fn build_from_coordinates(&self, coordinates: &[Coordinate]) -> GenericResult<CostMatrix> {
        let size = coordinates.len();

        let rows = Timer::measure_duration_with_callback(
            || {
                // each pair is calculated once: upper triangle in parallel, then mirrored
                let mut upper =
                    (0..size).map(|from| (from, vec![0.; size - from - 1])).collect::<Vec<(usize, Vec<Float>)>>();

                parallel_foreach_mut(upper.as_mut_slice(), |(from, row)| {
                    row.iter_mut().enumerate().for_each(|(offset, value)| {
                        *value = self.leg_cost(&coordinates[*from], &coordinates[*from + offset + 1])
                    })
                });

                let mut rows = vec![vec![0.; size]; size];
                for (from, row) in upper {
                    for (offset, value) in row.into_iter().enumerate() {
                        let to = from + offset + 1;
                        rows[from][to] = value;
                        rows[to][from] = value;
                    }
                }

                rows
            },
            |duration| {
                if let Some(logger) = self.logger.as_ref() {
                    (logger)(format!("cost matrix for {size} locations created in {}ms", duration.as_millis()).as_str())
                }
            },
        );

        Ok(CostMatrix::new(rows)?)
    }

    fn leg_cost(&self, from: &Coordinate, to: &Coordinate) -> Float {
        let value = self.unit.from_meters(geodesic_distance(from, to));

        if self.is_rounded { value.round() } else { value }
    }
}
