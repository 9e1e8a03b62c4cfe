//! Input and output formats of the solve command.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/formats_test.rs"]
mod formats_test;

use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};
use tsp_core::prelude::{CostMatrix, Float, GenericResult, Solution};

/// A solution of the problem defined by a plain cost matrix.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixSolution {
    /// Visiting order of vertices, starts and ends at vertex `0`.
    pub tour: Vec<usize>,
    /// Total tour cost.
    pub cost: Float,
    /// Amount of distinct vertices.
    pub vertices: usize,
}

impl From<&Solution> for MatrixSolution {
    fn from(solution: &Solution) -> Self {
        Self { tour: solution.tour.clone(), cost: solution.cost, vertices: solution.vertices() }
    }
}

/// Reads a cost matrix from json: an array of rows, each row is an array of numbers.
pub fn read_matrix<R: Read>(reader: BufReader<R>) -> GenericResult<CostMatrix> {
    let rows: Vec<Vec<Float>> =
        serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize matrix: '{err}'"))?;

    Ok(CostMatrix::new(rows)?)
}

/// Writes a solution of matrix problem as pretty json.
pub fn write_matrix_solution<W: Write>(writer: BufWriter<W>, solution: &Solution) -> GenericResult<()> {
    serde_json::to_writer_pretty(writer, &MatrixSolution::from(solution))
        .map_err(|err| format!("cannot write solution: '{err}'").into())
}
