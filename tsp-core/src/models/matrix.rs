#[cfg(test)]
#[path = "../../tests/unit/models/matrix_test.rs"]
mod matrix_test;

use crate::utils::{Float, SolverError};

/// Represents a square matrix of travel costs between vertices of a complete graph.
///
/// Values are stored flat: the cost of going from `from` to `to` is kept at `from * size + to`.
/// Every off-diagonal entry is a finite non-negative number; diagonal entries are kept as they are
/// and never used by the solver.
#[derive(Clone, Debug, PartialEq)]
pub struct CostMatrix {
    size: usize,
    values: Vec<Float>,
}

impl CostMatrix {
    /// Creates a new cost matrix from its rows.
    pub fn new(rows: Vec<Vec<Float>>) -> Result<Self, SolverError> {
        let size = rows.len();

        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(SolverError::InvalidInput(format!(
                "non-square matrix: row {idx} has {} items, expected {size}",
                row.len()
            )));
        }

        Self::validated(size, rows.into_iter().flatten().collect())
    }

    /// Creates a new cost matrix from flatten values in row-major order.
    pub fn from_flat(values: Vec<Float>) -> Result<Self, SolverError> {
        let size = (values.len() as Float).sqrt().round() as usize;

        if size * size != values.len() {
            return Err(SolverError::InvalidInput(format!("non-square flatten matrix: {} items", values.len())));
        }

        Self::validated(size, values)
    }

    /// Returns amount of vertices.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cost of traveling directly from `from` to `to`.
    #[inline]
    pub fn cost(&self, from: usize, to: usize) -> Float {
        self.values[from * self.size + to]
    }

    fn validated(size: usize, values: Vec<Float>) -> Result<Self, SolverError> {
        if size == 0 {
            return Err(SolverError::InvalidInput("matrix has no vertices".to_string()));
        }

        let invalid = values
            .iter()
            .enumerate()
            .map(|(idx, &value)| (idx / size, idx % size, value))
            .find(|&(from, to, value)| from != to && !(value.is_finite() && value >= 0.));

        if let Some((from, to, value)) = invalid {
            return Err(SolverError::InvalidInput(format!(
                "cost from {from} to {to} must be finite and non-negative, got {value}"
            )));
        }

        Ok(Self { size, values })
    }
}
