#[cfg(test)]
#[path = "../../tests/unit/models/solution_test.rs"]
mod solution_test;

use crate::models::CostMatrix;
use crate::utils::Float;

/// Represents an optimal closed tour and its total cost.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// Visiting order of `n + 1` vertices, it starts and ends at vertex `0`.
    pub tour: Vec<usize>,
    /// Sum of the costs of all consecutive pairs in the tour.
    pub cost: Float,
}

impl Solution {
    /// Returns amount of distinct vertices visited by the tour.
    pub fn vertices(&self) -> usize {
        self.tour.len().saturating_sub(1)
    }

    /// Returns consecutive vertex pairs of the tour.
    pub fn legs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.tour.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

/// Calculates the cost of the tour directly from the matrix.
///
/// A self-loop is free, so a degenerate `[0, 0]` tour costs nothing.
pub fn tour_cost(matrix: &CostMatrix, tour: &[usize]) -> Float {
    tour.windows(2)
        .filter(|pair| pair[0] != pair[1])
        .fold(0., |acc, pair| acc + matrix.cost(pair[0], pair[1]))
}
