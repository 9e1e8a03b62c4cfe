//! The solver module contains the Held-Karp algorithm and its facade.
//!
//! The facade [`Solver`] validates the instance size, fills the subset tables and reconstructs an optimal tour.
//! Tables live only for the duration of one call.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

mod config;
pub use self::config::*;

mod reconstruction;
mod subset_dp;

use self::reconstruction::reconstruct_tour;
use self::subset_dp::{SubsetTables, fill_layered, fill_sequential};
use crate::models::{CostMatrix, Solution};
use crate::utils::{Float, SolverError, ThreadPool, Timer};

/// Solves the problem with default settings.
pub fn solve(matrix: &CostMatrix) -> Result<Solution, SolverError> {
    Solver::default().solve(matrix)
}

/// Validates the rows as a cost matrix and solves the problem with default settings.
pub fn solve_rows(rows: Vec<Vec<Float>>) -> Result<Solution, SolverError> {
    solve(&CostMatrix::new(rows)?)
}

/// An exact solver which finds the cheapest closed tour starting at vertex `0`.
#[derive(Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Creates a new instance of `Solver`.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Finds the optimal tour. Fails fast with [`SolverError::CapacityExceeded`] before any table is allocated,
    /// or when memory for the tables cannot be reserved.
    pub fn solve(&self, matrix: &CostMatrix) -> Result<Solution, SolverError> {
        let size = matrix.size();

        if size > self.config.max_vertices {
            return Err(SolverError::CapacityExceeded { vertices: size, max: self.config.max_vertices });
        }

        self.log(|| format!("solving tour with {size} vertices, {} states", (1_usize << size) * size));

        let tables = Timer::measure_duration_with_callback(
            || self.fill_tables(matrix),
            |duration| self.log(|| format!("subset tables filled in {}ms", duration.as_millis())),
        )?;

        let solution = reconstruct_tour(matrix, &tables)?;
        self.log(|| format!("optimal tour cost: {}", solution.cost));

        Ok(solution)
    }

    fn fill_tables(&self, matrix: &CostMatrix) -> Result<SubsetTables, SolverError> {
        match self.config.parallelism {
            Parallelism::Sequential => fill_sequential(matrix),
            Parallelism::Layered { threads } => {
                let pool = ThreadPool::new(threads);
                self.log(|| format!("filling layers using {} threads", pool.current_num_threads()));

                fill_layered(matrix, &pool, |visited, states| {
                    self.log(|| format!("layer with {visited} visited vertices: {states} masks"))
                })
            }
        }
    }

    /// Passes a message to the logger, the message is built only when the logger is set.
    fn log<F>(&self, message: F)
    where
        F: FnOnce() -> String,
    {
        if let Some(logger) = self.config.logger.as_ref() {
            (logger)(message().as_str())
        }
    }
}
