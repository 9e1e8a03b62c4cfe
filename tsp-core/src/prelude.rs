//! This module reimports commonly used types.

pub use crate::models::{CostMatrix, Solution, tour_cost};

pub use crate::solver::{Parallelism, Solver, SolverConfig, solve, solve_rows};

pub use crate::utils::{Float, GenericError, GenericResult, InfoLogger, SolverError};
