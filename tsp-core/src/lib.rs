//! Core crate contains an exact solver for small instances of the ***Traveling Salesman Problem***.
//!
//! The solver implements the Held-Karp dynamic program over vertex subsets: it finds the minimum-cost
//! Hamiltonian cycle which starts and ends at vertex `0` of a complete graph given by a cost matrix.
//!
//! # Examples
//!
//! ```
//! use tsp_core::prelude::*;
//!
//! let matrix = CostMatrix::new(vec![
//!     vec![0., 1., 4., 2.],
//!     vec![1., 0., 3., 5.],
//!     vec![4., 3., 0., 1.],
//!     vec![2., 5., 1., 0.],
//! ])?;
//!
//! let solution = solve(&matrix)?;
//!
//! assert_eq!(solution.tour, vec![0, 3, 2, 1, 0]);
//! assert_eq!(solution.cost, 7.);
//! # Ok::<(), SolverError>(())
//! ```
//!
//! State space is exponential in the number of vertices, so the solver refuses instances above a configured
//! limit, see [`SolverConfig::with_max_vertices`](solver::SolverConfig::with_max_vertices).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
