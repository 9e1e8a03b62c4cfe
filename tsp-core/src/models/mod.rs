//! A collection of models to represent the problem and its solution.

mod matrix;
pub use self::matrix::CostMatrix;

mod solution;
pub use self::solution::{Solution, tour_cost};
