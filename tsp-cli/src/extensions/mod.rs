//! Contains command line extensions around the solver.

pub mod solve;
