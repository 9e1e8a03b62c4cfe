//! A crate with logic used by the command line interface of the exact TSP solver.
//!
//! It reads problems either as a list of place names resolved with a csv gazetteer or as a plain json cost
//! matrix, applies a json configuration on top of the solver defaults and writes results as json and geo json.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

pub mod extensions;
