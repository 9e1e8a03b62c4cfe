//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;
use tsp_core::prelude::{InfoLogger, Parallelism, SolverConfig};
use tsp_core::solver::MAX_SUPPORTED_VERTICES;
use tsp_geo::common::{DistanceUnit, MatrixBuilder};

/// A solver run configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Specifies exact solver settings.
    pub solver: Option<SolverSection>,
    /// Specifies how distances between places are calculated.
    pub distance: Option<DistanceSection>,
    /// Specifies logging settings.
    pub logging: Option<LoggingSection>,
}

/// Exact solver settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverSection {
    /// Max amount of vertices accepted by the solver. Default is 20.
    pub max_vertices: Option<usize>,
    /// Specifies how subset tables are filled. Default is sequential.
    pub parallelism: Option<ParallelismType>,
}

/// Specifies how subset tables are filled.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
#[serde(rename_all = "camelCase")]
pub enum ParallelismType {
    /// Masks are processed one by one.
    Sequential,
    /// Masks of the same size are processed in parallel.
    Layered {
        /// Amount of threads. Default is number of cpus.
        threads: Option<usize>,
    },
}

/// Distance calculation settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceSection {
    /// A unit of distance. Default is miles.
    pub unit: Option<DistanceUnit>,
    /// Specifies whether distances are rounded to whole units. Default is true.
    pub rounding: Option<bool>,
}

/// Logging settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingSection {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
}

impl Config {
    /// Checks whether logging is enabled.
    pub fn is_logging_enabled(&self) -> bool {
        self.logging.as_ref().is_some_and(|logging| logging.enabled)
    }
}

/// Reads config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates a logger which writes messages to stderr, keeping stdout for results.
pub fn create_default_logger() -> InfoLogger {
    Arc::new(|msg: &str| eprintln!("{msg}"))
}

/// Checks that max vertices value is supported by the solver.
pub fn check_max_vertices(max_vertices: usize) -> Result<usize, String> {
    if (1..=MAX_SUPPORTED_VERTICES).contains(&max_vertices) {
        Ok(max_vertices)
    } else {
        Err(format!("max vertices must be in range [1, {MAX_SUPPORTED_VERTICES}], got '{max_vertices}'"))
    }
}

/// Converts parallelism settings, unspecified amount of threads means number of cpus.
pub fn get_parallelism(parallelism: &ParallelismType) -> Parallelism {
    match parallelism {
        ParallelismType::Sequential => Parallelism::Sequential,
        ParallelismType::Layered { threads } => {
            Parallelism::Layered { threads: threads.filter(|&threads| threads > 0).unwrap_or_else(num_cpus::get) }
        }
    }
}

/// Creates solver settings from config.
pub fn create_solver_config(config: &Config, logger: Option<InfoLogger>) -> Result<SolverConfig, String> {
    let mut solver_config = SolverConfig::default();

    if let Some(section) = config.solver.as_ref() {
        if let Some(max_vertices) = section.max_vertices {
            solver_config = solver_config.with_max_vertices(check_max_vertices(max_vertices)?);
        }

        if let Some(parallelism) = section.parallelism.as_ref() {
            solver_config = solver_config.with_parallelism(get_parallelism(parallelism));
        }
    }

    Ok(match logger {
        Some(logger) => solver_config.with_logger(logger),
        None => solver_config,
    })
}

/// Creates a matrix builder from config.
pub fn create_matrix_builder(config: &Config, logger: Option<InfoLogger>) -> MatrixBuilder {
    let (unit, is_rounded) = config
        .distance
        .as_ref()
        .map(|distance| (distance.unit.unwrap_or_default(), distance.rounding.unwrap_or(true)))
        .unwrap_or((DistanceUnit::default(), true));

    let builder = MatrixBuilder::new(unit).with_rounding(is_rounded);

    match logger {
        Some(logger) => builder.with_logger(logger),
        None => builder,
    }
}
