use crate::utils::InfoLogger;

/// Hard limit of vertices: tables take several gigabytes at this size.
pub const MAX_SUPPORTED_VERTICES: usize = 24;

/// Default limit of vertices: tables take a few hundred megabytes at this size.
pub const DEFAULT_MAX_VERTICES: usize = 20;

/// Specifies how the dynamic programming table is filled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Parallelism {
    /// Masks are processed one by one in increasing numeric order.
    #[default]
    Sequential,

    /// Masks are processed layer by layer (by amount of visited vertices), states within a layer are
    /// computed on a thread pool. Results are identical to the sequential fill.
    Layered {
        /// Amount of threads, zero means amount of logical cpus.
        threads: usize,
    },
}

/// Specifies solver settings.
#[derive(Clone)]
pub struct SolverConfig {
    pub(crate) max_vertices: usize,
    pub(crate) parallelism: Parallelism,
    pub(crate) logger: Option<InfoLogger>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { max_vertices: DEFAULT_MAX_VERTICES, parallelism: Parallelism::default(), logger: None }
    }
}

impl SolverConfig {
    /// Sets maximum amount of vertices accepted by the solver. The value is capped by [`MAX_SUPPORTED_VERTICES`].
    pub fn with_max_vertices(mut self, max_vertices: usize) -> Self {
        self.max_vertices = max_vertices.min(MAX_SUPPORTED_VERTICES);
        self
    }

    /// Sets the way the table is filled.
    pub fn with_parallelism(mut self, parallelism: Parallelism) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Sets a logger which receives progress messages.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Returns maximum amount of vertices accepted by the solver.
    pub fn max_vertices(&self) -> usize {
        self.max_vertices
    }

    /// Returns the way the table is filled.
    pub fn parallelism(&self) -> Parallelism {
        self.parallelism
    }
}
