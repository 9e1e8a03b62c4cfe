#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

use rayon::prelude::*;
use rayon::{ThreadPool as RayonThreadPool, ThreadPoolBuilder};

/// Represents a thread pool wrapper.
pub struct ThreadPool {
    inner: RayonThreadPool,
}

impl ThreadPool {
    /// Creates a new instance of `ThreadPool`. Zero threads means rayon's default (amount of logical cpus).
    pub fn new(num_threads: usize) -> Self {
        Self {
            inner: ThreadPoolBuilder::new().num_threads(num_threads).build().expect("cannot build a thread pool"),
        }
    }

    /// Returns amount of threads in the pool.
    pub fn current_num_threads(&self) -> usize {
        self.inner.current_num_threads()
    }

    /// Executes given operation on thread pool.
    pub fn execute<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.inner.install(op)
    }
}

/// Maps collection and collects results into vector in parallel, order of the source is preserved.
pub fn parallel_collect<T, F, R>(source: &[T], map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(&T) -> R + Sync + Send,
    R: Send,
{
    source.par_iter().map(map_op).collect()
}

/// Performs mutable foreach in parallel.
pub fn parallel_foreach_mut<T, F>(source: &mut [T], action: F)
where
    T: Send + Sync,
    F: Fn(&mut T) + Send + Sync,
{
    source.par_iter_mut().for_each(action)
}
