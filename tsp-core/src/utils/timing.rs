use std::time::{Duration, Instant};

/// Implements performance timer functionality.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a new timer.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Runs the action and reports its duration to the callback, the action's result is returned.
    pub fn measure_duration_with_callback<R, F, C>(action: F, callback: C) -> R
    where
        F: FnOnce() -> R,
        C: FnOnce(Duration),
    {
        let timer = Timer::start();
        let result = action();
        callback(timer.start.elapsed());

        result
    }
}
