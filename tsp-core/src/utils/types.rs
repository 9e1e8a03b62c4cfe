use std::sync::Arc;

/// Alias to a scalar floating type.
///
/// Costs, distances and durations are all expressed with this type.
pub type Float = f64;

/// Specifies a logger type used to report progress of long running operations.
///
/// Nothing is printed by the solver itself: a caller injects an implementation which decides where messages go.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;
