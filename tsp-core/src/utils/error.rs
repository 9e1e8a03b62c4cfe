#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Represents an error returned by the solver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolverError {
    /// Cost matrix is malformed: it is empty, not square, or has a negative or non-finite entry.
    InvalidInput(String),

    /// Vertex count is beyond the configured limit, state space would be too big.
    CapacityExceeded {
        /// Amount of vertices in the requested instance.
        vertices: usize,
        /// Maximum amount of vertices allowed.
        max: usize,
    },

    /// A tour cannot be recovered from the dynamic programming state.
    Unreachable(String),
}

impl Display for SolverError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::CapacityExceeded { vertices, max } => {
                write!(f, "capacity exceeded: {vertices} vertices requested, at most {max} supported")
            }
            Self::Unreachable(msg) => write!(f, "unreachable state: {msg}"),
        }
    }
}

impl std::error::Error for SolverError {}

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<SolverError> for GenericError {
    fn from(value: SolverError) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<Self> for GenericError {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for GenericError {}

impl Hash for GenericError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
