//! Contains common geographic models and the cost matrix builder.

mod coordinate;
pub use self::coordinate::*;

mod distance;
pub use self::distance::*;

mod matrix;
pub use self::matrix::MatrixBuilder;
