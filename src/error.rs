/*!
# Errors

Only genuine failures are errors. Absent results (a missed search, an empty pop,
an unreachable node) are expressed as `Option::None` by the respective operation.
*/

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("capacity of {capacity} exceeded")]
    CapacityExceeded { capacity: usize },

    #[error("capacity must be positive")]
    ZeroCapacity,

    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("unknown node label: {0}")]
    UnknownNode(String),

    #[error("length mismatch: {left} vs {right}")]
    MismatchedLengths { left: usize, right: usize },
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
