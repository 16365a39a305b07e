//! Error types for alignment operations.

use thiserror::Error;

use crate::block::Axis;

/// Result type alias for alignment operations.
pub type AlignResult<T> = Result<T, AlignError>;

/// Which of the two blocks in an alignment call an error refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BlockRole {
    Reference,
    Other,
}

impl std::fmt::Display for BlockRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockRole::Reference => write!(f, "reference"),
            BlockRole::Other => write!(f, "other"),
        }
    }
}

/// Precondition violations surfaced to the caller.
///
/// These represent caller bugs, not recoverable runtime conditions; they
/// identify the block and axis at fault so upstream tooling can report it.
#[derive(Debug, Error, PartialEq)]
pub enum AlignError {
    /// Bounds are not strictly ordered (`min < max`) along an axis.
    #[error("{role} block has invalid bounds on axis {axis}: {min} is not less than {max}")]
    InvalidBounds {
        role: BlockRole,
        axis: Axis,
        min: f64,
        max: f64,
    },

    /// A cell count is zero.
    #[error("{role} block has a zero cell count on axis {axis}")]
    ZeroCellCount { role: BlockRole, axis: Axis },

    /// The other block's cells are finer than the reference's. Alignment
    /// only coarsens the other block, never refines it.
    #[error("other block is finer than the reference on axis {axis} (cell size ratio {ratio})")]
    FinerThanReference { axis: Axis, ratio: f64 },
}
