//! Trajectory-evaluation errors.

use std::error::Error;
use std::fmt;

/// Errors raised when evaluating a trajectory.
#[derive(Debug, Clone)]
pub enum PropagateError {
    /// The system matrix is not square.
    NotSquare {
        /// Rows of the offending matrix.
        rows: usize,
        /// Columns of the offending matrix.
        cols: usize,
    },
    /// The initial state's length differs from the system dimension.
    StateLength {
        /// System dimension (rows of the system matrix).
        dim: usize,
        /// Entries in the supplied state.
        found: usize,
    },
}

impl fmt::Display for PropagateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropagateError::NotSquare { rows, cols } => {
                write!(f, "system matrix is {rows}x{cols}, expected square")
            }
            PropagateError::StateLength { dim, found } => {
                write!(f, "initial state has {found} entries, expected {dim}")
            }
        }
    }
}

impl Error for PropagateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_shape() {
        let msg = PropagateError::NotSquare { rows: 3, cols: 2 }.to_string();
        assert!(msg.contains("3x2"));

        let msg = PropagateError::StateLength { dim: 4, found: 2 }.to_string();
        assert!(msg.contains("2 entries"));
        assert!(msg.contains("expected 4"));
    }
}
