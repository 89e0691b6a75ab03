//! Error types for graph construction.

use std::fmt;

/// Errors arising from connectivity or covariate matrix validation.
#[derive(Debug, Clone)]
pub enum GraphError {
    /// The connectivity matrix is not square.
    NotSquare {
        /// Row count supplied.
        rows: usize,
        /// Column count supplied.
        cols: usize,
    },
    /// Attempted to construct a graph with zero regions.
    Empty,
    /// A matrix entry is NaN or infinite.
    NonFinite {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
    },
    /// A connectivity weight is negative.
    NegativeWeight {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        col: usize,
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSquare { rows, cols } => {
                write!(f, "connectivity matrix must be square, got {rows}x{cols}")
            }
            Self::Empty => write!(f, "graph must have at least one region"),
            Self::NonFinite { row, col } => {
                write!(f, "entry ({row}, {col}) is not finite")
            }
            Self::NegativeWeight { row, col, value } => {
                write!(f, "edge weight ({row}, {col}) must be non-negative, got {value}")
            }
        }
    }
}

impl std::error::Error for GraphError {}
