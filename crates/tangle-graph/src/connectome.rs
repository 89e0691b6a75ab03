//! Validated connectivity matrices.

use nalgebra::DMatrix;
use tangle_core::RegionId;

use crate::error::GraphError;

/// Square matrix of non-negative edge weights over `n` regions.
///
/// Directed and possibly asymmetric. The matrix is stored exactly as
/// supplied; the directionality parameter later chooses between the
/// as-given (retrograde) and transposed (anterograde) readings, so no
/// orientation is imposed here.
///
/// # Examples
///
/// ```
/// use nalgebra::DMatrix;
/// use tangle_core::RegionId;
/// use tangle_graph::Connectome;
///
/// let c = Connectome::new(DMatrix::from_row_slice(3, 3, &[
///     0.0, 1.0, 0.0,
///     0.0, 0.0, 1.0,
///     1.0, 0.0, 0.0,
/// ]))
/// .unwrap();
/// assert_eq!(c.regions(), 3);
/// assert_eq!(c.weight(RegionId(0), RegionId(1)), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Connectome {
    weights: DMatrix<f64>,
}

impl Connectome {
    /// Validate and wrap a connectivity matrix.
    ///
    /// # Errors
    ///
    /// - [`GraphError::NotSquare`] if rows != columns
    /// - [`GraphError::Empty`] for a 0x0 matrix
    /// - [`GraphError::NonFinite`] for NaN or infinite entries
    /// - [`GraphError::NegativeWeight`] for negative entries
    pub fn new(weights: DMatrix<f64>) -> Result<Self, GraphError> {
        if weights.nrows() != weights.ncols() {
            return Err(GraphError::NotSquare {
                rows: weights.nrows(),
                cols: weights.ncols(),
            });
        }
        if weights.nrows() == 0 {
            return Err(GraphError::Empty);
        }
        for j in 0..weights.ncols() {
            for i in 0..weights.nrows() {
                let v = weights[(i, j)];
                if !v.is_finite() {
                    return Err(GraphError::NonFinite { row: i, col: j });
                }
                if v < 0.0 {
                    return Err(GraphError::NegativeWeight {
                        row: i,
                        col: j,
                        value: v,
                    });
                }
            }
        }
        Ok(Self { weights })
    }

    /// Number of regions `n`.
    pub fn regions(&self) -> usize {
        self.weights.nrows()
    }

    /// The raw weight at `(row, col)`.
    pub fn weight(&self, row: RegionId, col: RegionId) -> f64 {
        self.weights[(row.index(), col.index())]
    }

    /// The underlying `n x n` weight matrix.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.weights
    }
}
