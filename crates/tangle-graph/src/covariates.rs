//! Region-by-covariate tables.

use nalgebra::{DMatrix, DVector};

use crate::error::GraphError;

/// `n x k` matrix mapping each region to `k` covariate values, such as
/// gene or cell-type expression levels.
///
/// `k = 0` is legal and leaves the model covariate-free: every weighted
/// combination degenerates to the zero vector.
#[derive(Clone, Debug, PartialEq)]
pub struct CovariateTable {
    values: DMatrix<f64>,
}

impl CovariateTable {
    /// Validate and wrap a covariate matrix.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NonFinite`] for NaN or infinite entries.
    /// Negative covariates are legal.
    pub fn new(values: DMatrix<f64>) -> Result<Self, GraphError> {
        for j in 0..values.ncols() {
            for i in 0..values.nrows() {
                if !values[(i, j)].is_finite() {
                    return Err(GraphError::NonFinite { row: i, col: j });
                }
            }
        }
        Ok(Self { values })
    }

    /// A covariate-free table for `regions` regions (`k = 0`).
    pub fn empty(regions: usize) -> Self {
        Self {
            values: DMatrix::zeros(regions, 0),
        }
    }

    /// Number of regions (rows).
    pub fn regions(&self) -> usize {
        self.values.nrows()
    }

    /// Number of covariates `k` (columns).
    pub fn ntypes(&self) -> usize {
        self.values.ncols()
    }

    /// Weighted per-region combination `U · w`.
    ///
    /// # Panics
    ///
    /// Panics if `w.len() != self.ntypes()`. Callers obtain `w` from a
    /// parameter split made with this table's `ntypes()`, which
    /// guarantees agreement.
    pub fn weighted(&self, w: &DVector<f64>) -> DVector<f64> {
        &self.values * w
    }

    /// The underlying `n x k` matrix.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.values
    }
}
