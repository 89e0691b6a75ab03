//! Spread-independent growth term.

use nalgebra::{DMatrix, DVector};

/// Builds the diagonal growth matrix `Γ = diag(g) + α·I`.
///
/// `covariate_growth` is the per-region growth term `U·p`; `alpha` is the
/// baseline growth rate shared by every region. `Γ` acts node-locally and
/// is the only part of the system matrix that can change total load
/// without moving it between regions.
pub fn growth_diagonal(covariate_growth: &DVector<f64>, alpha: f64) -> DMatrix<f64> {
    DMatrix::from_diagonal(&covariate_growth.add_scalar(alpha))
}
