//! Column-degree graph Laplacian and covariate edge scaling.

use nalgebra::{DMatrix, DVector};

/// Column-degree Laplacian `L_raw = diag(coldegree) - C_dir`, where
/// `coldegree[j] = Σ_i C_dir[i,j]`.
///
/// Every column of the result sums to zero. That invariant is what makes
/// pure diffusion conservative: with no growth terms, total pathology is
/// constant along the trajectory.
pub fn column_laplacian(c_dir: &DMatrix<f64>) -> DMatrix<f64> {
    let n = c_dir.nrows();
    let coldegree = DVector::from_iterator(n, c_dir.column_iter().map(|col| col.sum()));
    DMatrix::from_diagonal(&coldegree) - c_dir
}

/// Scale every Laplacian entry by its column's covariate factor:
/// `L[i,j] = L_raw[i,j] · (s_b[j] + 1)`, with `s_b = U·b`.
///
/// The factor indexes the column. Column scaling multiplies each zero
/// column sum by a constant, so the conservation invariant survives.
pub fn scale_columns(mut l: DMatrix<f64>, s_b: &DVector<f64>) -> DMatrix<f64> {
    for (j, mut col) in l.column_iter_mut().enumerate() {
        col *= s_b[j] + 1.0;
    }
    l
}
