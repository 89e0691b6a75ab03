//! Single-point state evaluation via the matrix exponential.

use nalgebra::{DMatrix, DVector};

use crate::error::PropagateError;

pub(crate) fn check_dimensions(
    a: &DMatrix<f64>,
    x0: &DVector<f64>,
) -> Result<(), PropagateError> {
    if a.nrows() != a.ncols() {
        return Err(PropagateError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    if x0.len() != a.nrows() {
        return Err(PropagateError::StateLength {
            dim: a.nrows(),
            found: x0.len(),
        });
    }
    Ok(())
}

pub(crate) fn state_unchecked(a: &DMatrix<f64>, x0: &DVector<f64>, t: f64) -> DVector<f64> {
    (a * t).exp() * x0
}

/// Evaluates `x(t) = exp(A·t)·x0` at a single time point.
///
/// The exponential is computed by scaling-and-squaring with Padé
/// approximants, which stays accurate for the stiff, non-normal matrices
/// strong growth/transport parameters produce.
///
/// # Errors
///
/// - [`PropagateError::NotSquare`] when `a` is not square.
/// - [`PropagateError::StateLength`] when `x0` does not match `a`'s
///   dimension.
pub fn state_at(
    a: &DMatrix<f64>,
    x0: &DVector<f64>,
    t: f64,
) -> Result<DVector<f64>, PropagateError> {
    check_dimensions(a, x0)?;
    Ok(state_unchecked(a, x0, t))
}
