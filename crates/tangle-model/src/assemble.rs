//! System-matrix assembly.
//!
//! Turns validated inputs and one parameter split into the dense system
//! matrix `A = Γ − β·L` of the linear spread model `dx/dt = A·x`.

use nalgebra::{DMatrix, DVector};
use tangle_core::{ArraySource, ModelError, Parameters};
use tangle_graph::{column_laplacian, directed_blend, scale_columns, Connectome, CovariateTable};

use crate::growth::growth_diagonal;
use crate::volume::{apply_volume_correction, load_voxels};

/// Assembles the system matrix for one parameter split.
///
/// Construction order is fixed: blend the connectivity reading by `s`,
/// take the column-degree Laplacian, scale its columns by the covariate
/// spread factors `U·b + 1`, optionally volume-correct, then combine
/// with the growth diagonal as `A = Γ − β·L`.
///
/// # Errors
///
/// - [`ModelError::DimensionMismatch`] when the parameter split carries
///   a different covariate-type count than `covariates`.
/// - [`ModelError::VolumeData`] when `volume_source` is `Some` and the
///   voxel array cannot be loaded or validated.
///
/// # Panics
///
/// Panics if `covariates.regions() != connectome.regions()`. Model
/// construction validates that agreement before assembly runs.
pub fn system_matrix(
    connectome: &Connectome,
    covariates: &CovariateTable,
    params: &Parameters,
    volume_source: Option<&dyn ArraySource>,
) -> Result<DMatrix<f64>, ModelError> {
    if params.ntypes() != covariates.ntypes() {
        return Err(ModelError::DimensionMismatch {
            what: "covariate types",
            expected: covariates.ntypes(),
            found: params.ntypes(),
        });
    }

    let growth = growth_diagonal(&covariates.weighted(params.p()), params.alpha());

    let blended = directed_blend(connectome, params.s());
    let mut laplacian = scale_columns(column_laplacian(&blended), &covariates.weighted(params.b()));

    if let Some(source) = volume_source {
        let voxels = load_voxels(source, connectome.regions())?;
        laplacian = apply_volume_correction(laplacian, &voxels);
    }

    Ok(growth - laplacian * params.beta())
}

/// Initial state `x0 = γ · seed`.
///
/// The seed pattern fixes *where* pathology starts; `γ` fixes *how much*.
pub fn initial_state(seed: &DVector<f64>, gamma: f64) -> DVector<f64> {
    seed * gamma
}
