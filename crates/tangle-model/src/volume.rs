//! Per-region volume correction of the transport term.
//!
//! Large regions dilute incoming pathology over more tissue than small
//! ones. The correction rescales each Laplacian row by the ratio of the
//! mean voxel count to that region's own, so flux is expressed per unit
//! volume.

use nalgebra::{DMatrix, DVector};
use tangle_core::{ArraySource, VolumeError};

/// Name of the data file holding the voxel-volume array.
pub const VOLUME_FILE: &str = "regionvoxels";

/// Key of the voxel array inside [`VOLUME_FILE`].
pub const VOLUME_KEY: &str = "voxels";

/// Fetches and validates the per-region voxel counts for `regions` regions.
///
/// The stored array may cover all regions directly, or a single hemisphere
/// (half the regions); hemisphere data is stacked onto itself so both
/// hemispheres share one set of counts.
///
/// # Errors
///
/// - [`VolumeError::MissingKey`] when the file lacks the
///   [`VOLUME_KEY`] array.
/// - [`VolumeError::Length`] when the array is neither `regions` nor
///   `regions / 2` entries long.
/// - [`VolumeError::NonPositive`] when any count is zero, negative, or
///   not finite.
/// - Loader errors ([`VolumeError::Io`], [`VolumeError::Parse`]) pass
///   through from the source.
pub fn load_voxels(
    source: &dyn ArraySource,
    regions: usize,
) -> Result<DVector<f64>, VolumeError> {
    let arrays = source.load(VOLUME_FILE)?;
    let raw = arrays
        .get(VOLUME_KEY)
        .ok_or_else(|| VolumeError::MissingKey {
            key: VOLUME_KEY.to_string(),
        })?;

    let stacked: Vec<f64> = if raw.len() == regions {
        raw.clone()
    } else if raw.len() * 2 == regions {
        log::debug!(
            "stacking {} hemisphere voxel counts to cover {} regions",
            raw.len(),
            regions
        );
        raw.iter().chain(raw.iter()).copied().collect()
    } else {
        return Err(VolumeError::Length {
            regions,
            found: raw.len(),
        });
    };

    for (index, &value) in stacked.iter().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            return Err(VolumeError::NonPositive { index, value });
        }
    }

    Ok(DVector::from_vec(stacked))
}

/// Applies the volume correction `L ← mean(vox) · diag(1 / vox) · L`.
///
/// Row `i` is scaled by `mean(vox) / vox[i]`, expressing what each region
/// accumulates per unit volume. Row scaling does not preserve the zero
/// column sums of the uncorrected Laplacian, so corrected transport is
/// not mass-conserving.
pub fn apply_volume_correction(mut laplacian: DMatrix<f64>, voxels: &DVector<f64>) -> DMatrix<f64> {
    let mean = voxels.mean();
    for (i, mut row) in laplacian.row_iter_mut().enumerate() {
        row *= mean / voxels[i];
    }
    laplacian
}
