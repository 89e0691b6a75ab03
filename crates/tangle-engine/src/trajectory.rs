//! Simulated pathology trajectories.

use nalgebra::{DMatrix, DVector};

use tangle_core::RegionId;

/// A simulated pathology trajectory.
///
/// Column `i` of the underlying matrix holds the per-region pathology
/// load at `times()[i]`, in the same order the times were requested.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    times: Vec<f64>,
    values: DMatrix<f64>,
}

impl Trajectory {
    pub(crate) fn new(times: Vec<f64>, values: DMatrix<f64>) -> Self {
        debug_assert_eq!(times.len(), values.ncols());
        Self { times, values }
    }

    /// Number of regions tracked.
    pub fn regions(&self) -> usize {
        self.values.nrows()
    }

    /// Number of evaluated time points.
    pub fn samples(&self) -> usize {
        self.values.ncols()
    }

    /// The evaluated time points, in request order.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Pathology load in `region` at sample `sample`.
    ///
    /// # Panics
    ///
    /// Panics when `region` or `sample` is out of range.
    pub fn value(&self, region: RegionId, sample: usize) -> f64 {
        self.values[(region.index(), sample)]
    }

    /// The full per-region state at sample `sample`.
    ///
    /// # Panics
    ///
    /// Panics when `sample` is out of range.
    pub fn state(&self, sample: usize) -> DVector<f64> {
        self.values.column(sample).into_owned()
    }

    /// Total pathology load at sample `sample`, summed over regions.
    ///
    /// # Panics
    ///
    /// Panics when `sample` is out of range.
    pub fn total(&self, sample: usize) -> f64 {
        self.values.column(sample).sum()
    }

    /// Region-by-sample matrix of pathology loads.
    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }
}
