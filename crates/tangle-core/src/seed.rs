//! Initial-pathology seed vectors.

use nalgebra::DVector;

use crate::error::ModelError;
use crate::region::RegionId;

/// Length-`n` non-negative vector marking initial-pathology regions.
///
/// Typically binary: `1.0` in seeded regions, `0.0` elsewhere. The model
/// rescales it by `gamma` to form the initial state `x0`.
#[derive(Clone, Debug, PartialEq)]
pub struct SeedVector {
    values: DVector<f64>,
}

impl SeedVector {
    /// Wrap an explicit per-region seed weighting.
    pub fn from_vec(values: Vec<f64>) -> Self {
        Self {
            values: DVector::from_vec(values),
        }
    }

    /// Binary seed with a single seeded region.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DimensionMismatch`] if `region` is out of
    /// range for `regions`.
    pub fn single(regions: usize, region: RegionId) -> Result<Self, ModelError> {
        Self::regions(regions, &[region])
    }

    /// Binary seed with `1.0` in each listed region.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DimensionMismatch`] if any listed region is
    /// out of range for `regions`.
    pub fn regions(regions: usize, seeded: &[RegionId]) -> Result<Self, ModelError> {
        let mut values = DVector::zeros(regions);
        for r in seeded {
            if r.index() >= regions {
                return Err(ModelError::DimensionMismatch {
                    what: "seed region index",
                    expected: regions,
                    found: r.index(),
                });
            }
            values[r.index()] = 1.0;
        }
        Ok(Self { values })
    }

    /// Number of regions covered by this seed.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the seed covers zero regions.
    pub fn is_empty(&self) -> bool {
        self.values.len() == 0
    }

    /// The underlying per-region weights.
    pub fn values(&self) -> &DVector<f64> {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_marks_one_region() {
        let seed = SeedVector::single(4, RegionId(2)).unwrap();
        assert_eq!(seed.len(), 4);
        assert_eq!(seed.values().as_slice(), &[0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn regions_marks_each_listed_region() {
        let seed = SeedVector::regions(5, &[RegionId(0), RegionId(4)]).unwrap();
        assert_eq!(seed.values().as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn out_of_range_region_fails() {
        match SeedVector::single(3, RegionId(3)) {
            Err(ModelError::DimensionMismatch {
                expected: 3,
                found: 3,
                ..
            }) => {}
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn from_vec_keeps_weights() {
        let seed = SeedVector::from_vec(vec![0.5, 0.0, 2.0]);
        assert_eq!(seed.len(), 3);
        assert_eq!(seed.values()[2], 2.0);
    }
}
