//! Reusable graph and seed fixtures.
//!
//! Deterministic building blocks shared by unit tests, integration tests,
//! and benchmarks:
//!
//! - [`ring3`] / [`ring4`] — directed unit-weight cycles.
//! - [`ones_column`] — single all-ones covariate column.
//! - [`seed_origin`] — unit mass in region zero.
//! - [`random_connectome`] — seeded dense random weights.

use nalgebra::DMatrix;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use tangle_core::{RegionId, SeedVector};
use tangle_graph::{Connectome, CovariateTable};

/// Three regions joined in a directed unit-weight cycle `0 → 1 → 2 → 0`.
pub fn ring3() -> Connectome {
    Connectome::new(DMatrix::from_row_slice(
        3,
        3,
        &[0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0],
    ))
    .unwrap()
}

/// Four regions joined in a directed unit-weight cycle `0 → 1 → 2 → 3 → 0`.
pub fn ring4() -> Connectome {
    Connectome::new(DMatrix::from_row_slice(
        4,
        4,
        &[
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, //
            1.0, 0.0, 0.0, 0.0,
        ],
    ))
    .unwrap()
}

/// Covariate table holding a single all-ones column.
pub fn ones_column(regions: usize) -> CovariateTable {
    CovariateTable::new(DMatrix::from_element(regions, 1, 1.0)).unwrap()
}

/// Binary seed with unit mass in region zero.
pub fn seed_origin(regions: usize) -> SeedVector {
    SeedVector::single(regions, RegionId(0)).unwrap()
}

/// Random dense connectome with weights in `[0, 1)` and a zero diagonal.
///
/// Deterministic for a given `seed`, so tests and benchmarks can share a
/// profile without storing the matrix.
pub fn random_connectome(regions: usize, seed: u64) -> Connectome {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut weights = DMatrix::zeros(regions, regions);
    for i in 0..regions {
        for j in 0..regions {
            if i != j {
                weights[(i, j)] = rng.random::<f64>();
            }
        }
    }
    Connectome::new(weights).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rings_are_conserving_cycles() {
        for connectome in [ring3(), ring4()] {
            let n = connectome.regions();
            for j in 0..n {
                assert_eq!(connectome.matrix().column(j).sum(), 1.0);
                assert_eq!(connectome.matrix().row(j).sum(), 1.0);
            }
        }
    }

    #[test]
    fn random_connectome_is_deterministic() {
        let a = random_connectome(10, 7);
        let b = random_connectome(10, 7);
        assert_eq!(a.matrix(), b.matrix());
    }
}
