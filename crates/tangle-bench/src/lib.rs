//! Benchmark profiles and utilities for the Tangle pathology-spread model.
//!
//! Provides pre-built [`ModelConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 100 regions with a dense random connectome
//! - [`stress_profile`]: 250 regions, same construction at 2.5x scale
//! - [`reference_split`]: a parameter split matching both profiles

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tangle_engine::ModelConfig;
use tangle_propagate::Evaluation;
use tangle_test_utils::{ones_column, random_connectome, seed_origin};

/// Regions in the reference profile.
pub const REFERENCE_REGIONS: usize = 100;

/// Regions in the stress profile.
pub const STRESS_REGIONS: usize = 250;

/// Build the reference benchmark profile: 100 regions, dense random
/// connectivity, one covariate column, ten sampling times.
///
/// Deterministic for a given `seed`.
pub fn reference_profile(seed: u64) -> ModelConfig {
    profile(REFERENCE_REGIONS, seed)
}

/// Build the stress benchmark profile: 250 regions, same construction
/// as [`reference_profile`] at 2.5x the region count.
pub fn stress_profile(seed: u64) -> ModelConfig {
    profile(STRESS_REGIONS, seed)
}

/// A parameter split matching the profiles' single covariate column:
/// mild growth, unit spread, balanced directionality.
pub fn reference_split() -> [f64; 6] {
    [0.1, 1.0, 1.0, 0.5, 0.2, 0.05]
}

fn profile(regions: usize, seed: u64) -> ModelConfig {
    ModelConfig {
        connectome: random_connectome(regions, seed),
        covariates: ones_column(regions),
        seed: seed_origin(regions),
        times: (0..10).map(|i| f64::from(i) * 0.5).collect(),
        directionality: true,
        volume_correction: false,
        evaluation: Evaluation::Sequential,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_profile_validates() {
        reference_profile(42).validate().unwrap();
    }

    #[test]
    fn stress_profile_validates() {
        stress_profile(42).validate().unwrap();
    }

    #[test]
    fn profiles_are_deterministic() {
        let a = reference_profile(7);
        let b = reference_profile(7);
        assert_eq!(a.connectome.matrix(), b.connectome.matrix());
        assert_eq!(a.times, b.times);
    }
}
