//! Model configuration, validation, and error types.
//!
//! [`ModelConfig`] is the builder-input for constructing a [`Model`].
//! [`validate()`](ModelConfig::validate) checks structural invariants at
//! startup so that per-split simulation never re-checks them.
//!
//! [`Model`]: crate::model::Model

use std::error::Error;
use std::fmt;

use tangle_core::SeedVector;
use tangle_graph::{Connectome, CovariateTable};
use tangle_propagate::Evaluation;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`ModelConfig::validate()`] or model construction.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Covariate table row count differs from the connectome's regions.
    CovariateRows {
        /// Regions in the connectome.
        regions: usize,
        /// Rows in the covariate table.
        found: usize,
    },
    /// Seed vector length differs from the connectome's regions.
    SeedLength {
        /// Regions in the connectome.
        regions: usize,
        /// Entries in the seed vector.
        found: usize,
    },
    /// A seed weight is negative or not finite.
    SeedWeight {
        /// Region index of the offending weight.
        index: usize,
        /// The invalid value.
        value: f64,
    },
    /// A sampling time is negative or not finite.
    TimePoint {
        /// Position of the offending time in the request list.
        index: usize,
        /// The invalid value.
        value: f64,
    },
    /// Volume correction is enabled but no array source was attached.
    NoVolumeSource,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CovariateRows { regions, found } => {
                write!(f, "covariate table has {found} rows, expected {regions}")
            }
            Self::SeedLength { regions, found } => {
                write!(f, "seed vector has {found} entries, expected {regions}")
            }
            Self::SeedWeight { index, value } => {
                write!(
                    f,
                    "seed weight for region {index} must be finite and non-negative, got {value}"
                )
            }
            Self::TimePoint { index, value } => {
                write!(
                    f,
                    "time point {index} must be finite and non-negative, got {value}"
                )
            }
            Self::NoVolumeSource => {
                write!(f, "volume correction enabled but no array source attached")
            }
        }
    }
}

impl Error for ConfigError {}

// ── ModelConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing a simulation model.
///
/// The connectome fixes the region count `n`; every other per-region
/// input must agree with it. Parameter vectors are *not* part of the
/// configuration: they arrive per [`simulate`](crate::model::Model::simulate)
/// call, so one validated config serves a whole inference run.
pub struct ModelConfig {
    /// Region-to-region connectivity.
    pub connectome: Connectome,
    /// Per-region covariates steering growth and spread. Use
    /// [`CovariateTable::empty`] for a covariate-free model.
    pub covariates: CovariateTable,
    /// Initial-pathology seeding pattern.
    pub seed: SeedVector,
    /// Times at which the trajectory is sampled. May be empty or
    /// unsorted; each point is evaluated independently.
    pub times: Vec<f64>,
    /// When `true`, the parameter split's `s` slot blends anterograde
    /// and retrograde transport. When `false`, the slot is ignored and
    /// the blend is pinned to `0.5`.
    pub directionality: bool,
    /// When `true`, transport is rescaled by per-region voxel volumes
    /// read from the model's array source.
    pub volume_correction: bool,
    /// How trajectory time points are scheduled.
    pub evaluation: Evaluation,
}

impl ModelConfig {
    /// Validate all structural invariants.
    ///
    /// Degenerate connectomes never reach this point: an empty or
    /// non-square weight matrix is rejected by [`Connectome::new`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let regions = self.connectome.regions();

        // 1. Covariate table must cover every region.
        if self.covariates.regions() != regions {
            return Err(ConfigError::CovariateRows {
                regions,
                found: self.covariates.regions(),
            });
        }
        // 2. Seed must cover every region.
        if self.seed.len() != regions {
            return Err(ConfigError::SeedLength {
                regions,
                found: self.seed.len(),
            });
        }
        // 3. Seed weights must be finite and non-negative.
        for (index, &value) in self.seed.values().iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::SeedWeight { index, value });
            }
        }
        // 4. Sampling times must be finite and non-negative.
        for (index, &value) in self.times.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::TimePoint { index, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tangle_test_utils::{ones_column, ring3, seed_origin};

    fn valid_config() -> ModelConfig {
        ModelConfig {
            connectome: ring3(),
            covariates: ones_column(3),
            seed: seed_origin(3),
            times: vec![0.0, 0.5, 1.0],
            directionality: false,
            volume_correction: false,
            evaluation: Evaluation::Sequential,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn covariate_row_mismatch_fails() {
        let mut config = valid_config();
        config.covariates = ones_column(4);

        match config.validate() {
            Err(ConfigError::CovariateRows {
                regions: 3,
                found: 4,
            }) => {}
            other => panic!("expected CovariateRows, got {other:?}"),
        }
    }

    #[test]
    fn seed_length_mismatch_fails() {
        let mut config = valid_config();
        config.seed = SeedVector::from_vec(vec![1.0, 0.0]);

        match config.validate() {
            Err(ConfigError::SeedLength {
                regions: 3,
                found: 2,
            }) => {}
            other => panic!("expected SeedLength, got {other:?}"),
        }
    }

    #[test]
    fn negative_seed_weight_fails() {
        let mut config = valid_config();
        config.seed = SeedVector::from_vec(vec![1.0, -0.5, 0.0]);

        match config.validate() {
            Err(ConfigError::SeedWeight { index: 1, value }) => assert_eq!(value, -0.5),
            other => panic!("expected SeedWeight, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_seed_weight_fails() {
        let mut config = valid_config();
        config.seed = SeedVector::from_vec(vec![f64::INFINITY, 0.0, 0.0]);

        match config.validate() {
            Err(ConfigError::SeedWeight { index: 0, .. }) => {}
            other => panic!("expected SeedWeight, got {other:?}"),
        }
    }

    #[test]
    fn negative_time_fails() {
        let mut config = valid_config();
        config.times = vec![0.0, -1.0];

        match config.validate() {
            Err(ConfigError::TimePoint { index: 1, value }) => assert_eq!(value, -1.0),
            other => panic!("expected TimePoint, got {other:?}"),
        }
    }

    #[test]
    fn nan_time_fails() {
        let mut config = valid_config();
        config.times = vec![f64::NAN];

        match config.validate() {
            Err(ConfigError::TimePoint { index: 0, .. }) => {}
            other => panic!("expected TimePoint, got {other:?}"),
        }
    }

    #[test]
    fn empty_times_are_allowed() {
        let mut config = valid_config();
        config.times = Vec::new();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn unsorted_times_are_allowed() {
        let mut config = valid_config();
        config.times = vec![2.0, 0.5, 1.0];

        assert!(config.validate().is_ok());
    }

    #[test]
    fn error_display_is_descriptive() {
        let msg = ConfigError::CovariateRows {
            regions: 3,
            found: 4,
        }
        .to_string();
        assert!(msg.contains("4 rows"));
        assert!(msg.contains("expected 3"));

        let msg = ConfigError::NoVolumeSource.to_string();
        assert!(msg.contains("no array source"));
    }
}
