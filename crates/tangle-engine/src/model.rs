//! Model construction and simulation entry points.

use std::time::Instant;

use tangle_core::{ArraySource, ModelError, Parameters};
use tangle_model::{initial_state, system_matrix};
use tangle_propagate::{evaluate, PropagateError};

use crate::config::{ConfigError, ModelConfig};
use crate::metrics::RunMetrics;
use crate::trajectory::Trajectory;

/// A validated pathology-spread model.
///
/// Construction validates the study inputs once; [`simulate`](Model::simulate)
/// then maps parameter splits to trajectories without re-checking them.
pub struct Model {
    config: ModelConfig,
    volume: Option<Box<dyn ArraySource>>,
}

impl Model {
    /// Validates `config` and builds a model without an array source.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from [`ModelConfig::validate`], plus
    /// [`ConfigError::NoVolumeSource`] when `config.volume_correction`
    /// is set; use [`Model::with_source`] for that case.
    pub fn new(config: ModelConfig) -> Result<Self, ConfigError> {
        Self::build(config, None)
    }

    /// Validates `config` and builds a model reading voxel data from `source`.
    ///
    /// The source is only consulted when `config.volume_correction` is
    /// set; otherwise it is carried but never read.
    pub fn with_source(
        config: ModelConfig,
        source: Box<dyn ArraySource>,
    ) -> Result<Self, ConfigError> {
        Self::build(config, Some(source))
    }

    fn build(config: ModelConfig, volume: Option<Box<dyn ArraySource>>) -> Result<Self, ConfigError> {
        config.validate()?;
        if config.volume_correction && volume.is_none() {
            return Err(ConfigError::NoVolumeSource);
        }
        log::info!(
            "model ready: {} regions, {} covariate types, {} time points",
            config.connectome.regions(),
            config.covariates.ntypes(),
            config.times.len()
        );
        Ok(Self { config, volume })
    }

    /// The validated configuration.
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Simulates one parameter split into a trajectory.
    ///
    /// `raw` is the flat split `[α, β, γ, s, b₁..b_k, p₁..p_k]` of length
    /// `4 + 2k`, where `k` is the covariate-type count. The `s` slot is
    /// present even when directionality is off; it is ignored then.
    ///
    /// # Errors
    ///
    /// - [`ModelError::ParameterShape`] when `raw` has the wrong length.
    /// - [`ModelError::VolumeData`] when volume correction is on and the
    ///   voxel array cannot be loaded or validated.
    pub fn simulate(&self, raw: &[f64]) -> Result<Trajectory, ModelError> {
        self.simulate_with_metrics(raw).map(|(trajectory, _)| trajectory)
    }

    /// Simulates one parameter split, also reporting run metrics.
    ///
    /// # Errors
    ///
    /// Same as [`Model::simulate`].
    pub fn simulate_with_metrics(
        &self,
        raw: &[f64],
    ) -> Result<(Trajectory, RunMetrics), ModelError> {
        let run_start = Instant::now();

        let params = Parameters::split(
            raw,
            self.config.covariates.ntypes(),
            self.config.directionality,
        )?;

        let assemble_start = Instant::now();
        let volume_source = if self.config.volume_correction {
            self.volume.as_deref()
        } else {
            None
        };
        let a = system_matrix(
            &self.config.connectome,
            &self.config.covariates,
            &params,
            volume_source,
        )?;
        let assemble_us = assemble_start.elapsed().as_micros() as u64;

        let x0 = initial_state(self.config.seed.values(), params.gamma());

        let propagate_start = Instant::now();
        let values = evaluate(&a, &x0, &self.config.times, self.config.evaluation)
            .map_err(dimension_error)?;
        let propagate_us = propagate_start.elapsed().as_micros() as u64;

        let nonfinite_entries = values.iter().filter(|v| !v.is_finite()).count();
        if nonfinite_entries > 0 {
            log::warn!(
                "trajectory contains {nonfinite_entries} non-finite entries; \
                 the split may be outside the stable parameter range"
            );
        }

        let metrics = RunMetrics {
            total_us: run_start.elapsed().as_micros() as u64,
            assemble_us,
            propagate_us,
            time_points: self.config.times.len(),
            nonfinite_entries,
        };

        Ok((
            Trajectory::new(self.config.times.clone(), values),
            metrics,
        ))
    }
}

// Evaluator shape errors map onto the model's dimension error.
fn dimension_error(err: PropagateError) -> ModelError {
    match err {
        PropagateError::NotSquare { rows, cols } => ModelError::DimensionMismatch {
            what: "system matrix",
            expected: rows,
            found: cols,
        },
        PropagateError::StateLength { dim, found } => ModelError::DimensionMismatch {
            what: "initial state",
            expected: dim,
            found,
        },
    }
}
