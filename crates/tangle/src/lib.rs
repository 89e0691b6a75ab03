//! Tangle: network-spread modelling of brain pathology over connectomes.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tangle sub-crates. For most users, adding `tangle` as a single
//! dependency is sufficient.
//!
//! The model treats pathology as a substance flowing over a weighted
//! region-to-region connectivity graph while growing or clearing locally.
//! A study is described once as a [`prelude::ModelConfig`]; each candidate
//! parameter split is then mapped to a trajectory in closed form via the
//! matrix exponential, with no time-stepping error to tune away.
//!
//! # Quick start
//!
//! ```rust
//! use tangle::prelude::*;
//! use nalgebra::DMatrix;
//!
//! // Two regions with one reciprocal connection, no covariates.
//! let connectome = Connectome::new(DMatrix::from_row_slice(2, 2, &[
//!     0.0, 1.0,
//!     1.0, 0.0,
//! ])).unwrap();
//!
//! let config = ModelConfig {
//!     connectome,
//!     covariates: CovariateTable::empty(2),
//!     seed: SeedVector::single(2, RegionId(0)).unwrap(),
//!     times: vec![0.0, 1.0],
//!     directionality: false,
//!     volume_correction: false,
//!     evaluation: Evaluation::Sequential,
//! };
//!
//! let model = Model::new(config).unwrap();
//! // [alpha, beta, gamma, s] — without covariates the split has 4 entries.
//! let trajectory = model.simulate(&[0.0, 1.0, 1.0, 0.5]).unwrap();
//!
//! assert_eq!(trajectory.samples(), 2);
//! // Pure transport conserves the seeded unit of pathology.
//! assert!((trajectory.total(1) - 1.0).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tangle-core` | Region IDs, parameter splits, seeds, array sources, errors |
//! | [`graph`] | `tangle-graph` | Connectome, covariate table, blend and Laplacian kernels |
//! | [`model`] | `tangle-model` | System-matrix assembly and volume correction |
//! | [`propagate`] | `tangle-propagate` | Matrix-exponential trajectory evaluation |
//! | [`engine`] | `tangle-engine` | Model configuration, simulation runs, run metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`tangle-core`).
///
/// Contains [`types::RegionId`], the [`types::Parameters`] split,
/// [`types::SeedVector`], the [`types::ArraySource`] abstraction, and the
/// shared error types.
pub use tangle_core as types;

/// Connectivity structures and graph kernels (`tangle-graph`).
///
/// Provides [`graph::Connectome`] and [`graph::CovariateTable`] plus the
/// directed blend and column-Laplacian kernels the model is assembled
/// from.
pub use tangle_graph as graph;

/// System-matrix assembly (`tangle-model`).
///
/// Turns validated inputs and one parameter split into the dense system
/// matrix via [`model::system_matrix`], including the optional
/// per-region volume correction.
pub use tangle_model as model;

/// Trajectory evaluation (`tangle-propagate`).
///
/// Evaluates `exp(A·t)·x0` at arbitrary time points, sequentially or
/// fanned out over a worker pool; see [`propagate::evaluate`].
pub use tangle_propagate as propagate;

/// Model configuration and simulation runs (`tangle-engine`).
///
/// [`engine::ModelConfig`] describes a study, [`engine::Model`] validates
/// it once and maps parameter splits to [`engine::Trajectory`] values.
pub use tangle_engine as engine;

/// Common imports for typical Tangle usage.
///
/// ```rust
/// use tangle::prelude::*;
/// ```
///
/// This imports the most frequently used types: the model builder and
/// its configuration, connectivity inputs, seeds, parameter splits, and
/// the error types.
pub mod prelude {
    // Core types
    pub use tangle_core::{ArraySource, DirSource, Parameters, RegionId, SeedVector};

    // Errors
    pub use tangle_core::{ModelError, VolumeError};
    pub use tangle_engine::ConfigError;
    pub use tangle_graph::GraphError;

    // Connectivity
    pub use tangle_graph::{Connectome, CovariateTable};

    // Evaluation scheduling
    pub use tangle_propagate::{Evaluation, PropagateError};

    // Engine
    pub use tangle_engine::{Model, ModelConfig, RunMetrics, Trajectory};
}
