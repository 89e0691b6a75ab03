//! Simulation engine for the Tangle pathology-spread model.
//!
//! [`ModelConfig`] describes one study: the connectome, the covariate
//! table, the seeding pattern, the sampling times, and the switches that
//! select model variants. [`Model::new`] validates the study once, and
//! [`Model::simulate`] then turns any number of parameter splits into
//! [`Trajectory`] values without re-checking the inputs. Inference loops
//! that probe thousands of splits pay the validation cost exactly once.
//!
//! [`Model::simulate_with_metrics`] additionally reports [`RunMetrics`],
//! the per-run timing and health counters.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod model;
pub mod trajectory;

pub use config::{ConfigError, ModelConfig};
pub use metrics::RunMetrics;
pub use model::Model;
pub use trajectory::Trajectory;
