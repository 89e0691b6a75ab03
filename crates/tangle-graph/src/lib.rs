//! Network structure for the Tangle pathology-spread model.
//!
//! This crate defines the validated graph inputs of the model — the
//! connectivity matrix ([`Connectome`]) and the region-by-covariate
//! table ([`CovariateTable`]) — together with the structural kernels
//! derived from them:
//!
//! - [`directed_blend`]: anterograde/retrograde mixing of a directed
//!   connectivity matrix with its transpose
//! - [`column_laplacian`]: the column-degree graph Laplacian capturing
//!   diffusive coupling
//! - [`scale_columns`]: covariate-driven per-column edge scaling

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod blend;
pub mod connectome;
pub mod covariates;
pub mod error;
pub mod laplacian;

pub use blend::directed_blend;
pub use connectome::Connectome;
pub use covariates::CovariateTable;
pub use error::GraphError;
pub use laplacian::{column_laplacian, scale_columns};
