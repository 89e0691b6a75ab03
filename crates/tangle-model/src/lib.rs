//! System-matrix assembly for the Tangle pathology-spread model.
//!
//! This crate turns validated inputs (connectivity, covariates, one
//! parameter split) into the dense system matrix `A = Γ − β·L` of the
//! linear spread model `dx/dt = A·x`:
//!
//! - [`growth_diagonal`] builds the spread-independent growth term `Γ`
//! - [`tangle_graph::column_laplacian`] supplies the transport term `L`,
//!   scaled and volume-corrected here
//! - [`system_matrix`] orchestrates the full construction
//!
//! Volume correction is optional and reads the per-region voxel array
//! through the [`ArraySource`](tangle_core::ArraySource) abstraction.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod assemble;
pub mod growth;
pub mod volume;

pub use assemble::{initial_state, system_matrix};
pub use growth::growth_diagonal;
pub use volume::{apply_volume_correction, load_voxels, VOLUME_FILE, VOLUME_KEY};
