//! Core types and traits for the Tangle pathology-spread model.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Tangle workspace:
//! strongly-typed region IDs, parameter-vector splitting, seed vectors,
//! the named-array data-source trait, and shared error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod params;
pub mod region;
pub mod seed;
pub mod source;

pub use error::{ModelError, VolumeError};
pub use params::Parameters;
pub use region::RegionId;
pub use seed::SeedVector;
pub use source::{ArraySource, DirSource};
