//! Closed-form trajectory evaluation for the Tangle pathology-spread model.
//!
//! Given a system matrix `A` and initial state `x0`, this crate evaluates
//! the solution `x(t) = exp(A·t)·x0` of the linear system `dx/dt = A·x`
//! at arbitrary time points. Each time point is evaluated independently
//! from `x0`, never by stepping from the previous point, so late samples
//! carry no accumulated integration error and a trajectory can be fanned
//! out over a worker pool with [`Evaluation::Parallel`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod evaluate;
pub mod expm;

pub use error::PropagateError;
pub use evaluate::{evaluate, Evaluation};
pub use expm::state_at;
