//! Error types shared across the Tangle workspace.
//!
//! Organized by subsystem: simulation-time failures (`ModelError`) and
//! volume-data loading failures (`VolumeError`). Configuration and
//! propagation layers define their own error enums in their crates.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors surfaced while simulating a single parameter vector.
///
/// Every variant is fatal for the call: the computation either fully
/// succeeds or fully fails, with no partial output and no retry.
#[derive(Debug)]
pub enum ModelError {
    /// Parameter vector length does not match `4 + 2k` for `k` covariates.
    ParameterShape {
        /// The length required by the covariate count.
        expected: usize,
        /// The length actually supplied.
        found: usize,
    },
    /// Two inputs that must agree on the region count do not.
    DimensionMismatch {
        /// Which quantity was inconsistent.
        what: &'static str,
        /// The region count implied by the model.
        expected: usize,
        /// The value actually supplied.
        found: usize,
    },
    /// Volume correction was requested but the data could not be used.
    VolumeData(VolumeError),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParameterShape { expected, found } => {
                write!(
                    f,
                    "parameter vector has {found} entries, expected {expected} (4 + 2k)"
                )
            }
            Self::DimensionMismatch {
                what,
                expected,
                found,
            } => {
                write!(f, "{what}: expected {expected}, found {found}")
            }
            Self::VolumeData(e) => write!(f, "volume data: {e}"),
        }
    }
}

impl Error for ModelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::VolumeData(e) => Some(e),
            _ => None,
        }
    }
}

impl From<VolumeError> for ModelError {
    fn from(e: VolumeError) -> Self {
        Self::VolumeData(e)
    }
}

/// Errors loading or validating the per-region voxel-volume array.
#[derive(Debug)]
pub enum VolumeError {
    /// An I/O error occurred while reading the data file.
    Io(io::Error),
    /// A line of the data file could not be parsed.
    Parse {
        /// 1-based line number within the file.
        line: usize,
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// The loaded mapping does not contain the requested array.
    MissingKey {
        /// The key that was looked up.
        key: String,
    },
    /// Array length matches neither the region count nor half of it.
    Length {
        /// The model's region count.
        regions: usize,
        /// The length actually loaded.
        found: usize,
    },
    /// A voxel count is zero, negative, or non-finite.
    NonPositive {
        /// Index of the offending entry in the loaded array.
        index: usize,
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for VolumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse { line, detail } => write!(f, "parse error at line {line}: {detail}"),
            Self::MissingKey { key } => write!(f, "array '{key}' not found in data file"),
            Self::Length { regions, found } => {
                write!(
                    f,
                    "voxel array has {found} entries; expected {regions} regions or one hemisphere"
                )
            }
            Self::NonPositive { index, value } => {
                write!(
                    f,
                    "voxel count at index {index} must be positive and finite, got {value}"
                )
            }
        }
    }
}

impl Error for VolumeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for VolumeError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
