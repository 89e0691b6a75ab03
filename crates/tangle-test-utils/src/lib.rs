//! Test utilities and mock types for Tangle development.
//!
//! Provides a mock implementation of the [`ArraySource`] trait plus
//! small fixture builders (ring connectomes, covariate columns, seeds)
//! shared by unit tests, integration tests, and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{ones_column, random_connectome, ring3, ring4, seed_origin};

use std::collections::HashMap;
use std::io;

use indexmap::IndexMap;

use tangle_core::{ArraySource, VolumeError};

/// Mock implementation of [`ArraySource`].
///
/// Backed by a `HashMap<String, IndexMap<String, Vec<f64>>>` for flexible
/// test setup. Pre-populate data files with
/// [`insert`](MockArraySource::insert) before passing to code under test;
/// loading a file that was never inserted reports a not-found I/O error,
/// mirroring a directory-backed source with a missing file.
pub struct MockArraySource {
    files: HashMap<String, IndexMap<String, Vec<f64>>>,
}

impl MockArraySource {
    pub fn new() -> Self {
        Self {
            files: HashMap::new(),
        }
    }

    /// Pre-populate one named array inside a data file.
    pub fn insert(&mut self, file: &str, key: &str, values: Vec<f64>) {
        self.files
            .entry(file.to_string())
            .or_default()
            .insert(key.to_string(), values);
    }
}

impl Default for MockArraySource {
    fn default() -> Self {
        Self::new()
    }
}

impl ArraySource for MockArraySource {
    fn load(&self, name: &str) -> Result<IndexMap<String, Vec<f64>>, VolumeError> {
        self.files.get(name).cloned().ok_or_else(|| {
            VolumeError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no mock data file '{name}'"),
            ))
        })
    }
}
