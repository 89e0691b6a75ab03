//! Named numeric-array data sources.
//!
//! The model's only external data dependency is the optional per-region
//! voxel-volume array. [`ArraySource`] abstracts "load a named data file
//! into a mapping of named numeric arrays" so the model builder can run
//! against an in-memory stub in tests; [`DirSource`] is the
//! directory-backed implementation used against real data.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::error::VolumeError;

/// Loads named numeric arrays from a logical data file.
///
/// Implementations return the complete mapping for one file; callers pick
/// the arrays they need by key. A missing file, unreadable content, or a
/// malformed entry surfaces as [`VolumeError`].
pub trait ArraySource {
    /// Load the named-array mapping stored under `name`.
    fn load(&self, name: &str) -> Result<IndexMap<String, Vec<f64>>, VolumeError>;
}

/// Directory-backed [`ArraySource`].
///
/// `load("regionvoxels")` reads `<dir>/regionvoxels.csv`. Each non-blank
/// line holds one array: a name followed by comma-separated values, e.g.
/// `voxels,133.5,250.25,80.0`.
#[derive(Clone, Debug)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    /// Create a source rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this source reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ArraySource for DirSource {
    fn load(&self, name: &str) -> Result<IndexMap<String, Vec<f64>>, VolumeError> {
        let path = self.dir.join(format!("{name}.csv"));
        let file = File::open(&path)?;
        let reader = BufReader::new(file);

        let mut arrays = IndexMap::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split(',');
            let key = match fields.next().map(str::trim) {
                Some(k) if !k.is_empty() => k.to_string(),
                _ => {
                    return Err(VolumeError::Parse {
                        line: i + 1,
                        detail: "missing array name".to_string(),
                    })
                }
            };
            let mut values = Vec::new();
            for field in fields {
                let field = field.trim();
                let v = field.parse::<f64>().map_err(|e| VolumeError::Parse {
                    line: i + 1,
                    detail: format!("'{field}': {e}"),
                })?;
                values.push(v);
            }
            arrays.insert(key, values);
        }

        log::debug!("loaded {} arrays from {}", arrays.len(), path.display());
        Ok(arrays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Write `content` into a fresh scratch directory and return a source
    /// over it. The caller removes the directory when done.
    fn scratch_source(tag: &str, file: &str, content: &str) -> (PathBuf, DirSource) {
        let dir = std::env::temp_dir().join(format!("tangle-core-{tag}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), content).unwrap();
        (dir.clone(), DirSource::new(dir))
    }

    #[test]
    fn load_parses_named_arrays() {
        let (dir, source) = scratch_source(
            "parse",
            "regionvoxels.csv",
            "voxels,2.0,4.0,8.0\nhemisphere_count,2.0\n",
        );
        let arrays = source.load("regionvoxels").unwrap();
        assert_eq!(arrays["voxels"], vec![2.0, 4.0, 8.0]);
        assert_eq!(arrays.len(), 2);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn load_skips_blank_lines() {
        let (dir, source) = scratch_source("blank", "data.csv", "\nvoxels,1.5\n\n");
        let arrays = source.load("data").unwrap();
        assert_eq!(arrays["voxels"], vec![1.5]);
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let source = DirSource::new(std::env::temp_dir().join("tangle-core-does-not-exist"));
        match source.load("regionvoxels") {
            Err(VolumeError::Io(_)) => {}
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn load_bad_number_is_parse_error() {
        let (dir, source) = scratch_source("badnum", "data.csv", "voxels,1.0,oops\n");
        match source.load("data") {
            Err(VolumeError::Parse { line: 1, .. }) => {}
            other => panic!("expected Parse at line 1, got {other:?}"),
        }
        fs::remove_dir_all(dir).unwrap();
    }
}
