//! Path existence oracles.
//!
//! Answers whether a path is a real entry in the source tree, independent of
//! coverage. Only consulted when a non-root prefix has no covered files.

use crate::error::ApiError;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

pub trait PathExistenceOracle: Send + Sync {
    fn path_exists(&self, path: &str) -> Result<bool, ApiError>;
}

impl<F> PathExistenceOracle for F
where
    F: Fn(&str) -> Result<bool, ApiError> + Send + Sync,
{
    fn path_exists(&self, path: &str) -> Result<bool, ApiError> {
        self(path)
    }
}

/// Checks paths against a checked-out source tree on disk.
#[derive(Debug, Clone)]
pub struct FsPathOracle {
    root: PathBuf,
}

impl FsPathOracle {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PathExistenceOracle for FsPathOracle {
    fn path_exists(&self, path: &str) -> Result<bool, ApiError> {
        let relative = Path::new(path);
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_)))
        {
            return Ok(false);
        }
        let full = self.root.join(relative);
        match std::fs::symlink_metadata(&full) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(ApiError::PathOracle(format!(
                "failed to stat {}: {}",
                full.display(),
                e
            ))),
        }
    }
}

/// A fixed set of known repository paths. Directories are implied by their files.
#[derive(Debug, Clone, Default)]
pub struct KnownPaths {
    paths: HashSet<String>,
}

impl KnownPaths {
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut paths = HashSet::new();
        for file in files {
            let file: String = file.into();
            let mut end = file.len();
            while let Some(pos) = file[..end].rfind('/') {
                paths.insert(file[..pos].to_string());
                end = pos;
            }
            paths.insert(file);
        }
        Self { paths }
    }
}

impl PathExistenceOracle for KnownPaths {
    fn path_exists(&self, path: &str) -> Result<bool, ApiError> {
        Ok(self.paths.contains(path))
    }
}
