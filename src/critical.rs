//! Critical files providers.
//!
//! The critical-file list is computed elsewhere (profiling); here it is only
//! consumed as a set of repository paths.

use crate::error::ApiError;
use std::collections::HashSet;
use std::path::PathBuf;

pub trait CriticalFilesProvider: Send + Sync {
    fn critical_files(&self, commit: &str) -> Result<HashSet<String>, ApiError>;
}

impl<C: CriticalFilesProvider + ?Sized> CriticalFilesProvider for Box<C> {
    fn critical_files(&self, commit: &str) -> Result<HashSet<String>, ApiError> {
        (**self).critical_files(commit)
    }
}

/// No file is critical.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCriticalFiles;

impl CriticalFilesProvider for NoCriticalFiles {
    fn critical_files(&self, _commit: &str) -> Result<HashSet<String>, ApiError> {
        Ok(HashSet::new())
    }
}

/// Newline-delimited list of paths. Blank lines and `#` comments are skipped.
#[derive(Debug, Clone)]
pub struct CriticalFileList {
    source: PathBuf,
}

impl CriticalFileList {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl CriticalFilesProvider for CriticalFileList {
    fn critical_files(&self, _commit: &str) -> Result<HashSet<String>, ApiError> {
        let data = std::fs::read_to_string(&self.source).map_err(|e| {
            ApiError::CriticalFiles(format!(
                "failed to read critical files from {}: {}",
                self.source.display(),
                e
            ))
        })?;
        Ok(parse_critical_files(&data))
    }
}

impl CriticalFilesProvider for HashSet<String> {
    fn critical_files(&self, _commit: &str) -> Result<HashSet<String>, ApiError> {
        Ok(self.clone())
    }
}

pub fn parse_critical_files(data: &str) -> HashSet<String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| line.trim_start_matches("./").to_string())
        .collect()
}
