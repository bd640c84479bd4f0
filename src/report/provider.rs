//! Filesystem-backed report providers.

use super::{CoverageReport, ReportProvider};
use crate::error::ApiError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads `<dir>/<commit>.json`. A missing file means no report for the commit.
#[derive(Debug, Clone)]
pub struct JsonReportProvider {
    dir: PathBuf,
}

impl JsonReportProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn report_path(&self, commit: &str) -> Result<PathBuf, ApiError> {
        if commit.is_empty()
            || commit.contains('/')
            || commit.contains('\\')
            || commit == "."
            || commit == ".."
        {
            return Err(ApiError::InvalidArgument(format!(
                "invalid commit reference: {:?}",
                commit
            )));
        }
        Ok(self.dir.join(format!("{}.json", commit)))
    }
}

impl ReportProvider for JsonReportProvider {
    type Report = CoverageReport;

    fn build_report(&self, commit: &str) -> Result<Option<CoverageReport>, ApiError> {
        let path = self.report_path(commit)?;
        read_report(&path)
    }
}

/// Serves one report file regardless of the commit asked for.
#[derive(Debug, Clone)]
pub struct SingleFileReportProvider {
    path: PathBuf,
}

impl SingleFileReportProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportProvider for SingleFileReportProvider {
    type Report = CoverageReport;

    fn build_report(&self, _commit: &str) -> Result<Option<CoverageReport>, ApiError> {
        read_report(&self.path)
    }
}

fn read_report(path: &Path) -> Result<Option<CoverageReport>, ApiError> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no report file");
            return Ok(None);
        }
        Err(e) => {
            return Err(ApiError::ReportProvider(format!(
                "failed to read report {}: {}",
                path.display(),
                e
            )))
        }
    };
    let report = CoverageReport::from_json(&data).map_err(|e| {
        ApiError::ReportProvider(format!("failed to parse report {}: {}", path.display(), e))
    })?;
    debug!(path = %path.display(), files = report.files.len(), "loaded report");
    Ok(Some(report))
}
