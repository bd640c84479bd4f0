//! Coverage Report Snapshots
//!
//! A report is an immutable mapping from file path to totals for one commit.
//! Construction belongs to a `ReportProvider`; the engine only reads.

pub mod provider;

pub use provider::{JsonReportProvider, SingleFileReportProvider};

use crate::error::ApiError;
use crate::types::{FileEntry, Totals};
use serde::{Deserialize, Serialize};

/// Read access to a report snapshot.
pub trait Report: Send + Sync {
    /// Every file in the report with its totals, in provider order.
    fn files(&self) -> &[FileEntry];
}

/// Builds report snapshots for a commit reference.
///
/// `Ok(None)` means no report could be built for the commit; errors are
/// provider failures and propagate to the caller.
pub trait ReportProvider: Send + Sync {
    type Report: Report;

    fn build_report(&self, commit: &str) -> Result<Option<Self::Report>, ApiError>;
}

impl<P: ReportProvider + ?Sized> ReportProvider for Box<P> {
    type Report = P::Report;

    fn build_report(&self, commit: &str) -> Result<Option<Self::Report>, ApiError> {
        (**self).build_report(commit)
    }
}

/// In-memory report snapshot, also the on-disk JSON shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    #[serde(default)]
    pub files: Vec<FileEntry>,
}

impl CoverageReport {
    pub fn new(files: Vec<FileEntry>) -> Self {
        Self { files }
    }

    /// Elementwise sum over every file.
    pub fn totals(&self) -> Totals {
        self.files.iter().map(|f| f.totals).sum()
    }

    pub fn from_json(data: &str) -> Result<Self, ApiError> {
        Ok(serde_json::from_str(data)?)
    }
}

impl Report for CoverageReport {
    fn files(&self) -> &[FileEntry] {
        &self.files
    }
}

impl FromIterator<(String, Totals)> for CoverageReport {
    fn from_iter<I: IntoIterator<Item = (String, Totals)>>(iter: I) -> Self {
        Self {
            files: iter
                .into_iter()
                .map(|(path, totals)| FileEntry::new(path, totals))
                .collect(),
        }
    }
}
