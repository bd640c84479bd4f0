//! PathContentsService: binds the report provider, the path existence oracle
//! and the critical files provider to the resolver.

use crate::contents::Filters;
use crate::critical::CriticalFilesProvider;
use crate::error::ApiError;
use crate::oracle::PathExistenceOracle;
use crate::report::{Report, ReportProvider};
use crate::resolver::{resolve_path_contents, validate_path, Outcome};
use crate::types::Totals;
use std::collections::HashSet;
use tracing::debug;

/// Request for one path contents query.
#[derive(Debug, Clone, Default)]
pub struct PathContentsRequest {
    pub commit: String,
    pub path: String,
    pub filters: Filters,
}

impl PathContentsRequest {
    pub fn new(commit: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            commit: commit.into(),
            path: path.into(),
            filters: Filters::default(),
        }
    }

    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }
}

pub struct PathContentsService<P, O, C> {
    reports: P,
    oracle: O,
    critical: C,
}

impl<P, O, C> PathContentsService<P, O, C>
where
    P: ReportProvider,
    O: PathExistenceOracle,
    C: CriticalFilesProvider,
{
    pub fn new(reports: P, oracle: O, critical: C) -> Self {
        Self {
            reports,
            oracle,
            critical,
        }
    }

    /// Resolve a path contents query end to end.
    ///
    /// Critical files are only fetched once a report exists.
    pub fn path_contents(&self, request: &PathContentsRequest) -> Result<Outcome, ApiError> {
        let report = self.reports.build_report(&request.commit)?;
        let critical = match report {
            Some(_) => {
                validate_path(&request.path)?;
                self.critical.critical_files(&request.commit)?
            }
            None => HashSet::new(),
        };
        let outcome = resolve_path_contents(
            report.as_ref(),
            &request.path,
            &request.filters,
            &critical,
            &self.oracle,
        )?;
        debug!(
            commit = %request.commit,
            path = %request.path,
            outcome = outcome.kind(),
            "resolved path contents"
        );
        Ok(outcome)
    }

    pub fn report_totals(&self, commit: &str) -> Result<Option<ReportSummary>, ApiError> {
        report_totals(&self.reports, commit)
    }
}

/// Totals over the whole report, or `None` without a report. Needs only the
/// report provider.
pub fn report_totals<P>(reports: &P, commit: &str) -> Result<Option<ReportSummary>, ApiError>
where
    P: ReportProvider + ?Sized,
{
    let Some(report) = reports.build_report(commit)? else {
        return Ok(None);
    };
    let files = report.files();
    Ok(Some(ReportSummary {
        files: files.len(),
        totals: files.iter().map(|f| f.totals).sum(),
    }))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportSummary {
    pub files: usize,
    pub totals: Totals,
}
