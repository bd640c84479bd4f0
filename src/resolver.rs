//! Path Resolver
//!
//! Decides which of the four outcomes a path contents query produces, in
//! precedence order: missing head report, missing coverage, unknown path,
//! path contents.

use crate::contents::{build_contents, Filters, Node};
use crate::error::ApiError;
use crate::index::PathIndex;
use crate::oracle::PathExistenceOracle;
use crate::report::Report;
use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

pub const MISSING_HEAD_REPORT_MESSAGE: &str = "Missing head report";

/// Result of resolving one path against one report snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__typename")]
pub enum Outcome {
    PathContents { results: Vec<Node> },
    MissingHeadReport { message: String },
    MissingCoverage { message: String },
    UnknownPath { message: String },
}

impl Outcome {
    pub fn missing_head_report() -> Self {
        Outcome::MissingHeadReport {
            message: MISSING_HEAD_REPORT_MESSAGE.to_string(),
        }
    }

    pub fn missing_coverage(path: &str) -> Self {
        Outcome::MissingCoverage {
            message: format!("missing coverage for path: {}", path),
        }
    }

    pub fn unknown_path(path: &str) -> Self {
        Outcome::UnknownPath {
            message: format!("path does not exist: {}", path),
        }
    }

    /// Variant name as exposed to API callers.
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::PathContents { .. } => "PathContents",
            Outcome::MissingHeadReport { .. } => "MissingHeadReport",
            Outcome::MissingCoverage { .. } => "MissingCoverage",
            Outcome::UnknownPath { .. } => "UnknownPath",
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::PathContents { .. } => None,
            Outcome::MissingHeadReport { message }
            | Outcome::MissingCoverage { message }
            | Outcome::UnknownPath { message } => Some(message),
        }
    }

    pub fn results(&self) -> Option<&[Node]> {
        match self {
            Outcome::PathContents { results } => Some(results),
            _ => None,
        }
    }
}

/// Reject paths that cannot name a repository entry: a leading `/` or an
/// empty segment. The empty string is the root and is valid.
pub fn validate_path(path: &str) -> Result<(), ApiError> {
    if path.is_empty() {
        return Ok(());
    }
    if path.starts_with('/') {
        return Err(ApiError::InvalidArgument(format!(
            "path must be repository-relative: {}",
            path
        )));
    }
    if path.split('/').any(str::is_empty) {
        return Err(ApiError::InvalidArgument(format!(
            "path contains an empty segment: {}",
            path
        )));
    }
    Ok(())
}

/// Resolve `path` against `report`.
///
/// The oracle is called at most once, and only when a non-root path has no
/// covered files. Oracle failures propagate unchanged.
pub fn resolve_path_contents<R, O>(
    report: Option<&R>,
    path: &str,
    filters: &Filters,
    critical_files: &HashSet<String>,
    oracle: &O,
) -> Result<Outcome, ApiError>
where
    R: Report + ?Sized,
    O: PathExistenceOracle + ?Sized,
{
    let Some(report) = report else {
        debug!(path = %path, "no head report");
        return Ok(Outcome::missing_head_report());
    };
    validate_path(path)?;

    let index = PathIndex::from_report(report);
    let entries = index.files_under(path);

    if entries.is_empty() && !path.is_empty() {
        let exists = oracle.path_exists(path)?;
        debug!(path = %path, exists, "no coverage under path");
        return Ok(if exists {
            Outcome::missing_coverage(path)
        } else {
            Outcome::unknown_path(path)
        });
    }

    let results = build_contents(entries, path, filters, critical_files);
    Ok(Outcome::PathContents { results })
}
