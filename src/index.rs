//! Path Index
//!
//! Answers "which files live under this directory prefix" over a report's flat
//! file list.

use crate::report::Report;
use crate::types::FileEntry;

/// Borrowed view over the files of one report snapshot.
#[derive(Debug, Clone, Copy)]
pub struct PathIndex<'a> {
    files: &'a [FileEntry],
}

impl<'a> PathIndex<'a> {
    pub fn new(files: &'a [FileEntry]) -> Self {
        Self { files }
    }

    pub fn from_report<R: Report + ?Sized>(report: &'a R) -> Self {
        Self::new(report.files())
    }

    /// Files strictly below `prefix` at any depth, in report order.
    ///
    /// The empty prefix is the root and matches everything. A file whose path
    /// equals `prefix` is not a directory and is excluded.
    pub fn files_under(&self, prefix: &str) -> Vec<&'a FileEntry> {
        self.files
            .iter()
            .filter(|entry| is_under(&entry.path, prefix))
            .collect()
    }
}

/// Remainder of `path` after `prefix/`, or the whole path at the root.
pub(crate) fn relative_to<'p>(path: &'p str, prefix: &str) -> Option<&'p str> {
    if prefix.is_empty() {
        return Some(path);
    }
    path.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('/'))
}

fn is_under(path: &str, prefix: &str) -> bool {
    relative_to(path, prefix).is_some()
}
