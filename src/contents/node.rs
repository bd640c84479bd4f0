//! Path contents result nodes.
//!
//! Files and directories share one comparable projection (name, path, totals,
//! coverage) so they can be ranked together.

use crate::types::{basename, Totals};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNode {
    pub name: String,
    pub path: String,
    #[serde(flatten)]
    pub totals: Totals,
    percent_covered: f64,
    pub is_critical_file: bool,
}

impl FileNode {
    pub fn new(path: impl Into<String>, totals: Totals) -> Self {
        let path = path.into();
        Self {
            name: basename(&path).to_string(),
            path,
            totals,
            percent_covered: totals.percent_covered(),
            is_critical_file: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirNode {
    pub name: String,
    pub path: String,
    #[serde(flatten)]
    pub totals: Totals,
    percent_covered: f64,
}

impl DirNode {
    /// `totals` must already be summed over every descendant file.
    pub fn new(name: impl Into<String>, path: impl Into<String>, totals: Totals) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            totals,
            percent_covered: totals.percent_covered(),
        }
    }
}

/// One row of a path contents listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "__typename")]
pub enum Node {
    #[serde(rename = "PathContentFile")]
    File(FileNode),
    #[serde(rename = "PathContentDir")]
    Dir(DirNode),
}

impl Node {
    pub fn name(&self) -> &str {
        match self {
            Node::File(f) => &f.name,
            Node::Dir(d) => &d.name,
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Node::File(f) => &f.path,
            Node::Dir(d) => &d.path,
        }
    }

    pub fn totals(&self) -> Totals {
        match self {
            Node::File(f) => f.totals,
            Node::Dir(d) => d.totals,
        }
    }

    pub fn percent_covered(&self) -> f64 {
        match self {
            Node::File(f) => f.percent_covered,
            Node::Dir(d) => d.percent_covered,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Dir(_))
    }

    /// `None` for directories, which carry no critical flag.
    pub fn is_critical_file(&self) -> Option<bool> {
        match self {
            Node::File(f) => Some(f.is_critical_file),
            Node::Dir(_) => None,
        }
    }
}
