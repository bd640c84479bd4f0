//! Core types shared by the path index, the contents pipeline and the resolver.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Aggregate coverage counters for a file or a directory subtree.
///
/// The provider is trusted for `hits + misses + partials <= lines`; nothing
/// here enforces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    #[serde(default)]
    pub hits: u64,
    #[serde(default)]
    pub misses: u64,
    #[serde(default)]
    pub partials: u64,
    #[serde(default)]
    pub lines: u64,
}

impl Totals {
    pub fn new(hits: u64, misses: u64, partials: u64, lines: u64) -> Self {
        Self {
            hits,
            misses,
            partials,
            lines,
        }
    }

    /// `100 * hits / lines`, or 0 when there are no lines.
    pub fn percent_covered(&self) -> f64 {
        if self.lines == 0 {
            0.0
        } else {
            100.0 * self.hits as f64 / self.lines as f64
        }
    }
}

/// Counters saturate at `u64::MAX` instead of wrapping.
impl Add for Totals {
    type Output = Totals;

    fn add(self, other: Totals) -> Totals {
        Totals {
            hits: self.hits.saturating_add(other.hits),
            misses: self.misses.saturating_add(other.misses),
            partials: self.partials.saturating_add(other.partials),
            lines: self.lines.saturating_add(other.lines),
        }
    }
}

impl AddAssign for Totals {
    fn add_assign(&mut self, other: Totals) {
        *self = *self + other;
    }
}

impl std::iter::Sum for Totals {
    fn sum<I: Iterator<Item = Totals>>(iter: I) -> Totals {
        iter.fold(Totals::default(), Add::add)
    }
}

/// One file of a coverage report: repo-relative, `/`-separated path plus totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: String,
    #[serde(flatten)]
    pub totals: Totals,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, totals: Totals) -> Self {
        Self {
            path: path.into(),
            totals,
        }
    }

    /// Last path segment.
    pub fn basename(&self) -> &str {
        basename(&self.path)
    }
}

pub(crate) fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
