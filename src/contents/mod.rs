//! Path Contents
//!
//! Turns the files under a prefix into a filtered, grouped, sorted and
//! annotated node list: filter stage, aggregator, sorter, then critical-file
//! overlay.

pub mod aggregate;
pub mod filter;
pub mod filters;
pub mod node;
pub mod overlay;
pub mod sort;

pub use filters::{DisplayType, Filters, Ordering, OrderingDirection, OrderingParameter};
pub use node::{DirNode, FileNode, Node};

use crate::types::FileEntry;
use std::collections::HashSet;
use tracing::debug;

/// Build the listing for `prefix` from the entries already known to be under it.
pub fn build_contents(
    entries: Vec<&FileEntry>,
    prefix: &str,
    filters: &Filters,
    critical_files: &HashSet<String>,
) -> Vec<Node> {
    let input = entries.len();
    let staged = filter::apply(entries, filters);
    let mut nodes = aggregate::aggregate(staged, prefix);
    let ordering = filters.ordering_or_default();
    sort::sort_nodes(&mut nodes, ordering);
    overlay::apply_critical_files(&mut nodes, critical_files);
    debug!(
        prefix = %prefix,
        entries = input,
        nodes = nodes.len(),
        parameter = %ordering.parameter,
        direction = %ordering.direction,
        "built path contents"
    );
    nodes
}
