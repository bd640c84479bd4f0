//! Filter Stage
//!
//! Decides between flattened output (search or list mode) and one-level
//! grouping (tree mode).

use super::filters::{DisplayType, Filters};
use super::node::{FileNode, Node};
use crate::types::FileEntry;
use tracing::debug;

/// Output of the filter stage.
#[derive(Debug)]
pub enum Staged<'a> {
    /// File nodes already built; no directory grouping applies.
    Flattened(Vec<Node>),
    /// Entries still to be grouped by their first segment below the prefix.
    Grouped(Vec<&'a FileEntry>),
}

/// Apply search and display mode to the entries under the requested prefix.
///
/// A search always flattens, whatever the display type: it answers which
/// files anywhere below the prefix match, not which immediate children do.
pub fn apply<'a>(entries: Vec<&'a FileEntry>, filters: &Filters) -> Staged<'a> {
    if let Some(search) = filters.active_search() {
        let needle = search.to_lowercase();
        let nodes: Vec<Node> = entries
            .into_iter()
            .filter(|entry| entry.path.to_lowercase().contains(&needle))
            .map(file_node)
            .collect();
        debug!(search = %search, matches = nodes.len(), "search filter applied");
        return Staged::Flattened(nodes);
    }

    match filters.display_type {
        DisplayType::List => Staged::Flattened(entries.into_iter().map(file_node).collect()),
        DisplayType::Tree => Staged::Grouped(entries),
    }
}

fn file_node(entry: &FileEntry) -> Node {
    Node::File(FileNode::new(entry.path.clone(), entry.totals))
}
