//! Aggregator
//!
//! Groups entries by their first segment below the prefix. Files directly
//! under the prefix become file nodes; deeper entries fold into one directory
//! node per segment whose totals cover every descendant.

use super::filter::Staged;
use super::node::{DirNode, FileNode, Node};
use crate::index::relative_to;
use crate::types::Totals;
use std::collections::BTreeMap;

pub fn aggregate(staged: Staged<'_>, prefix: &str) -> Vec<Node> {
    let entries = match staged {
        Staged::Flattened(nodes) => return nodes,
        Staged::Grouped(entries) => entries,
    };

    let mut nodes = Vec::new();
    let mut dirs: BTreeMap<&str, Totals> = BTreeMap::new();

    for entry in entries {
        let Some(rest) = relative_to(&entry.path, prefix) else {
            continue;
        };
        match rest.split_once('/') {
            None => nodes.push(Node::File(FileNode::new(entry.path.clone(), entry.totals))),
            Some((segment, _)) => *dirs.entry(segment).or_default() += entry.totals,
        }
    }

    nodes.extend(
        dirs.into_iter()
            .map(|(segment, totals)| Node::Dir(DirNode::new(segment, join(prefix, segment), totals))),
    );
    nodes
}

fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}/{}", prefix, segment)
    }
}
