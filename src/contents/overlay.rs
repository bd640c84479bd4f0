//! Critical-file overlay.

use super::node::Node;
use std::collections::HashSet;

/// Flag file nodes whose path is in `critical_files`. Order and totals are untouched.
pub fn apply_critical_files(nodes: &mut [Node], critical_files: &HashSet<String>) {
    for node in nodes.iter_mut() {
        if let Node::File(file) = node {
            file.is_critical_file = critical_files.contains(&file.path);
        }
    }
}
