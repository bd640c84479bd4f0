//! Sorter
//!
//! Orders files and directories together on their shared projection. Ties
//! break by ascending name, then ascending path, whatever the direction.

use super::filters::{Ordering, OrderingDirection, OrderingParameter};
use super::node::Node;
use std::cmp;

pub fn sort_nodes(nodes: &mut [Node], ordering: Ordering) {
    nodes.sort_by(|a, b| compare(a, b, ordering));
}

fn compare(a: &Node, b: &Node, ordering: Ordering) -> cmp::Ordering {
    let primary = match ordering.parameter {
        OrderingParameter::Name => a.name().cmp(b.name()),
        OrderingParameter::Hits => a.totals().hits.cmp(&b.totals().hits),
        OrderingParameter::Misses => a.totals().misses.cmp(&b.totals().misses),
        OrderingParameter::Partials => a.totals().partials.cmp(&b.totals().partials),
        OrderingParameter::Lines => a.totals().lines.cmp(&b.totals().lines),
        OrderingParameter::Coverage => a.percent_covered().total_cmp(&b.percent_covered()),
    };
    let primary = match ordering.direction {
        OrderingDirection::Asc => primary,
        OrderingDirection::Desc => primary.reverse(),
    };
    primary
        .then_with(|| a.name().cmp(b.name()))
        .then_with(|| a.path().cmp(b.path()))
}
