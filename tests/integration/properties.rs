use covtree::index::PathIndex;
use covtree::report::CoverageReport;
use covtree::{
    resolve_path_contents, ApiError, DisplayType, FileEntry, Filters, Node, OrderingDirection,
    OrderingParameter, Outcome, Totals,
};
use proptest::prelude::*;
use std::collections::{BTreeMap, HashSet};

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("src".to_string()),
        Just("lib".to_string()),
        Just("Tests".to_string()),
        "[a-c]{1,2}",
        "[a-z]{1,4}\\.(py|rs)",
    ]
}

fn totals() -> impl Strategy<Value = Totals> {
    (0u64..50, 0u64..50, 0u64..50, 0u64..20).prop_map(|(h, m, p, extra)| {
        Totals::new(h, m, p, h + m + p + extra)
    })
}

/// Reports with unique, well-formed paths up to four segments deep.
fn report() -> impl Strategy<Value = CoverageReport> {
    prop::collection::btree_map(
        prop::collection::vec(segment(), 1..=4).prop_map(|segs| segs.join("/")),
        totals(),
        0..40,
    )
    .prop_map(|files: BTreeMap<String, Totals>| {
        let paths: Vec<String> = files.keys().cloned().collect();
        // A path that is also a directory of another file is not a valid report.
        files
            .into_iter()
            .filter(|(path, _)| {
                !paths
                    .iter()
                    .any(|other| other.starts_with(&format!("{}/", path)))
            })
            .collect()
    })
}

fn parameter() -> impl Strategy<Value = OrderingParameter> {
    prop_oneof![
        Just(OrderingParameter::Name),
        Just(OrderingParameter::Hits),
        Just(OrderingParameter::Misses),
        Just(OrderingParameter::Partials),
        Just(OrderingParameter::Lines),
        Just(OrderingParameter::Coverage),
    ]
}

fn direction() -> impl Strategy<Value = OrderingDirection> {
    prop_oneof![Just(OrderingDirection::Asc), Just(OrderingDirection::Desc)]
}

fn prefixes(report: &CoverageReport) -> Vec<String> {
    let mut out: Vec<String> = vec![String::new()];
    for entry in &report.files {
        let segs: Vec<&str> = entry.path.split('/').collect();
        for depth in 1..segs.len() {
            out.push(segs[..depth].join("/"));
        }
    }
    out.sort();
    out.dedup();
    out
}

fn contents(report: &CoverageReport, prefix: &str, filters: &Filters) -> Vec<Node> {
    let oracle = |_: &str| -> Result<bool, ApiError> { Ok(true) };
    match resolve_path_contents(Some(report), prefix, filters, &HashSet::new(), &oracle).unwrap() {
        Outcome::PathContents { results } => results,
        other => panic!("prefix {:?} resolved to {:?}", prefix, other),
    }
}

proptest! {
    #[test]
    fn directory_totals_sum_every_descendant(report in report()) {
        for prefix in prefixes(&report) {
            for node in contents(&report, &prefix, &Filters::default()) {
                if let Node::Dir(dir) = &node {
                    let expected: Totals = report
                        .files
                        .iter()
                        .filter(|f| f.path.starts_with(&format!("{}/", dir.path)))
                        .map(|f| f.totals)
                        .sum();
                    prop_assert_eq!(dir.totals, expected);
                }
            }
        }
    }

    #[test]
    fn percent_covered_matches_formula(report in report()) {
        let nodes = contents(&report, "", &Filters::default());
        for node in nodes {
            let t = node.totals();
            let expected = if t.lines == 0 { 0.0 } else { 100.0 * t.hits as f64 / t.lines as f64 };
            prop_assert_eq!(node.percent_covered(), expected);
        }
    }

    #[test]
    fn search_returns_only_matching_files(report in report(), needle in "[a-cA-C]{1,2}") {
        for prefix in prefixes(&report) {
            let filters = Filters::default().with_search(needle.clone());
            let nodes = contents(&report, &prefix, &filters);
            let index = PathIndex::new(&report.files);
            let expected: HashSet<&str> = index
                .files_under(&prefix)
                .into_iter()
                .filter(|f| f.path.to_lowercase().contains(&needle.to_lowercase()))
                .map(|f| f.path.as_str())
                .collect();
            prop_assert!(nodes.iter().all(|n| !n.is_dir()));
            prop_assert_eq!(nodes.len(), expected.len());
            for node in &nodes {
                prop_assert!(expected.contains(node.path()));
            }
        }
    }

    #[test]
    fn list_mode_emits_each_file_once(report in report()) {
        for prefix in prefixes(&report) {
            let filters = Filters::default().with_display_type(DisplayType::List);
            let nodes = contents(&report, &prefix, &filters);
            let under = PathIndex::new(&report.files).files_under(&prefix).len();
            prop_assert_eq!(nodes.len(), under);
            let distinct: HashSet<&str> = nodes.iter().map(Node::path).collect();
            prop_assert_eq!(distinct.len(), under);
        }
    }

    #[test]
    fn ordering_is_deterministic_with_name_tiebreak(
        report in report(),
        parameter in parameter(),
        direction in direction(),
        display in prop_oneof![Just(DisplayType::Tree), Just(DisplayType::List)],
    ) {
        let filters = Filters::default()
            .with_ordering(parameter, direction)
            .with_display_type(display);
        let first = contents(&report, "", &filters);
        let mut shuffled = report.clone();
        shuffled.files.reverse();
        let second = contents(&shuffled, "", &filters);
        prop_assert_eq!(&first, &second);

        for pair in first.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            let key = |n: &Node| -> Option<f64> {
                let t = n.totals();
                match parameter {
                    OrderingParameter::Name => None,
                    OrderingParameter::Hits => Some(t.hits as f64),
                    OrderingParameter::Misses => Some(t.misses as f64),
                    OrderingParameter::Partials => Some(t.partials as f64),
                    OrderingParameter::Lines => Some(t.lines as f64),
                    OrderingParameter::Coverage => Some(n.percent_covered()),
                }
            };
            match (key(a), key(b)) {
                (Some(ka), Some(kb)) if ka == kb => prop_assert!(a.name() <= b.name()),
                (Some(ka), Some(kb)) => match direction {
                    OrderingDirection::Asc => prop_assert!(ka < kb),
                    OrderingDirection::Desc => prop_assert!(ka > kb),
                },
                _ => match direction {
                    OrderingDirection::Asc => prop_assert!(a.name() <= b.name()),
                    OrderingDirection::Desc => prop_assert!(a.name() >= b.name()),
                },
            }
        }
    }

    #[test]
    fn absent_report_always_missing_head_report(
        prefix in "[a-z/]{0,8}",
        search in prop::option::of("[a-z]{0,3}"),
    ) {
        let mut filters = Filters::default();
        filters.search_value = search;
        let oracle = |_: &str| -> Result<bool, ApiError> { panic!("oracle must not be consulted") };
        let outcome = resolve_path_contents::<CoverageReport, _>(
            None, &prefix, &filters, &HashSet::new(), &oracle,
        ).unwrap();
        prop_assert_eq!(outcome, Outcome::missing_head_report());
    }
}

#[test]
fn root_of_empty_report_is_empty_contents() {
    let report = CoverageReport::new(Vec::<FileEntry>::new());
    assert!(contents(&report, "", &Filters::default()).is_empty());
}
