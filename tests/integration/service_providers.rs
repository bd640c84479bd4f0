use covtree::critical::{CriticalFileList, NoCriticalFiles};
use covtree::oracle::{FsPathOracle, KnownPaths};
use covtree::report::{CoverageReport, JsonReportProvider, ReportProvider};
use covtree::service::{report_totals, PathContentsRequest, PathContentsService};
use covtree::{ApiError, Filters, OrderingDirection, OrderingParameter, Outcome, Totals};
use std::collections::HashSet;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

use crate::support::{sample_report, SAMPLE_REPORT_JSON};

struct Fixture {
    _temp: TempDir,
    reports: std::path::PathBuf,
    source: std::path::PathBuf,
    critical: std::path::PathBuf,
}

fn fixture() -> Fixture {
    let temp = TempDir::new().unwrap();
    let reports = temp.path().join("reports");
    let source = temp.path().join("source");
    fs::create_dir_all(&reports).unwrap();
    fs::create_dir_all(source.join("docs")).unwrap();
    fs::write(reports.join("abc123.json"), SAMPLE_REPORT_JSON).unwrap();
    let critical = temp.path().join("critical.txt");
    fs::write(&critical, "# profiling\nfolder/fileB.py\n").unwrap();
    Fixture {
        reports,
        source,
        critical,
        _temp: temp,
    }
}

#[test]
fn service_resolves_contents_from_disk() {
    let fx = fixture();
    let service = PathContentsService::new(
        JsonReportProvider::new(&fx.reports),
        FsPathOracle::new(&fx.source),
        CriticalFileList::new(&fx.critical),
    );
    let request = PathContentsRequest::new("abc123", "folder").with_filters(
        Filters::default().with_ordering(OrderingParameter::Hits, OrderingDirection::Asc),
    );
    let outcome = service.path_contents(&request).unwrap();
    let results = outcome.results().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].path(), "folder/fileB.py");
    assert_eq!(results[0].is_critical_file(), Some(true));
    assert_eq!(results[1].path(), "folder/subfolder");
}

#[test]
fn service_reports_missing_head_report_for_unknown_commit() {
    let fx = fixture();
    let service = PathContentsService::new(
        JsonReportProvider::new(&fx.reports),
        FsPathOracle::new(&fx.source),
        // Would fail if read: critical files are only fetched once a report exists.
        CriticalFileList::new(fx.reports.join("does-not-exist.txt")),
    );
    let outcome = service
        .path_contents(&PathContentsRequest::new("deadbeef", ""))
        .unwrap();
    assert_eq!(outcome, Outcome::missing_head_report());
}

#[test]
fn service_distinguishes_missing_coverage_from_unknown_path() {
    let fx = fixture();
    let service = PathContentsService::new(
        JsonReportProvider::new(&fx.reports),
        FsPathOracle::new(&fx.source),
        NoCriticalFiles,
    );
    let outcome = service
        .path_contents(&PathContentsRequest::new("abc123", "docs"))
        .unwrap();
    assert_eq!(outcome, Outcome::missing_coverage("docs"));

    let outcome = service
        .path_contents(&PathContentsRequest::new("abc123", "nowhere"))
        .unwrap();
    assert_eq!(outcome, Outcome::unknown_path("nowhere"));
}

#[test]
fn service_rejects_malformed_paths() {
    let fx = fixture();
    let service = PathContentsService::new(
        JsonReportProvider::new(&fx.reports),
        KnownPaths::default(),
        NoCriticalFiles,
    );
    let err = service
        .path_contents(&PathContentsRequest::new("abc123", "/folder"))
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidArgument(_)));
}

#[test]
fn provider_failures_propagate() {
    struct Broken;
    impl ReportProvider for Broken {
        type Report = CoverageReport;
        fn build_report(&self, _commit: &str) -> Result<Option<CoverageReport>, ApiError> {
            Err(ApiError::ReportProvider("archive offline".to_string()))
        }
    }

    let service = PathContentsService::new(Broken, KnownPaths::default(), NoCriticalFiles);
    let err = service
        .path_contents(&PathContentsRequest::new("abc", ""))
        .unwrap_err();
    assert!(matches!(err, ApiError::ReportProvider(_)));
}

#[test]
fn report_totals_cover_every_file() {
    let fx = fixture();
    let service = PathContentsService::new(
        JsonReportProvider::new(&fx.reports),
        KnownPaths::default(),
        NoCriticalFiles,
    );
    let summary = service.report_totals("abc123").unwrap().unwrap();
    assert_eq!(summary.files, 5);
    assert_eq!(summary.totals, Totals::new(40, 0, 0, 50));
    assert!(service.report_totals("missing").unwrap().is_none());
}

/// Provider backed by an in-memory snapshot that counts builds.
struct MemoryProvider {
    report: CoverageReport,
    builds: AtomicUsize,
}

impl ReportProvider for MemoryProvider {
    type Report = CoverageReport;

    fn build_report(&self, _commit: &str) -> Result<Option<CoverageReport>, ApiError> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        Ok(Some(self.report.clone()))
    }
}

#[test]
fn concurrent_queries_share_one_service() {
    let provider = MemoryProvider {
        report: sample_report(),
        builds: AtomicUsize::new(0),
    };
    let critical: HashSet<String> = ["fileA.py".to_string()].into();
    let service = Arc::new(PathContentsService::new(
        provider,
        KnownPaths::new(["fileA.py"]),
        critical,
    ));

    let handles: Vec<_> = ["", "folder", "folder/subfolder", ""]
        .into_iter()
        .map(|path| {
            let service = Arc::clone(&service);
            std::thread::spawn(move || {
                service
                    .path_contents(&PathContentsRequest::new("head", path))
                    .unwrap()
            })
        })
        .collect();

    let outcomes: Vec<Outcome> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outcomes[0], outcomes[3]);
    assert_eq!(outcomes[1].results().unwrap().len(), 2);
    assert_eq!(outcomes[2].results().unwrap().len(), 2);
}

#[test]
fn report_totals_need_only_the_provider() {
    let fx = fixture();
    let provider = JsonReportProvider::new(&fx.reports);
    let summary = report_totals(&provider, "abc123").unwrap().unwrap();
    assert_eq!(summary.totals.percent_covered(), 80.0);
    assert!(report_totals(&provider, "deadbeef").unwrap().is_none());
}

#[test]
fn report_totals_saturate_on_huge_reports() {
    let provider = MemoryProvider {
        report: CoverageReport::new(vec![
            covtree::FileEntry::new("d/a.py", Totals::new(u64::MAX, 0, 0, u64::MAX)),
            covtree::FileEntry::new("d/b.py", Totals::new(1, 0, 0, 1)),
        ]),
        builds: AtomicUsize::new(0),
    };
    let summary = report_totals(&provider, "head").unwrap().unwrap();
    assert_eq!(summary.totals.lines, u64::MAX);
    assert_eq!(provider.builds.load(Ordering::SeqCst), 1);
}
