//! CLI Tooling
//!
//! Command-line interface over the path contents service. Commands return
//! their rendered output as a string; the binary prints it.

use crate::config::{ConfigLoader, CovtreeConfig};
use crate::contents::{DisplayType, Filters, OrderingDirection, OrderingParameter};
use crate::critical::{CriticalFileList, CriticalFilesProvider, NoCriticalFiles};
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::oracle::FsPathOracle;
use crate::report::{CoverageReport, JsonReportProvider, ReportProvider, SingleFileReportProvider};
use crate::service::{report_totals, PathContentsRequest, PathContentsService};
use crate::tooling::format::{format_outcome_text, format_summary_text};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

/// covtree - browse coverage reports by directory
#[derive(Parser, Debug)]
#[command(name = "covtree")]
#[command(about = "Filtered, sorted, hierarchical views over per-file coverage reports")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Overlay logging flags on the configured logging section.
    pub fn logging_config(&self, base: &LoggingConfig) -> LoggingConfig {
        let mut config = base.clone();
        if self.verbose {
            config.level = "debug".to_string();
        }
        if let Some(level) = &self.log_level {
            config.level = level.clone();
        }
        if let Some(format) = &self.log_format {
            config.format = format.clone();
        }
        if let Some(output) = &self.log_output {
            config.output = output.clone();
        }
        if let Some(file) = &self.log_file {
            config.file = Some(file.clone());
        }
        config
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List coverage under a directory of the repository
    Contents {
        /// Repository-relative directory; omit for the root
        #[arg(default_value = "")]
        path: String,
        /// Commit whose report to read
        #[arg(long, default_value = "HEAD")]
        commit: String,
        /// Read this report file instead of the reports directory
        #[arg(long)]
        report: Option<PathBuf>,
        /// Case-insensitive substring to match against full file paths
        #[arg(long)]
        search: Option<String>,
        /// Sort key (name, hits, misses, partials, lines, coverage)
        #[arg(long)]
        order_by: Option<String>,
        /// Sort direction (asc, desc)
        #[arg(long)]
        direction: Option<String>,
        /// Display type (tree, list)
        #[arg(long)]
        display: Option<String>,
        /// Newline-delimited list of critical file paths
        #[arg(long)]
        critical_files: Option<PathBuf>,
        /// Source tree used to tell missing coverage from unknown paths
        #[arg(long)]
        source_root: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show totals for a whole report
    Summary {
        /// Commit whose report to read
        #[arg(long, default_value = "HEAD")]
        commit: String,
        /// Read this report file instead of the reports directory
        #[arg(long)]
        report: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the effective configuration
    Config {
        /// Output format (toml or json)
        #[arg(long, default_value = "toml")]
        format: String,
    },
}

type BoxedReports = Box<dyn ReportProvider<Report = CoverageReport>>;

/// CLI context holding the workspace and its loaded configuration.
pub struct CliContext {
    workspace_root: PathBuf,
    config: CovtreeConfig,
}

impl CliContext {
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match &config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self::with_config(workspace_root, config))
    }

    pub fn with_config(workspace_root: PathBuf, config: CovtreeConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    pub fn config(&self) -> &CovtreeConfig {
        &self.config
    }

    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        info!(command = command_name(command), "executing command");
        match command {
            Commands::Contents {
                path,
                commit,
                report,
                search,
                order_by,
                direction,
                display,
                critical_files,
                source_root,
                format,
            } => {
                let filters = self.build_filters(
                    search.as_deref(),
                    order_by.as_deref(),
                    direction.as_deref(),
                    display.as_deref(),
                )?;
                let path = normalize_cli_path(path);
                let service = PathContentsService::new(
                    self.report_provider(report.as_deref()),
                    FsPathOracle::new(self.source_root(source_root.as_deref())),
                    self.critical_files_provider(critical_files.as_deref()),
                );
                let request = PathContentsRequest::new(commit.clone(), path.clone())
                    .with_filters(filters);
                let outcome = service.path_contents(&request)?;
                match parse_output_format(format)? {
                    OutputFormat::Json => Ok(serde_json::to_string_pretty(&outcome)?),
                    OutputFormat::Text => Ok(format_outcome_text(&path, &outcome)),
                }
            }
            Commands::Summary {
                commit,
                report,
                format,
            } => {
                let summary = report_totals(&self.report_provider(report.as_deref()), commit)?;
                match parse_output_format(format)? {
                    OutputFormat::Json => {
                        let value = match summary {
                            Some(s) => serde_json::json!({
                                "commit": commit,
                                "files": s.files,
                                "hits": s.totals.hits,
                                "misses": s.totals.misses,
                                "partials": s.totals.partials,
                                "lines": s.totals.lines,
                                "percentCovered": s.totals.percent_covered(),
                            }),
                            None => serde_json::json!({
                                "commit": commit,
                                "message": crate::resolver::MISSING_HEAD_REPORT_MESSAGE,
                            }),
                        };
                        Ok(serde_json::to_string_pretty(&value)?)
                    }
                    OutputFormat::Text => Ok(format_summary_text(commit, summary.as_ref())),
                }
            }
            Commands::Config { format } => match format.as_str() {
                "toml" => self.config.to_toml(),
                "json" => Ok(serde_json::to_string_pretty(&self.config)?),
                other => Err(ApiError::InvalidArgument(format!(
                    "unknown config format: {} (expected toml or json)",
                    other
                ))),
            },
        }
    }

    /// Configured display defaults, overridden by whichever flags were given.
    fn build_filters(
        &self,
        search: Option<&str>,
        order_by: Option<&str>,
        direction: Option<&str>,
        display: Option<&str>,
    ) -> Result<Filters, ApiError> {
        let mut filters = self.config.display.default_filters();
        let defaults = filters.ordering_or_default();
        let parameter = match order_by {
            Some(s) => s.parse::<OrderingParameter>()?,
            None => defaults.parameter,
        };
        let direction = match direction {
            Some(s) => s.parse::<OrderingDirection>()?,
            None => defaults.direction,
        };
        filters = filters.with_ordering(parameter, direction);
        if let Some(display) = display {
            filters = filters.with_display_type(display.parse::<DisplayType>()?);
        }
        if let Some(search) = search {
            filters = filters.with_search(search);
        }
        Ok(filters)
    }

    /// `--source-root` resolves against the workspace like the configured root.
    fn source_root(&self, flag: Option<&Path>) -> PathBuf {
        match flag {
            Some(root) => self.workspace_root.join(root),
            None => self.config.source_root(&self.workspace_root),
        }
    }

    fn report_provider(&self, report: Option<&Path>) -> BoxedReports {
        match report {
            Some(file) => Box::new(SingleFileReportProvider::new(self.workspace_root.join(file))),
            None => Box::new(JsonReportProvider::new(
                self.config.reports_dir(&self.workspace_root),
            )),
        }
    }

    fn critical_files_provider(&self, file: Option<&Path>) -> Box<dyn CriticalFilesProvider> {
        let file = file
            .map(|f| self.workspace_root.join(f))
            .or_else(|| self.config.critical_files_path(&self.workspace_root));
        match file {
            Some(file) => Box::new(CriticalFileList::new(file)),
            None => Box::new(NoCriticalFiles),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_output_format(format: &str) -> Result<OutputFormat, ApiError> {
    match format {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => Err(ApiError::InvalidArgument(format!(
            "unknown output format: {} (expected text or json)",
            other
        ))),
    }
}

/// Trailing separators are accepted on the command line: `src/` means `src`.
fn normalize_cli_path(path: &str) -> String {
    path.trim_end_matches('/').to_string()
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Contents { .. } => "contents",
        Commands::Summary { .. } => "summary",
        Commands::Config { .. } => "config",
    }
}
