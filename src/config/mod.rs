//! Configuration
//!
//! Layered configuration: built-in defaults, the global file, the workspace
//! file, then `COVTREE__*` environment variables.

pub mod facade;
pub mod merge;
pub mod sources;
pub mod xdg;

pub use facade::ConfigLoader;

use crate::contents::{DisplayType, Filters, OrderingDirection, OrderingParameter};
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_REPORTS_DIR: &str = ".covtree/reports";
pub const DEFAULT_SOURCE_ROOT: &str = ".";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CovtreeConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub reports: ReportsConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub critical_files: CriticalFilesConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Where report snapshots live: `<dir>/<commit>.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportsConfig {
    #[serde(default = "default_reports_dir")]
    pub dir: PathBuf,
}

fn default_reports_dir() -> PathBuf {
    PathBuf::from(DEFAULT_REPORTS_DIR)
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            dir: default_reports_dir(),
        }
    }
}

/// Checked-out source tree consulted for path existence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_root")]
    pub root: PathBuf,
}

fn default_source_root() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE_ROOT)
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root: default_source_root(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CriticalFilesConfig {
    /// Newline-delimited list of critical paths; none when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Defaults applied when a query does not set them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub display_type: DisplayType,
    #[serde(default)]
    pub ordering_parameter: OrderingParameter,
    #[serde(default)]
    pub ordering_direction: OrderingDirection,
}

impl DisplayConfig {
    pub fn default_filters(&self) -> Filters {
        Filters::default()
            .with_display_type(self.display_type)
            .with_ordering(self.ordering_parameter, self.ordering_direction)
    }
}

impl CovtreeConfig {
    pub fn reports_dir(&self, workspace_root: &Path) -> PathBuf {
        resolve(workspace_root, &self.reports.dir)
    }

    pub fn source_root(&self, workspace_root: &Path) -> PathBuf {
        resolve(workspace_root, &self.source.root)
    }

    pub fn critical_files_path(&self, workspace_root: &Path) -> Option<PathBuf> {
        self.critical_files
            .file
            .as_ref()
            .map(|p| resolve(workspace_root, p))
    }

    pub fn to_toml(&self) -> Result<String, ApiError> {
        toml::to_string_pretty(self)
            .map_err(|e| ApiError::ConfigError(format!("Failed to render config: {}", e)))
    }
}

fn resolve(workspace_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        workspace_root.join(path)
    }
}
