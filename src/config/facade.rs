//! ConfigLoader facade delegating to the merge service.

use super::merge::service::MergeService;
use super::CovtreeConfig;
use crate::error::ApiError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace from every standard source.
    pub fn load(workspace_root: &Path) -> Result<CovtreeConfig, ApiError> {
        MergeService::load(workspace_root)
    }

    /// Load configuration from a specific file, still overlaid by the environment.
    pub fn load_from_file(path: &Path) -> Result<CovtreeConfig, ApiError> {
        MergeService::load_from_file(path)
    }
}
