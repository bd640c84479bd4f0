//! MergeService: orchestrates sources, applies merge policy, deserializes to CovtreeConfig.

use super::policy;
use crate::config::sources::{environment, global_file, workspace_file};
use crate::config::CovtreeConfig;
use crate::error::ApiError;
use config::File;
use std::path::Path;
use tracing::debug;

pub struct MergeService;

impl MergeService {
    /// Precedence: defaults (lowest) -> global file -> workspace file -> environment (highest).
    pub fn load(workspace_root: &Path) -> Result<CovtreeConfig, ApiError> {
        let builder = policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder)?;

        let config: CovtreeConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "configuration loaded");
        Ok(config)
    }

    /// Explicit file replaces the global and workspace files; the environment still applies.
    pub fn load_from_file(path: &Path) -> Result<CovtreeConfig, ApiError> {
        if !path.is_file() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = policy::builder_with_defaults()?;
        let builder = builder.add_source(File::from(path));
        let builder = environment::add_to_builder(builder)?;

        let config: CovtreeConfig = builder.build()?.try_deserialize()?;
        debug!(file = %path.display(), "configuration loaded from file");
        Ok(config)
    }
}
