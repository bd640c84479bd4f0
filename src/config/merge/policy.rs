//! Built-in defaults: the lowest-precedence layer.

use crate::config::{DEFAULT_REPORTS_DIR, DEFAULT_SOURCE_ROOT};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Start a builder seeded with the scalar defaults every layer overrides.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("reports.dir", DEFAULT_REPORTS_DIR)?
        .set_default("source.root", DEFAULT_SOURCE_ROOT)?
        .set_default("display.display_type", "TREE")?
        .set_default("display.ordering_parameter", "NAME")?
        .set_default("display.ordering_direction", "ASC")
}
