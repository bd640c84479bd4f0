//! Environment variable source: COVTREE__ prefix with __ separator

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment};

/// `COVTREE__REPORTS__DIR=/x` sets `reports.dir`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(
        Environment::with_prefix("COVTREE")
            .separator("__")
            .try_parsing(true),
    ))
}
