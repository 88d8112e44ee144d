//! Build configuration loading.

use std::path::Path;

use crate::domain::{AppError, BuildConfig};
use crate::ports::ConfigSource;

/// Config file looked up in the project directory.
pub const CONFIG_FILE: &str = "outdir.toml";

/// Load and parse the build configuration at `path`.
pub fn load_config(source: &impl ConfigSource, path: &Path) -> Result<BuildConfig, AppError> {
    let content =
        source.read_config(path)?.ok_or_else(|| AppError::ConfigNotFound(path.to_path_buf()))?;
    tracing::debug!(config = %path.display(), "loaded build configuration");
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<BuildConfig, AppError> {
    let config: BuildConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
