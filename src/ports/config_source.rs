//! Read access to the project configuration file.

use std::path::Path;

use crate::domain::AppError;

/// Port for reading configuration text.
pub trait ConfigSource {
    /// Read the file at `path` as UTF-8 text. `Ok(None)` if it does not exist.
    fn read_config(&self, path: &Path) -> Result<Option<String>, AppError>;
}
