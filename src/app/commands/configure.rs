//! Configuration pass: load config, resolve the base once, bind every project.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::configuration::{CONFIG_FILE, load_config};
use crate::domain::{AppError, BuildBase, BuildLayout, RelativeOffset, resolve_base};
use crate::ports::{BuildTree, ConfigSource};

/// Command-line overrides applied on top of `outdir.toml`.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Config file path. Relative paths are taken from the project directory.
    pub config: Option<PathBuf>,
    /// Offset replacing `[relocation] offset`.
    pub offset: Option<RelativeOffset>,
}

/// Outcome of a successful configuration pass.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub config_path: PathBuf,
    pub offset: RelativeOffset,
    pub base: BuildBase,
    pub layout: BuildLayout,
}

/// Run the configuration pass for the project at `dir`.
///
/// Errors abort the pass before anything is bound: the base is resolved first,
/// then every subproject is enumerated, and only then is the layout produced.
pub fn execute<S: ConfigSource + BuildTree>(
    ctx: &AppContext<S>,
    dir: &Path,
    overrides: &Overrides,
) -> Result<Configuration, AppError> {
    let dir = std::path::absolute(dir)?;
    let config_path = match &overrides.config {
        Some(path) => dir.join(path),
        None => dir.join(CONFIG_FILE),
    };
    let project_dir = config_path.parent().map(Path::to_path_buf).unwrap_or_else(|| dir.clone());

    let config = load_config(ctx.store(), &config_path)?;
    let offset = overrides.offset.clone().unwrap_or_else(|| config.relocation.offset.clone());

    let default_output = config.project.default_output(&project_dir);
    let base = resolve_base(&default_output, &offset)?;

    let graph = config.project.project_graph(&project_dir)?;
    let layout = graph.bind(&base)?;

    Ok(Configuration { config_path, offset, base, layout })
}
