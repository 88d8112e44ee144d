//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::FilesystemStore;
use crate::app::commands::clean::CLEAN_TASK;
use crate::app::commands::configure::{self, Configuration};
use crate::app::tasks::{TaskOutcome, TaskRegistry};
use crate::app::AppContext;

pub use crate::app::commands::clean::CleanOutcome;
pub use crate::app::commands::configure::Overrides;
pub use crate::domain::{AppError, BuildLayout};

/// Create an `AppContext` backed by the local filesystem.
fn create_context() -> AppContext<FilesystemStore> {
    AppContext::new(FilesystemStore::new())
}

/// Run the configuration pass for the project at `path`.
pub fn configure_at(path: &Path, overrides: &Overrides) -> Result<Configuration, AppError> {
    let ctx = create_context();
    configure::execute(&ctx, path, overrides)
}

// =============================================================================
// Layout API
// =============================================================================

/// Resolve the shared build layout for the project in the current directory.
pub fn layout(overrides: &Overrides) -> Result<BuildLayout, AppError> {
    layout_at(std::env::current_dir()?, overrides)
}

/// Resolve the shared build layout for the project at `path`.
pub fn layout_at(path: impl Into<PathBuf>, overrides: &Overrides) -> Result<BuildLayout, AppError> {
    let path = path.into();
    configure_at(&path, overrides).map(|configuration| configuration.layout)
}

// =============================================================================
// Task API
// =============================================================================

/// Names and descriptions of the tasks registered for the project at `path`.
pub fn tasks_at(
    path: impl Into<PathBuf>,
    overrides: &Overrides,
) -> Result<Vec<(String, String)>, AppError> {
    let path = path.into();
    let configuration = configure_at(&path, overrides)?;
    Ok(TaskRegistry::with_defaults(&configuration.base)?.describe())
}

/// Invoke the task `name` for the project at `path`.
pub fn run_task_at(
    name: &str,
    path: impl Into<PathBuf>,
    overrides: &Overrides,
) -> Result<TaskOutcome, AppError> {
    let path = path.into();
    let ctx = create_context();
    let configuration = configure::execute(&ctx, &path, overrides)?;
    let registry = TaskRegistry::with_defaults(&configuration.base)?;
    registry.invoke(name, ctx.store())
}

/// Delete the shared build directory of the project in the current directory.
pub fn clean(overrides: &Overrides) -> Result<CleanOutcome, AppError> {
    clean_at(std::env::current_dir()?, overrides)
}

/// Delete the shared build directory of the project at `path`.
pub fn clean_at(path: impl Into<PathBuf>, overrides: &Overrides) -> Result<CleanOutcome, AppError> {
    let TaskOutcome::Clean(outcome) = run_task_at(CLEAN_TASK, path, overrides)?;
    Ok(outcome)
}
