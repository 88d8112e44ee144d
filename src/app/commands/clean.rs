//! The `clean` task: recursive deletion of the shared build directory.

use std::io;
use std::path::{Path, PathBuf};

use crate::app::tasks::{Task, TaskOutcome};
use crate::domain::{AppError, BuildBase};
use crate::ports::{BuildTree, RemoveOutcome};

pub const CLEAN_TASK: &str = "clean";

/// Result of a clean invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOutcome {
    pub target: PathBuf,
    pub removed: RemoveOutcome,
}

impl CleanOutcome {
    pub fn removed_anything(&self) -> bool {
        self.removed != RemoveOutcome::Absent
    }
}

/// Deletes the resolved base directory and everything rebound under it.
#[derive(Debug, Clone)]
pub struct CleanTask {
    base: BuildBase,
}

impl CleanTask {
    pub fn new(base: BuildBase) -> Self {
        Self { base }
    }

    pub fn target(&self) -> &Path {
        self.base.as_path()
    }
}

impl Task for CleanTask {
    fn name(&self) -> &str {
        CLEAN_TASK
    }

    fn description(&self) -> &str {
        "Delete the shared build directory"
    }

    fn run(&self, tree: &dyn BuildTree) -> Result<TaskOutcome, AppError> {
        execute(self.target(), tree).map(TaskOutcome::Clean)
    }
}

/// Remove `target` recursively.
///
/// Succeeds without touching anything when `target` is absent. The delete runs
/// under the build tree's exclusive lock; a held lock, a permission problem or
/// any other filesystem error is returned as `DeleteFailure` and entries removed
/// before the failure stay removed.
pub fn execute(target: &Path, tree: &dyn BuildTree) -> Result<CleanOutcome, AppError> {
    let failure = |source: io::Error| AppError::DeleteFailure { path: target.to_path_buf(), source };

    if target.parent().is_none() {
        return Err(failure(io::Error::new(
            io::ErrorKind::InvalidInput,
            "refusing to delete a filesystem root",
        )));
    }

    let present = tree.exists(target).map_err(|err| {
        tracing::warn!(target = %target.display(), error = %err, "cannot inspect build directory");
        failure(err)
    })?;
    if !present {
        tracing::info!(target = %target.display(), "nothing to clean");
        return Ok(CleanOutcome { target: target.to_path_buf(), removed: RemoveOutcome::Absent });
    }

    let _lock = tree.lock_exclusive(target).map_err(|err| {
        tracing::warn!(target = %target.display(), error = %err, "build directory is locked");
        failure(err)
    })?;

    tracing::info!(target = %target.display(), "deleting build directory");
    let removed = tree.remove_tree(target).map_err(|err| {
        tracing::warn!(target = %target.display(), error = %err, "clean failed");
        failure(err)
    })?;

    Ok(CleanOutcome { target: target.to_path_buf(), removed })
}
