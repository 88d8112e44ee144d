//! Destructive operations on the shared build output tree.
//!
//! The port only knows about absolute paths; it has no notion of projects
//! or of how the base path was derived.

use std::io;
use std::path::Path;

/// What a removal found at the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Nothing existed at the path.
    Absent,
    /// A directory tree was removed.
    RemovedDirectory,
    /// A single file was removed.
    RemovedFile,
}

/// Guard for the exclusive lock on a build tree. Dropping it releases the lock.
pub trait BuildTreeLock {}

/// Port for removing the shared build tree.
pub trait BuildTree {
    /// Whether anything exists at `path` (without following a final symlink).
    ///
    /// Only a missing entry is `Ok(false)`; any other lookup failure, such as
    /// an unsearchable parent, is an error.
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Take the exclusive lock that guards deletion of `path`.
    ///
    /// Must not block: a lock held elsewhere is reported as an error of kind
    /// `WouldBlock`.
    fn lock_exclusive(&self, path: &Path) -> io::Result<Box<dyn BuildTreeLock>>;

    /// Remove `path` recursively. No-op if absent.
    ///
    /// Entries removed before a failure stay removed.
    fn remove_tree(&self, path: &Path) -> io::Result<RemoveOutcome>;
}
