use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::domain::AppError;
use crate::ports::{BuildTree, BuildTreeLock, ConfigSource, RemoveOutcome};

/// Filesystem-backed store for configuration and the build tree.
#[derive(Debug, Clone, Default)]
pub struct FilesystemStore;

impl FilesystemStore {
    pub fn new() -> Self {
        Self
    }

    /// Lock file guarding `path`: `<parent>/.<name>.lock`, outside the tree itself.
    pub fn lock_path(path: &Path) -> PathBuf {
        let name = path.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
        let lock_name = format!(".{}.lock", name);
        match path.parent() {
            Some(parent) => parent.join(lock_name),
            None => PathBuf::from(lock_name),
        }
    }
}

/// Advisory lock held through an open handle. Closing the handle releases it.
struct FileLock {
    _file: File,
}

impl BuildTreeLock for FileLock {}

impl ConfigSource for FilesystemStore {
    fn read_config(&self, path: &Path) -> Result<Option<String>, AppError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::Io(err)),
        }
    }
}

impl BuildTree for FilesystemStore {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        match path.symlink_metadata() {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err),
        }
    }

    fn lock_exclusive(&self, path: &Path) -> io::Result<Box<dyn BuildTreeLock>> {
        let lock_path = Self::lock_path(path);
        let file = OpenOptions::new().create(true).truncate(false).write(true).open(&lock_path)?;

        if let Err(err) = file.try_lock_exclusive() {
            if err.raw_os_error() == fs2::lock_contended_error().raw_os_error() {
                return Err(io::Error::new(
                    io::ErrorKind::WouldBlock,
                    format!("build directory is in use (lock held on {})", lock_path.display()),
                ));
            }
            return Err(err);
        }

        tracing::trace!(lock = %lock_path.display(), "acquired build tree lock");
        Ok(Box::new(FileLock { _file: file }))
    }

    fn remove_tree(&self, path: &Path) -> io::Result<RemoveOutcome> {
        let metadata = match path.symlink_metadata() {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(RemoveOutcome::Absent),
            Err(err) => return Err(err),
        };

        if metadata.is_dir() {
            fs::remove_dir_all(path)?;
            Ok(RemoveOutcome::RemovedDirectory)
        } else {
            fs::remove_file(path)?;
            Ok(RemoveOutcome::RemovedFile)
        }
    }
}
