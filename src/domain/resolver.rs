//! Lexical resolution of the shared base output path.

use std::ffi::OsString;
use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use super::offset::{OffsetStep, RelativeOffset};
use super::{AppError, ProjectName};

/// The resolved shared output directory.
///
/// Always absolute and free of `.`/`..` components. Only [`resolve_base`]
/// constructs one, so holding a `BuildBase` means resolution succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BuildBase(PathBuf);

impl BuildBase {
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Output directory for a subproject: `<base>/<name>`.
    pub fn child(&self, name: &ProjectName) -> PathBuf {
        self.0.join(name.as_str())
    }
}

impl AsRef<Path> for BuildBase {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for BuildBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Resolve `offset` against the root project's default output location.
///
/// Pure path arithmetic: nothing is read from the filesystem and symlinks are
/// not followed. Fails when `default_output` is relative or when `..` steps
/// climb above the filesystem root.
pub fn resolve_base(default_output: &Path, offset: &RelativeOffset) -> Result<BuildBase, AppError> {
    let failure = |reason: &str| AppError::PathResolution {
        default_output: default_output.to_path_buf(),
        offset: offset.to_string(),
        reason: reason.to_string(),
    };

    if !default_output.is_absolute() {
        return Err(failure("default output location must be absolute"));
    }

    let mut anchor = PathBuf::new();
    let mut segments: Vec<OsString> = Vec::new();

    for component in default_output.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => anchor.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                if segments.pop().is_none() {
                    return Err(failure("default output location escapes the filesystem root"));
                }
            }
            Component::Normal(name) => segments.push(name.to_os_string()),
        }
    }

    for step in offset.steps() {
        match step {
            OffsetStep::Up => {
                if segments.pop().is_none() {
                    return Err(failure("offset escapes the filesystem root"));
                }
            }
            OffsetStep::Into(name) => segments.push(OsString::from(name)),
        }
    }

    let mut resolved = anchor;
    resolved.extend(segments);
    tracing::debug!(base = %resolved.display(), "resolved shared build directory");
    Ok(BuildBase(resolved))
}
