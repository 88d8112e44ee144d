use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for outdir operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No configuration file at the expected location.
    #[error("Config not found: {}. Create outdir.toml or pass --config.", .0.display())]
    ConfigNotFound(PathBuf),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Project name cannot be used as a directory segment.
    #[error(
        "Invalid project name '{0}': must be alphanumeric with hyphens, underscores, or periods"
    )]
    InvalidProjectName(String),

    /// Relocation offset is not a usable relative path.
    #[error("Invalid offset '{offset}': {reason}")]
    InvalidOffset { offset: String, reason: String },

    /// The base output path could not be derived.
    #[error("Cannot resolve '{offset}' against {}: {reason}", .default_output.display())]
    PathResolution { default_output: PathBuf, offset: String, reason: String },

    /// Two projects would write into the same output directory.
    #[error("Projects '{first}' and '{second}' both resolve to {}", .path.display())]
    RebindConflict { first: String, second: String, path: PathBuf },

    /// Evaluation dependency names a subproject that was never enumerated.
    #[error("Unknown subproject '{0}'")]
    UnknownProject(String),

    /// No task registered under the requested name.
    #[error("Task '{0}' not found")]
    UnknownTask(String),

    /// A task with the same name is already registered.
    #[error("Task '{0}' is already registered")]
    TaskAlreadyRegistered(String),

    /// The clean task could not remove the build tree.
    #[error("Failed to delete {}: {source}", .path.display())]
    DeleteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
