//! Build relocation configuration loaded from `outdir.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{AppError, ProjectGraph, ProjectName, RelativeOffset};

/// Root project name used when neither the config nor the directory provides one.
pub const FALLBACK_ROOT_NAME: &str = "root";

/// Configuration for build relocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Project tree description.
    #[serde(default)]
    pub project: ProjectConfig,
    /// Where the shared build directory lives relative to the default one.
    #[serde(default)]
    pub relocation: RelocationConfig,
}

impl BuildConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.project.validate()
    }
}

/// Root project and subproject enumeration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Root project name. Defaults to the project directory name.
    #[serde(default)]
    pub name: Option<ProjectName>,
    /// Default output location of the root project, relative to its directory.
    #[serde(default = "default_build_dir")]
    pub build_dir: PathBuf,
    /// Subproject names, in declaration order.
    #[serde(default)]
    pub subprojects: Vec<String>,
    /// Subprojects bound before all others.
    #[serde(default)]
    pub evaluation_depends_on: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: None,
            build_dir: default_build_dir(),
            subprojects: Vec::new(),
            evaluation_depends_on: Vec::new(),
        }
    }
}

impl ProjectConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.build_dir.as_os_str().is_empty() {
            return Err(AppError::config_error("project.build_dir must not be empty"));
        }
        Ok(())
    }

    /// Root project name, falling back to the directory name.
    pub fn root_name(&self, project_dir: &Path) -> ProjectName {
        if let Some(name) = &self.name {
            return name.clone();
        }
        project_dir
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| ProjectName::new(name).ok())
            .unwrap_or_else(|| ProjectName(FALLBACK_ROOT_NAME.to_string()))
    }

    /// Default output location of the root project before relocation.
    pub fn default_output(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.build_dir)
    }

    /// Enumerate every configured subproject and evaluation dependency.
    pub fn project_graph(&self, project_dir: &Path) -> Result<ProjectGraph, AppError> {
        let mut graph = ProjectGraph::new(self.root_name(project_dir));
        for name in &self.subprojects {
            graph.enumerate(name)?;
        }
        for name in &self.evaluation_depends_on {
            graph.evaluation_depends_on(name)?;
        }
        Ok(graph)
    }
}

/// Relocation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelocationConfig {
    /// Offset from the root project's default output location.
    #[serde(default)]
    pub offset: RelativeOffset,
}

fn default_build_dir() -> PathBuf {
    PathBuf::from("build")
}
