//! Project enumeration and output-directory rebinding.
//!
//! Rebinding is split in two phases. A [`ProjectGraph`] collects the root name,
//! every subproject name and the evaluation dependencies; [`ProjectGraph::bind`]
//! then consumes the graph and produces the final [`BuildLayout`]. Because `bind`
//! takes the graph by value, no project can be bound before enumeration ends,
//! and a failed bind leaves nothing half-applied.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;

use super::{AppError, BuildBase, ProjectName};

/// Output assignment for a single project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectOutput {
    pub name: ProjectName,
    pub output_dir: PathBuf,
}

/// Result of binding every project to the shared base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildLayout {
    pub base: BuildBase,
    pub root: ProjectOutput,
    /// Subprojects in evaluation order.
    pub subprojects: Vec<ProjectOutput>,
}

impl BuildLayout {
    /// Every bound output directory, root first.
    pub fn output_dirs(&self) -> impl Iterator<Item = &PathBuf> {
        std::iter::once(&self.root.output_dir)
            .chain(self.subprojects.iter().map(|project| &project.output_dir))
    }

    pub fn subproject(&self, name: &str) -> Option<&ProjectOutput> {
        self.subprojects.iter().find(|project| project.name.as_str() == name)
    }
}

/// Enumeration phase of the root project and its subprojects.
#[derive(Debug, Clone)]
pub struct ProjectGraph {
    root: ProjectName,
    subprojects: Vec<ProjectName>,
    evaluation_dependencies: Vec<ProjectName>,
}

impl ProjectGraph {
    pub fn new(root: ProjectName) -> Self {
        Self { root, subprojects: Vec::new(), evaluation_dependencies: Vec::new() }
    }

    /// Register a subproject by name.
    ///
    /// Only the name itself is validated here. Collisions between names are
    /// reported by [`ProjectGraph::bind`], where the contested path is known.
    pub fn enumerate(&mut self, name: &str) -> Result<&mut Self, AppError> {
        let name = ProjectName::new(name)?;
        self.subprojects.push(name);
        Ok(self)
    }

    /// Require `name` to be bound before every other subproject.
    pub fn evaluation_depends_on(&mut self, name: &str) -> Result<&mut Self, AppError> {
        let known = self
            .subprojects
            .iter()
            .find(|known| known.as_str() == name)
            .cloned()
            .ok_or_else(|| AppError::UnknownProject(name.to_string()))?;
        if !self.evaluation_dependencies.contains(&known) {
            self.evaluation_dependencies.push(known);
        }
        Ok(self)
    }

    /// Subprojects in the order they will be bound.
    pub fn evaluation_order(&self) -> Vec<&ProjectName> {
        let mut order: Vec<&ProjectName> = self.evaluation_dependencies.iter().collect();
        let mut pending: Vec<&ProjectName> = self.evaluation_dependencies.iter().collect();
        for name in &self.subprojects {
            match pending.iter().position(|dep| *dep == name) {
                Some(index) => {
                    pending.swap_remove(index);
                }
                None => order.push(name),
            }
        }
        order
    }

    /// Bind the root to `base` and every subproject to `base/<name>`.
    ///
    /// Two projects claiming the same directory, exactly or ignoring ASCII
    /// case, fail with `RebindConflict` naming both.
    pub fn bind(self, base: &BuildBase) -> Result<BuildLayout, AppError> {
        let root_dir = base.as_path().to_path_buf();
        // The root owns `base` itself; children are always one segment below it.
        let mut claimed: HashMap<String, &ProjectName> = HashMap::new();

        let mut subprojects = Vec::with_capacity(self.subprojects.len());
        for name in self.evaluation_order() {
            let output_dir = base.child(name);
            if let Some(owner) = claimed.insert(name.folded(), name) {
                return Err(AppError::RebindConflict {
                    first: owner.to_string(),
                    second: name.to_string(),
                    path: output_dir,
                });
            }
            tracing::debug!(project = %name, output = %output_dir.display(), "bound subproject");
            subprojects.push(ProjectOutput { name: name.clone(), output_dir });
        }

        tracing::info!(
            root = %self.root,
            base = %base,
            subprojects = subprojects.len(),
            "rebound build directories"
        );

        Ok(BuildLayout {
            base: base.clone(),
            root: ProjectOutput { name: self.root.clone(), output_dir: root_dir },
            subprojects,
        })
    }
}
