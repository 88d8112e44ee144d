//! Shared testing harness for `outdir` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated repository with a nested root project.
///
/// Layout: `<tmp>/repo/project/` holds `outdir.toml`; the default offset
/// relocates outputs to `<tmp>/repo/build/`.
pub(crate) struct TestContext {
    root: TempDir,
    project_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let project_dir = root.path().join("repo").join("project");
        fs::create_dir_all(&project_dir).expect("Failed to create test project directory");
        Self { root, project_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Root project directory used for CLI invocations.
    pub(crate) fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Repository directory containing the project.
    pub(crate) fn repo_dir(&self) -> PathBuf {
        self.root.path().join("repo")
    }

    /// Shared build directory under the default offset.
    pub(crate) fn shared_build_dir(&self) -> PathBuf {
        self.repo_dir().join("build")
    }

    /// Write `outdir.toml` into the project directory.
    pub(crate) fn write_config(&self, content: &str) {
        fs::write(self.project_dir.join("outdir.toml"), content).expect("Failed to write config");
    }

    /// Write a config declaring `subprojects` with default relocation.
    pub(crate) fn write_subprojects(&self, subprojects: &[&str]) {
        let names = subprojects.iter().map(|name| format!("\"{}\"", name)).collect::<Vec<_>>();
        self.write_config(&format!(
            "[project]\nname = \"android\"\nsubprojects = [{}]\n",
            names.join(", ")
        ));
    }

    /// Create a file (and its parents) under the shared build directory.
    pub(crate) fn seed_output(&self, relative: &str) -> PathBuf {
        let path = self.shared_build_dir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create output directory");
        }
        fs::write(&path, "artifact").expect("Failed to write output file");
        path
    }

    /// Build a command for invoking the compiled `outdir` binary in the project directory.
    pub(crate) fn cli(&self) -> Command {
        self.cli_in(self.project_dir())
    }

    /// Build a command for invoking the compiled `outdir` binary within a custom directory.
    pub(crate) fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("outdir").expect("Failed to locate outdir binary");
        cmd.current_dir(dir.as_ref()).env("HOME", self.home());
        cmd
    }

    /// Assert that the shared build directory exists.
    pub(crate) fn assert_shared_build_exists(&self) {
        assert!(self.shared_build_dir().exists(), "shared build directory should exist");
    }

    /// Assert that the shared build directory does not exist.
    pub(crate) fn assert_shared_build_not_exists(&self) {
        assert!(!self.shared_build_dir().exists(), "shared build directory should not exist");
    }
}
