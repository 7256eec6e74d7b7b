//! Shared testing harness for `loadout` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated deployment directory with helpers for seeding configuration files.
pub(crate) struct TestContext {
    root: TempDir,
    base_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let base_dir = root.path().join("deploy");
        fs::create_dir_all(&base_dir).expect("Failed to create deploy directory");
        Self { root, base_dir }
    }

    /// Scratch area outside the deploy directory (upstream repos, fake tools).
    pub(crate) fn scratch(&self) -> &Path {
        self.root.path()
    }

    /// Directory that relative configuration paths resolve against.
    pub(crate) fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Write a file below the deploy directory, creating parents.
    pub(crate) fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.base_dir.join(relative);
        fs::create_dir_all(path.parent().expect("file has a parent"))
            .expect("Failed to create parent directory");
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Write the repository file with one entry.
    pub(crate) fn write_repo_config(
        &self,
        relative: &str,
        name: &str,
        path: &str,
        url: &str,
        version: &str,
    ) {
        let content = serde_json::json!({
            name: { "path": path, "url": url, "version": version }
        });
        self.write(relative, &content.to_string());
    }

    pub(crate) fn read_log(&self) -> String {
        fs::read_to_string(self.base_dir.join("main.log")).unwrap_or_default()
    }

    /// Build a command for invoking the compiled `loadout` binary in the deploy directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("loadout").expect("Failed to locate loadout binary");
        cmd.current_dir(&self.base_dir).env_remove("RUST_LOG");
        cmd
    }
}
